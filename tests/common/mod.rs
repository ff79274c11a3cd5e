use assert_cmd::Command;
use assert_fs::TempDir;

/// Runs the CLI against an isolated data directory.
pub struct CliHarness {
    home: TempDir,
}

impl CliHarness {
    pub fn new() -> Self {
        Self {
            home: TempDir::new().expect("create temp home"),
        }
    }

    pub fn home(&self) -> &TempDir {
        &self.home
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("cardcycle_cli").expect("binary built");
        cmd.env("CARDCYCLE_HOME", self.home.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Runs `args` and returns stdout, asserting success.
    pub fn run_ok(&self, args: &[&str]) -> String {
        let output = self.cmd().args(args).assert().success();
        String::from_utf8(output.get_output().stdout.clone()).expect("utf8 stdout")
    }
}
