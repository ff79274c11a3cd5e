//! Configuration backup and restore.

use crate::cli::args::ParsedArgs;
use crate::cli::commands::CommandResult;
use crate::cli::output::{self, section};
use crate::cli::registry::CommandEntry;
use crate::cli::CliContext;
use crate::errors::CliError;

const USAGE: &str = "config backup [note] | config backups | config restore <name> | config path";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "Back up, list or restore the saved configuration",
        USAGE,
        cmd_config,
    )]
}

fn cmd_config(context: &mut CliContext, args: &ParsedArgs) -> CommandResult {
    match args.positional(0) {
        Some("backup") => {
            let note = args.positionals().get(1..).map(|rest| rest.join(" "));
            let name = context.manager.backup(&context.config, note.as_deref())?;
            output::success(format!("Backup written: {}", name));
            Ok(())
        }
        Some("backups") => {
            let backups = context.manager.list_backups()?;
            if args.flag("json") {
                return output::json(&backups);
            }
            if backups.is_empty() {
                output::info("No configuration backups found.");
                return Ok(());
            }
            section("Configuration backups");
            for name in backups {
                output::info(format!("  {}", name));
            }
            Ok(())
        }
        Some("restore") => {
            let name = args.positional(1).ok_or_else(|| {
                CliError::InvalidArguments(format!("backup name required; usage: {}", USAGE))
            })?;
            let restored = context.manager.restore(name)?;
            let safety = context
                .manager
                .backup(&context.config, Some("before restore"))?;
            context.config = restored;
            context.save_config()?;
            output::success(format!(
                "Configuration restored from {} (previous state saved as {})",
                name, safety
            ));
            Ok(())
        }
        Some("path") | None => {
            output::info(context.manager.config_path().display());
            Ok(())
        }
        Some(other) => Err(CliError::InvalidArguments(format!(
            "unknown config action `{}`; usage: {}",
            other, USAGE
        ))),
    }
}
