use cardcycle_config::CONFIG_BACKUP_SCHEMA_VERSION;

use crate::cli::args::ParsedArgs;
use crate::cli::commands::CommandResult;
use crate::cli::help;
use crate::cli::output::{self, section};
use crate::cli::registry::CommandEntry;
use crate::cli::CliContext;
use crate::errors::CliError;
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
        CommandEntry::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
    ]
}

fn cmd_version(_context: &mut CliContext, _args: &ParsedArgs) -> CommandResult {
    let meta = build_info::current();
    section(format!("cardcycle {}", meta.version));
    output::info(format!("  Config schema: v{}", CONFIG_BACKUP_SCHEMA_VERSION));
    output::info(format!(
        "  Build hash   : {} ({})",
        meta.git_hash, meta.git_status
    ));
    output::info(format!("  Built at     : {}", meta.timestamp));
    output::info(format!("  Target       : {}", meta.target));
    output::info(format!("  Profile      : {}", meta.profile));
    Ok(())
}

fn cmd_help(context: &mut CliContext, args: &ParsedArgs) -> CommandResult {
    let Some(name) = args.positional(0).map(str::to_lowercase) else {
        help::print_overview(&context.registry);
        return Ok(());
    };
    match context.registry.get(&name) {
        Some(entry) => {
            help::print_command(entry);
            Ok(())
        }
        None => {
            if let Some(best) = context.registry.suggest(&name) {
                output::info(format!("Suggestion: `{}`?", best));
            }
            Err(CliError::UnknownCommand(name))
        }
    }
}
