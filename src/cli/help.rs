use crate::cli::output::{self, section};
use crate::cli::registry::{CommandEntry, CommandRegistry};

pub fn print_overview(registry: &CommandRegistry) {
    section("Available commands");
    for entry in registry.list() {
        output::info(format!("  {:<14} {}", entry.name, entry.description));
    }
    output::info("Card options: --card <name> | --closing <day> [--due <day>] [--preferred <day>]");
    output::info("Date option : --date YYYY-MM-DD (defaults to today). Add --json for JSON output.");
    output::info("Use `help <command>` for details.");
}

pub fn print_command(entry: &CommandEntry) {
    section(format!("Help: {}", entry.name));
    output::info(format!("  Description: {}", entry.description));
    output::info(format!("  Usage: {}", entry.usage));
}
