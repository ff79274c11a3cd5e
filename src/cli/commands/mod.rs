pub mod billing;
pub mod card;
pub mod config;
pub mod system;

use crate::cli::registry::CommandRegistry;
use crate::errors::CliError;

pub type CommandResult = Result<(), CliError>;

/// Builds the registry with every command, in help order.
pub fn registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    for entry in billing::definitions()
        .into_iter()
        .chain(card::definitions())
        .chain(config::definitions())
        .chain(system::definitions())
    {
        registry.register(entry);
    }
    registry
}
