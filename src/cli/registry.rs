use std::collections::HashMap;

use crate::cli::args::ParsedArgs;
use crate::cli::commands::CommandResult;
use crate::cli::CliContext;

pub type CommandHandler = fn(&mut CliContext, &ParsedArgs) -> CommandResult;

pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

/// Commands keyed by name, listed in registration order.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandEntry>,
    order: Vec<&'static str>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: CommandEntry) {
        let name = entry.name;
        if self.commands.insert(name, entry).is_none() {
            self.order.push(name);
        }
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.commands.get(name)
    }

    pub fn list(&self) -> Vec<&CommandEntry> {
        self.order
            .iter()
            .filter_map(|name| self.commands.get(name))
            .collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }

    pub fn handler(&self, name: &str) -> Option<CommandHandler> {
        self.commands.get(name).map(|entry| entry.handler)
    }

    /// Closest registered name within an edit distance of 3.
    pub fn suggest(&self, input: &str) -> Option<&'static str> {
        self.names()
            .map(|name| (strsim::levenshtein(name, input), name))
            .filter(|(distance, _)| *distance <= 3)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, name)| name)
    }
}
