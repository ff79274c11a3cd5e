pub mod args;
pub mod commands;
pub mod help;
pub mod output;
pub mod registry;
pub mod system_clock;

use std::env;

use chrono::NaiveDate;

use cardcycle_config::{Config, ConfigManager};
use cardcycle_core::{BillingCalculator, Clock, FixedClock};

use crate::errors::CliError;
use args::ParsedArgs;
use output::OutputPreferences;
use registry::CommandRegistry;
use system_clock::SystemClock;

/// State shared by every command of a single CLI invocation.
pub struct CliContext {
    pub registry: CommandRegistry,
    pub manager: ConfigManager,
    pub config: Config,
    pub calculator: BillingCalculator,
    pub clock: Box<dyn Clock>,
}

impl CliContext {
    pub fn new(manager: ConfigManager, config: Config, clock: Box<dyn Clock>) -> Self {
        Self {
            registry: commands::registry(),
            manager,
            config,
            calculator: BillingCalculator::new(),
            clock,
        }
    }

    /// Reference date for calculations, resolved once at the boundary.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Persists the in-memory configuration.
    pub fn save_config(&self) -> Result<(), CliError> {
        self.manager.save(&self.config)?;
        Ok(())
    }
}

/// Runs the CLI against the process arguments.
pub fn run_cli() -> Result<(), CliError> {
    run_with_args(env::args().skip(1))
}

pub fn run_with_args<I, S>(args: I) -> Result<(), CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args: Vec<String> = args.into_iter().map(Into::into).collect();
    if args.is_empty() {
        help::print_overview(&commands::registry());
        return Ok(());
    }
    let command = args.remove(0).to_lowercase();
    let parsed = ParsedArgs::parse(args)?;

    let clock: Box<dyn Clock> = match parsed.date("date")? {
        Some(date) => Box::new(FixedClock::new(date)),
        None => Box::new(SystemClock),
    };

    let manager = ConfigManager::from_env()?;
    let config = manager.load()?;
    output::set_preferences(OutputPreferences {
        color_enabled: config.ui_color_enabled && !parsed.flag("no-color"),
    });

    let mut context = CliContext::new(manager, config, clock);
    tracing::debug!(command = %command, "dispatching command");
    dispatch(&mut context, &command, &parsed)
}

fn dispatch(context: &mut CliContext, command: &str, args: &ParsedArgs) -> Result<(), CliError> {
    match context.registry.handler(command) {
        Some(handler) => handler(context, args),
        None => {
            if let Some(best) = context.registry.suggest(command) {
                output::info(format!("Suggestion: `{}`?", best));
            }
            Err(CliError::UnknownCommand(command.to_string()))
        }
    }
}
