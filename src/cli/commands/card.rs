//! Saved card management.

use cardcycle_domain::{CardConfiguration, CardProfile, Displayable};

use crate::cli::args::ParsedArgs;
use crate::cli::commands::CommandResult;
use crate::cli::output::{self, section};
use crate::cli::registry::CommandEntry;
use crate::cli::CliContext;
use crate::errors::CliError;

const USAGE: &str = "card add <name> --closing <day> [--due <day>] [--preferred <day>] [--default] \
                     | card list [--json] | card remove <name> | card default <name> | card migrate";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "card",
        "Add, list, remove or pick the default saved card",
        USAGE,
        cmd_card,
    )]
}

fn cmd_card(context: &mut CliContext, args: &ParsedArgs) -> CommandResult {
    match args.positional(0) {
        Some("add") => add_card(context, args),
        Some("list") | None => list_cards(context, args),
        Some("remove") => remove_card(context, args),
        Some("default") => set_default(context, args),
        Some("migrate") => migrate_cards(context),
        Some(other) => Err(CliError::InvalidArguments(format!(
            "unknown card action `{}`; usage: {}",
            other, USAGE
        ))),
    }
}

fn required_name(args: &ParsedArgs) -> Result<&str, CliError> {
    args.positional(1)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| CliError::InvalidArguments(format!("card name required; usage: {}", USAGE)))
}

fn add_card(context: &mut CliContext, args: &ParsedArgs) -> CommandResult {
    let name = required_name(args)?.to_string();
    let closing_day = args
        .day("closing")?
        .ok_or_else(|| CliError::InvalidArguments("`--closing <day>` is required".into()))?;
    let configuration = CardConfiguration {
        closing_day,
        due_day: args.day("due")?,
        preferred_purchase_day: args.day("preferred")?,
    };

    let report = context.calculator.validate_configuration(&configuration);
    if !report.is_valid() {
        return Err(CliError::InvalidConfiguration(report.joined()));
    }

    let replaced = context
        .config
        .upsert_card(CardProfile::new(name.clone(), configuration));
    if args.flag("default") || context.config.default_card().is_none() {
        context.config.set_default_card(&name)?;
    }
    context.save_config()?;

    tracing::info!(card = %name, replaced = replaced.is_some(), "card saved");
    if replaced.is_some() {
        output::success(format!("Card `{}` updated ({})", name, configuration));
    } else {
        output::success(format!("Card `{}` saved ({})", name, configuration));
    }
    Ok(())
}

fn list_cards(context: &mut CliContext, args: &ParsedArgs) -> CommandResult {
    if args.flag("json") {
        return output::json(&context.config.cards);
    }
    if context.config.cards.is_empty() {
        output::info("No saved cards. Add one with `card add <name> --closing <day>`.");
        return Ok(());
    }
    section("Saved cards");
    let default_id = context.config.default_card().map(|card| card.id);
    for card in &context.config.cards {
        let marker = if Some(card.id) == default_id { "*" } else { " " };
        output::info(format!("{} {}", marker, card.display_label()));
    }
    Ok(())
}

fn remove_card(context: &mut CliContext, args: &ParsedArgs) -> CommandResult {
    let name = required_name(args)?;
    let removed = context.config.remove_card(name)?;
    context.save_config()?;
    output::success(format!("Card `{}` removed", removed.name));
    Ok(())
}

fn set_default(context: &mut CliContext, args: &ParsedArgs) -> CommandResult {
    let name = required_name(args)?;
    context.config.set_default_card(name)?;
    context.save_config()?;
    output::success(format!("Default card set to `{}`", name));
    Ok(())
}

fn migrate_cards(context: &mut CliContext) -> CommandResult {
    let migrated = context.config.migrate_legacy_cards();
    if migrated > 0 {
        context.save_config()?;
    }
    output::success(format!("{} card(s) migrated", migrated));
    Ok(())
}
