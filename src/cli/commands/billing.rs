//! Commands that answer billing cycle questions for one card.

use serde::Serialize;

use cardcycle_config::ConfigError;
use cardcycle_domain::{BillingPeriod, CardConfiguration, Precision, Resolved};

use crate::cli::args::ParsedArgs;
use crate::cli::commands::CommandResult;
use crate::cli::output::{self, field, section};
use crate::cli::registry::CommandEntry;
use crate::cli::CliContext;
use crate::errors::CliError;

const CARD_USAGE: &str = "[--card <name> | --closing <day> [--due <day>] [--preferred <day>]]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "period",
            "Show the billing period containing a date",
            "period [card options] [--date YYYY-MM-DD] [--json]",
            cmd_period,
        ),
        CommandEntry::new(
            "launch",
            "Show when a purchase falls due",
            "launch [card options] [--date YYYY-MM-DD] [--json]",
            cmd_launch,
        ),
        CommandEntry::new(
            "preview",
            "Preview the statement a purchase lands on",
            "preview [card options] [--date YYYY-MM-DD] [--json]",
            cmd_preview,
        ),
        CommandEntry::new(
            "summary",
            "Summarize period, next closing and due dates",
            "summary [card options] [--date YYYY-MM-DD] [--json]",
            cmd_summary,
        ),
        CommandEntry::new(
            "next-closing",
            "Show the next closing date",
            "next-closing [card options] [--date YYYY-MM-DD] [--json]",
            cmd_next_closing,
        ),
        CommandEntry::new(
            "next-due",
            "Show the next due date",
            "next-due [card options] [--date YYYY-MM-DD] [--json]",
            cmd_next_due,
        ),
        CommandEntry::new(
            "best-day",
            "Show the best day of the month to buy",
            "best-day [card options] [--json]",
            cmd_best_day,
        ),
        CommandEntry::new(
            "validate",
            "Check a card configuration",
            "validate [card options] [--json]",
            cmd_validate,
        ),
        CommandEntry::new(
            "defaults",
            "Show due and purchase days derived for older cards",
            "defaults [card options] [--json]",
            cmd_defaults,
        ),
    ]
}

/// Selected card as (display name, configuration).
///
/// Explicit `--closing` wins, then `--card`, then the configured default card.
pub(crate) fn selected_card(
    context: &CliContext,
    args: &ParsedArgs,
) -> Result<(String, CardConfiguration), CliError> {
    if let Some(closing_day) = args.day("closing")? {
        let configuration = CardConfiguration {
            closing_day,
            due_day: args.day("due")?,
            preferred_purchase_day: args.day("preferred")?,
        };
        return Ok(("ad-hoc card".to_string(), configuration));
    }

    let profile = match args.value("card") {
        Some(name) => context
            .config
            .card(name)
            .ok_or_else(|| ConfigError::CardNotFound(name.to_string()))?,
        None => context.config.default_card().ok_or_else(|| {
            CliError::InvalidArguments(format!("no card selected; pass {}", CARD_USAGE))
        })?,
    };
    Ok((profile.name.clone(), profile.configuration))
}

fn report_precision(precision: Precision) {
    if !precision.is_exact() {
        output::warning(format!(
            "result computed with {} precision; run `validate` to inspect the card",
            precision
        ));
    }
}

fn emit<T: Serialize>(
    args: &ParsedArgs,
    resolved: &Resolved<T>,
    render: impl FnOnce(&T),
) -> CommandResult {
    report_precision(resolved.precision);
    if args.flag("json") {
        return output::json(resolved);
    }
    render(&resolved.value);
    Ok(())
}

fn render_period(period: &BillingPeriod) {
    field("Start", period.start);
    field("End (closing)", period.end);
    field("Length (days)", period.length_in_days());
    field("Days remaining", period.days_remaining);
}

fn cmd_period(context: &mut CliContext, args: &ParsedArgs) -> CommandResult {
    let (name, card) = selected_card(context, args)?;
    let resolved = context
        .calculator
        .resolve_billing_period(&card, context.today());
    emit(args, &resolved, |period| {
        section(format!("{}: {} statement", name, period.reference_label));
        render_period(period);
    })
}

fn cmd_launch(context: &mut CliContext, args: &ParsedArgs) -> CommandResult {
    let (name, card) = selected_card(context, args)?;
    let purchase = context.today();
    let resolved = context.calculator.resolve_launch_date(purchase, &card);
    emit(args, &resolved, |launch| {
        output::info(format!(
            "{}: purchase on {} falls due on {}",
            name, purchase, launch
        ));
    })
}

fn cmd_preview(context: &mut CliContext, args: &ParsedArgs) -> CommandResult {
    let (name, card) = selected_card(context, args)?;
    let resolved = context
        .calculator
        .resolve_launch_preview(context.today(), &card);
    emit(args, &resolved, |preview| {
        section(format!("{}: purchase on {}", name, preview.purchase_date));
        field("Statement", &preview.launch_label);
        field("Due date", preview.launch_date);
        field("Days until due", preview.days_until_due);
        field(
            "Deferred",
            if preview.is_deferred { "yes" } else { "no" },
        );
        render_period(&preview.period);
    })
}

fn cmd_summary(context: &mut CliContext, args: &ParsedArgs) -> CommandResult {
    let (name, card) = selected_card(context, args)?;
    let resolved = context
        .calculator
        .resolve_comprehensive_summary(&card, context.today());
    emit(args, &resolved, |summary| {
        section(format!("{}: {} statement", name, summary.period.reference_label));
        render_period(&summary.period);
        field("Next closing", summary.next_closing_date);
        field("Days to closing", summary.days_until_closing);
        field("Next due", summary.next_due_date);
        field("Days to due", summary.days_until_due);
        field("Best purchase day", summary.best_purchase_day);
    })
}

fn cmd_next_closing(context: &mut CliContext, args: &ParsedArgs) -> CommandResult {
    let (name, card) = selected_card(context, args)?;
    let resolved = context
        .calculator
        .resolve_next_closing_date(&card, context.today());
    emit(args, &resolved, |date| {
        output::info(format!("{}: next closing on {}", name, date));
    })
}

fn cmd_next_due(context: &mut CliContext, args: &ParsedArgs) -> CommandResult {
    let (name, card) = selected_card(context, args)?;
    let resolved = context
        .calculator
        .resolve_next_due_date(&card, context.today());
    emit(args, &resolved, |date| {
        output::info(format!("{}: next payment due on {}", name, date));
    })
}

fn cmd_best_day(context: &mut CliContext, args: &ParsedArgs) -> CommandResult {
    let (name, card) = selected_card(context, args)?;
    let day = context.calculator.best_purchase_day(&card);
    if args.flag("json") {
        return output::json(&serde_json::json!({ "best_purchase_day": day }));
    }
    output::info(format!("{}: best day to buy is day {}", name, day));
    Ok(())
}

fn cmd_validate(context: &mut CliContext, args: &ParsedArgs) -> CommandResult {
    let (name, card) = selected_card(context, args)?;
    let report = context.calculator.validate_configuration(&card);
    if args.flag("json") {
        output::json(&report)?;
    } else if report.is_valid() {
        output::success(format!("{}: configuration is valid ({})", name, card));
    }
    if report.is_valid() {
        Ok(())
    } else {
        Err(CliError::InvalidConfiguration(report.joined()))
    }
}

fn cmd_defaults(context: &mut CliContext, args: &ParsedArgs) -> CommandResult {
    let (name, card) = selected_card(context, args)?;
    let defaults = context.calculator.resolve_legacy_defaults(&card);
    if args.flag("json") {
        return output::json(&defaults);
    }
    section(format!("{}: resolved defaults", name));
    field("Due day", defaults.due_day);
    field("Purchase day", defaults.preferred_purchase_day);
    Ok(())
}
