use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use crate::errors::CliError;

/// Options that never take a value.
const FLAG_NAMES: &[&str] = &["json", "default", "no-color"];

/// Command arguments split into positionals, `--name value` options and flags.
#[derive(Debug, Default, Clone)]
pub struct ParsedArgs {
    positionals: Vec<String>,
    options: HashMap<String, String>,
    flags: HashSet<String>,
}

impl ParsedArgs {
    pub fn parse<I, S>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed = ParsedArgs::default();
        let mut iter = args.into_iter().map(Into::into);
        while let Some(arg) = iter.next() {
            if !arg.starts_with("--") {
                parsed.positionals.push(arg);
                continue;
            }
            let name = &arg[2..];
            if let Some((key, value)) = name.split_once('=') {
                parsed.options.insert(key.to_string(), value.to_string());
            } else if FLAG_NAMES.contains(&name) {
                parsed.flags.insert(name.to_string());
            } else {
                let value = iter.next().ok_or_else(|| {
                    CliError::InvalidArguments(format!("option `--{}` expects a value", name))
                })?;
                parsed.options.insert(name.to_string(), value);
            }
        }
        Ok(parsed)
    }

    pub fn positional(&self, index: usize) -> Option<&str> {
        self.positionals.get(index).map(String::as_str)
    }

    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(String::as_str)
    }

    pub fn flag(&self, name: &str) -> bool {
        self.flags.contains(name)
    }

    /// Parses a numeric day option. Range checks are left to card validation.
    pub fn day(&self, name: &str) -> Result<Option<u32>, CliError> {
        self.value(name)
            .map(|raw| {
                raw.trim().parse::<u32>().map_err(|_| {
                    CliError::InvalidArguments(format!(
                        "option `--{}` expects a day number, got `{}`",
                        name, raw
                    ))
                })
            })
            .transpose()
    }

    pub fn date(&self, name: &str) -> Result<Option<NaiveDate>, CliError> {
        self.value(name).map(parse_date).transpose()
    }
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| CliError::InvalidDate(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_positionals_options_and_flags() {
        let parsed = ParsedArgs::parse([
            "add", "Gold", "--closing", "15", "--due=25", "--json", "--default",
        ])
        .expect("parse");
        assert_eq!(parsed.positionals(), ["add", "Gold"]);
        assert_eq!(parsed.day("closing").unwrap(), Some(15));
        assert_eq!(parsed.day("due").unwrap(), Some(25));
        assert_eq!(parsed.day("preferred").unwrap(), None);
        assert!(parsed.flag("json"));
        assert!(parsed.flag("default"));
    }

    #[test]
    fn option_without_value_is_rejected() {
        let err = ParsedArgs::parse(["--closing"]).expect_err("missing value");
        assert!(err.to_string().contains("--closing"));
    }

    #[test]
    fn non_numeric_day_is_rejected() {
        let parsed = ParsedArgs::parse(["--closing", "fifteen"]).expect("parse");
        assert!(parsed.day("closing").is_err());
    }

    #[test]
    fn dates_use_calendar_components() {
        let parsed = ParsedArgs::parse(["--date", "2025-02-10"]).expect("parse");
        assert_eq!(
            parsed.date("date").unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 10)
        );
        assert!(parse_date("2025-02-30").is_err());
        assert!(parse_date("10/02/2025").is_err());
    }
}
