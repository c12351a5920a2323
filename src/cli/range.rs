use std::fmt::Display;

use anyhow::Result;
use chrono::{DateTime, Local};
use chrono_english::parse_date_string;
use clap::{CommandFactory, ValueEnum};
use now::DateTimeNow;

use crate::utils::time::next_day_start;

use super::{output::rows::EntryRange, Args};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DateStyle {
    Uk,
    Us,
}

impl From<DateStyle> for chrono_english::Dialect {
    fn from(value: DateStyle) -> Self {
        match value {
            DateStyle::Uk => Self::Uk,
            DateStyle::Us => Self::Us,
        }
    }
}

impl Display for DateStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateStyle::Uk => write!(f, "uk"),
            DateStyle::Us => write!(f, "us"),
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct RangeArgs {
    #[arg(
        long = "start",
        short,
        help = "Only entries from this moment on. Examples are \"yesterday\", \"1 hour ago\", \"15/03/2025\", \"12:00 16/03/2025\""
    )]
    start_date: Option<String>,
    #[arg(
        long = "end",
        short,
        help = "Only entries before this moment. Examples are \"yesterday\", \"1 hour ago\", \"15/03/2025\", \"12:00 16/03/2025\""
    )]
    end_date: Option<String>,
    #[arg(long, default_value_t = DateStyle::Uk, help = "Style of dates used during parsing. For Uk it's day/month/year. For Us it's month/day/year")]
    date_style: DateStyle,
    #[arg(
        long = "days",
        default_value_t = false,
        help = "Take inputs as whole days. For example if start and end are both 15/03/2025 this option includes the whole day"
    )]
    treat_as_days: bool,
}

impl RangeArgs {
    /// Resolves the arguments against the current local time.
    pub fn resolve(&self) -> Result<EntryRange> {
        self.resolve_at(Local::now())
    }

    fn resolve_at(&self, now: DateTime<Local>) -> Result<EntryRange> {
        let dialect: chrono_english::Dialect = self.date_style.into();
        let mut start = parse_moment(self.start_date.as_deref(), now, dialect, "start")?;
        let mut end = parse_moment(self.end_date.as_deref(), now, dialect, "end")?;

        if self.treat_as_days {
            start = start.map(|v| v.beginning_of_day());
            end = end.map(next_day_start);
        }

        Ok(EntryRange {
            start: start.map(Into::into),
            end: end.map(Into::into),
        })
    }
}

fn parse_moment(
    value: Option<&str>,
    now: DateTime<Local>,
    dialect: chrono_english::Dialect,
    name: &str,
) -> Result<Option<DateTime<Local>>> {
    match value.map(|s| parse_date_string(s, now, dialect)) {
        Some(Ok(v)) => Ok(Some(v)),
        Some(Err(e)) => Err(Args::command()
            .error(
                clap::error::ErrorKind::ValueValidation,
                format!("Failed to validate {name} date {e}"),
            )
            .into()),
        None => Ok(None),
    }
}
