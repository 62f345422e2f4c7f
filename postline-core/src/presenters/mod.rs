//! Presenters - display-ready projections of entities
//!
//! A presenter maps one entity to one view model. It never validates and
//! never reads the wall clock: everything it shows is derived from the
//! entity plus display settings fixed at construction.

mod message;
mod user;

pub use message::{present_message, MessagePresenter, MessageViewModel};
pub use user::{present_user, UserPresenter, UserViewModel};

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Offset, Utc};

use crate::domain::result::{Error, Result};

/// Default strftime pattern for timestamps shown to people
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Validated time display settings shared by presenters
#[derive(Debug, Clone)]
pub struct TimeDisplay {
    pattern: String,
    offset: FixedOffset,
}

impl TimeDisplay {
    /// Build display settings, rejecting unknown strftime specifiers and
    /// offsets outside +/-24h
    pub fn new(pattern: &str, utc_offset_minutes: i32) -> Result<Self> {
        if pattern.is_empty() {
            return Err(Error::config("time format cannot be empty"));
        }
        if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            return Err(Error::config(format!("invalid time format: {pattern}")));
        }
        let offset = utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| Error::config(format!("invalid UTC offset: {utc_offset_minutes} minutes")))?;

        Ok(Self {
            pattern: pattern.to_string(),
            offset,
        })
    }

    /// Render a timestamp; depends only on `at`
    pub fn format(&self, at: DateTime<Utc>) -> String {
        let local = at.with_timezone(&self.offset);
        let mut out = String::new();
        if write!(out, "{}", local.format(&self.pattern)).is_err() || out.is_empty() {
            // Some specifiers are only rejected while rendering
            out = local.to_rfc3339();
        }
        out
    }
}

impl Default for TimeDisplay {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_TIME_FORMAT.to_string(),
            offset: Utc.fix(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 29, 23, 45, 10).unwrap()
    }

    #[test]
    fn test_default_format() {
        assert_eq!(TimeDisplay::default().format(at()), "2024-02-29 23:45");
    }

    #[test]
    fn test_offset_applies() {
        let display = TimeDisplay::new("%d.%m.%Y %H:%M", 60).unwrap();
        assert_eq!(display.format(at()), "01.03.2024 00:45");
    }

    #[test]
    fn test_invalid_settings() {
        assert!(matches!(TimeDisplay::new("%H:%", 0), Err(Error::Config(_))));
        assert!(matches!(TimeDisplay::new("", 0), Err(Error::Config(_))));
        assert!(matches!(TimeDisplay::new("%H:%M", 24 * 60), Err(Error::Config(_))));
        assert!(TimeDisplay::new("%H:%M", -(23 * 60)).is_ok());
    }
}
