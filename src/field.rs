//! Static field tables
//!
//! Every per-field difference in the cron grammar (allowed range, named
//! values, how a value is displayed) lives in a single [`FieldSpec`] record
//! per [`FieldKind`]. The validator, decoder and renderer only ever consult
//! these records, so none of them branch on the field kind directly.
//!
//! ```text
//! ┌───────────── minute (0-59)
//! │ ┌───────────── hour (0-23)
//! │ │ ┌───────────── day of month (1-31)
//! │ │ │ ┌───────────── month (1-12 or JAN-DEC)
//! │ │ │ │ ┌───────────── day of week (0-7 or SUN-SAT, 0 and 7 are Sunday)
//! │ │ │ │ │
//! * * * * *
//! ```

use crate::error::{CronError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MONTH_NAMES: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

const MONTH_FULL_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAY_NAMES: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

const WEEKDAY_FULL_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// How a resolved numeric position is shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueStyle {
    /// Plain digits (`5`)
    Plain,
    /// English ordinal (`5th`)
    Ordinal,
    /// Full proper name looked up in [`FieldSpec::full_names`]
    Named,
}

/// Static description of one cron field
#[derive(Debug)]
pub struct FieldSpec {
    /// Name used in phrases such as "every day-of-month"
    pub name: &'static str,
    /// Inclusive lower bound
    pub min: u32,
    /// Inclusive upper bound
    pub max: u32,
    /// Case-insensitive abbreviations accepted in place of numbers
    pub names: &'static [&'static str],
    /// Display names indexed by `position - min`
    pub full_names: &'static [&'static str],
    /// Display style for resolved values
    pub style: ValueStyle,
    /// Word placed before a list of specific values
    pub list_prefix: Option<&'static str>,
    /// Rendering of the field maximum in "from X through <max>"
    pub max_display: &'static str,
}

static FIELD_SPECS: [FieldSpec; 5] = [
    FieldSpec {
        name: "minute",
        min: 0,
        max: 59,
        names: &[],
        full_names: &[],
        style: ValueStyle::Plain,
        list_prefix: Some("minute"),
        max_display: "59",
    },
    FieldSpec {
        name: "hour",
        min: 0,
        max: 23,
        names: &[],
        full_names: &[],
        style: ValueStyle::Plain,
        list_prefix: Some("hour"),
        max_display: "23",
    },
    FieldSpec {
        name: "day-of-month",
        min: 1,
        max: 31,
        names: &[],
        full_names: &[],
        style: ValueStyle::Ordinal,
        list_prefix: None,
        max_display: "31st",
    },
    FieldSpec {
        name: "month",
        min: 1,
        max: 12,
        names: &MONTH_NAMES,
        full_names: &MONTH_FULL_NAMES,
        style: ValueStyle::Named,
        list_prefix: None,
        max_display: "December",
    },
    FieldSpec {
        name: "day-of-week",
        min: 0,
        max: 7,
        names: &WEEKDAY_NAMES,
        full_names: &WEEKDAY_FULL_NAMES,
        style: ValueStyle::Named,
        list_prefix: None,
        max_display: "Saturday",
    },
];

/// Position of a field within a 5-field cron expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl FieldKind {
    /// All fields in positional order
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Minute,
        FieldKind::Hour,
        FieldKind::DayOfMonth,
        FieldKind::Month,
        FieldKind::DayOfWeek,
    ];

    /// Look up the field at a positional index
    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(CronError::InvalidFieldIndex(index))
    }

    /// Positional index of this field
    pub fn index(self) -> usize {
        self as usize
    }

    /// Static table entry for this field
    pub fn spec(self) -> &'static FieldSpec {
        &FIELD_SPECS[self.index()]
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    pub fn min(self) -> u32 {
        self.spec().min
    }

    pub fn max(self) -> u32 {
        self.spec().max
    }

    /// Resolve an abbreviated name to its numeric position.
    ///
    /// The table index is offset by the field minimum, so `JAN` resolves
    /// to 1 and `SUN` to 0, lining up with numeric literals.
    pub fn resolve_named(self, token: &str) -> Option<u32> {
        let spec = self.spec();
        spec.names
            .iter()
            .position(|name| name.eq_ignore_ascii_case(token))
            .map(|idx| idx as u32 + spec.min)
    }

    /// Resolve an integer literal within range, or an abbreviated name
    pub fn resolve(self, token: &str) -> Option<u32> {
        match parse_integer(token) {
            Some(n) if (self.min()..=self.max()).contains(&n) => Some(n),
            Some(_) => None,
            None => self.resolve_named(token),
        }
    }

    /// Render a resolved numeric position for display
    pub fn display_value(self, position: u32) -> String {
        let spec = self.spec();
        match spec.style {
            ValueStyle::Plain => position.to_string(),
            ValueStyle::Ordinal => ordinal(position),
            ValueStyle::Named => position
                .checked_sub(spec.min)
                .and_then(|idx| spec.full_names.get(idx as usize))
                .map(|name| name.to_string())
                .unwrap_or_else(|| position.to_string()),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse an unsigned decimal integer made only of ASCII digits
pub fn parse_integer(token: &str) -> Option<u32> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// Split on a separator that must occur exactly once with both sides non-empty
pub(crate) fn split_once_exact(token: &str, separator: char) -> Option<(&str, &str)> {
    let (left, right) = token.split_once(separator)?;
    if left.is_empty() || right.is_empty() || right.contains(separator) {
        return None;
    }
    Some((left, right))
}

/// English ordinal for a number: 1st, 2nd, 3rd, 4th, 11th, 12th, 13th, 21st
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

/// Whole-expression shortcuts that replace the five fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecialExpression {
    Reboot,
    Yearly,
    Monthly,
    Weekly,
    Daily,
    Hourly,
}

impl SpecialExpression {
    pub const ALL: [SpecialExpression; 6] = [
        SpecialExpression::Reboot,
        SpecialExpression::Yearly,
        SpecialExpression::Monthly,
        SpecialExpression::Weekly,
        SpecialExpression::Daily,
        SpecialExpression::Hourly,
    ];

    /// Token as written in a crontab
    pub fn as_str(self) -> &'static str {
        match self {
            SpecialExpression::Reboot => "@reboot",
            SpecialExpression::Yearly => "@yearly",
            SpecialExpression::Monthly => "@monthly",
            SpecialExpression::Weekly => "@weekly",
            SpecialExpression::Daily => "@daily",
            SpecialExpression::Hourly => "@hourly",
        }
    }

    /// Fixed English description
    pub fn phrase(self) -> &'static str {
        match self {
            SpecialExpression::Reboot => "After rebooting.",
            SpecialExpression::Yearly => "At 00:00 on day-of-month 1 in January.",
            SpecialExpression::Monthly => "At 00:00 on day-of-month 1.",
            SpecialExpression::Weekly => "At 00:00 on Sunday.",
            SpecialExpression::Daily => "At 00:00.",
            SpecialExpression::Hourly => "At minute 0.",
        }
    }

    /// Exact, case-sensitive lookup; `None` for anything else
    pub fn lookup(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == token)
    }
}

impl FromStr for SpecialExpression {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self> {
        Self::lookup(s).ok_or_else(|| CronError::UnknownSpecial(s.to_string()))
    }
}

impl fmt::Display for SpecialExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
