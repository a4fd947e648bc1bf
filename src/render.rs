//! English rendering of decoded schedules
//!
//! Sentences have the shape `At <time>[, <date>].` where the time part comes
//! from the minute and hour fields and the date part lists month,
//! day-of-month and day-of-week, in that order, skipping `*` fields.

use crate::field::{ordinal, FieldKind};
use crate::types::{FieldDescription, FieldSet, ParsedValue, Schedule};
use std::fmt;

impl Schedule {
    /// Human-readable sentence describing when this schedule fires
    pub fn describe(&self) -> String {
        match self {
            Schedule::Special { special } => special.phrase().to_string(),
            Schedule::Fields(fields) => fields.describe(),
        }
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl FieldSet {
    pub fn describe(&self) -> String {
        let time = self.time_phrase();
        let date = self.date_phrase();
        if date.is_empty() {
            format!("At {}.", time)
        } else {
            format!("At {}, {}.", time, date)
        }
    }

    fn time_phrase(&self) -> String {
        let minute = &self.minute;
        let hour = &self.hour;

        match (minute.is_any(), hour.is_any()) {
            (true, true) => "every minute".to_string(),
            (true, false) => format!("every minute past {}", hour.phrase(FieldKind::Hour)),
            (false, true) => minute.phrase(FieldKind::Minute),
            (false, false) => match (minute.single_position(), hour.single_position()) {
                (Some(m), Some(h)) => format!("{:02}:{:02}", h, m),
                _ => format!(
                    "{} past {}",
                    minute.phrase(FieldKind::Minute),
                    hour.phrase(FieldKind::Hour)
                ),
            },
        }
    }

    fn date_phrase(&self) -> String {
        let parts = [
            (FieldKind::Month, "in "),
            (FieldKind::DayOfMonth, "on the "),
            (FieldKind::DayOfWeek, "on "),
        ];

        parts
            .iter()
            .filter_map(|&(kind, lead)| {
                let description = self.get(kind);
                (!description.is_any()).then(|| format!("{}{}", lead, description.phrase(kind)))
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FieldDescription {
    /// Phrase for this field, e.g. "every 2nd minute from 8 through 59"
    pub fn phrase(&self, kind: FieldKind) -> String {
        match self {
            FieldDescription::Any => format!("every {}", kind),
            FieldDescription::Specific { values } => prefixed_list(kind, values),
            FieldDescription::AnyWithSpecific { values } => {
                if values.first().is_some_and(ParsedValue::is_any) {
                    join_list(values, " and ")
                } else {
                    prefixed_list(kind, values)
                }
            }
            FieldDescription::Every { step } => format!("every {} {}", ordinal(*step), kind),
            FieldDescription::FromStep { start, step } => format!(
                "every {} {} from {} through {}",
                ordinal(*step),
                kind,
                start.display,
                kind.spec().max_display
            ),
            FieldDescription::Range { start, end } => format!(
                "every {} from {} through {}",
                kind, start.display, end.display
            ),
            FieldDescription::RangeStep { start, end, step } => format!(
                "every {} {} from {} through {}",
                ordinal(*step),
                kind,
                start.display,
                end.display
            ),
        }
    }
}

/// Oxford-comma list with the field prefix ("minute 1, 2, and 5")
fn prefixed_list(kind: FieldKind, values: &[ParsedValue]) -> String {
    let list = join_list(values, ", and ");
    match kind.spec().list_prefix {
        Some(prefix) => format!("{} {}", prefix, list),
        None => list,
    }
}

/// Join displays with ", ", using `last_separator` before the final entry
fn join_list(values: &[ParsedValue], last_separator: &str) -> String {
    match values {
        [] => String::new(),
        [only] => only.display.clone(),
        [head @ .., last] => {
            let head: Vec<&str> = head.iter().map(|v| v.display.as_str()).collect();
            format!("{}{}{}", head.join(", "), last_separator, last.display)
        }
    }
}
