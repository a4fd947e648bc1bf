//! Typed representation of a decoded cron expression

use crate::field::{FieldKind, SpecialExpression};
use serde::{Deserialize, Serialize};

/// One literal or named token after resolution
///
/// `position` is `None` only for the synthetic value a literal `*` contributes
/// to a comma list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedValue {
    /// Numeric position within the field range
    pub position: Option<u32>,
    /// User-facing rendering (digits, ordinal or proper name)
    pub display: String,
}

impl ParsedValue {
    /// Resolve a numeric position and render it for the given field
    pub fn new(kind: FieldKind, position: u32) -> Self {
        Self {
            position: Some(position),
            display: kind.display_value(position),
        }
    }

    /// Synthetic value standing for `*` inside a list
    pub fn any(kind: FieldKind) -> Self {
        Self {
            position: None,
            display: format!("every {}", kind),
        }
    }

    pub fn is_any(&self) -> bool {
        self.position.is_none()
    }
}

/// Decoded shape of a single cron field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldDescription {
    /// `*`
    Any,
    /// Literal values, or a list of subtokens without `*`
    Specific { values: Vec<ParsedValue> },
    /// A list in which `*` appears next to other subtokens
    AnyWithSpecific { values: Vec<ParsedValue> },
    /// `*/n`
    Every { step: u32 },
    /// `a/n`
    FromStep { start: ParsedValue, step: u32 },
    /// `a-b`
    Range { start: ParsedValue, end: ParsedValue },
    /// `a-b/n`
    RangeStep {
        start: ParsedValue,
        end: ParsedValue,
        step: u32,
    },
}

impl FieldDescription {
    /// Values this description contributes when it is part of a comma list
    pub fn values(&self, kind: FieldKind) -> Vec<ParsedValue> {
        match self {
            FieldDescription::Any => vec![ParsedValue::any(kind)],
            FieldDescription::Specific { values }
            | FieldDescription::AnyWithSpecific { values } => values.clone(),
            FieldDescription::Every { .. } => Vec::new(),
            FieldDescription::FromStep { start, .. } => vec![start.clone()],
            FieldDescription::Range { start, end }
            | FieldDescription::RangeStep { start, end, .. } => {
                vec![start.clone(), end.clone()]
            }
        }
    }

    /// Step count for step-based descriptions
    pub fn step(&self) -> Option<u32> {
        match self {
            FieldDescription::Every { step }
            | FieldDescription::FromStep { step, .. }
            | FieldDescription::RangeStep { step, .. } => Some(*step),
            _ => None,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, FieldDescription::Any)
    }

    /// Position of a lone specific value, used for the `HH:MM` clock form
    pub fn single_position(&self) -> Option<u32> {
        match self {
            FieldDescription::Specific { values } if values.len() == 1 => values[0].position,
            _ => None,
        }
    }
}

/// The five decoded fields of a standard expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSet {
    pub minute: FieldDescription,
    pub hour: FieldDescription,
    pub day_of_month: FieldDescription,
    pub month: FieldDescription,
    pub day_of_week: FieldDescription,
}

impl FieldSet {
    /// Field description by kind
    pub fn get(&self, kind: FieldKind) -> &FieldDescription {
        match kind {
            FieldKind::Minute => &self.minute,
            FieldKind::Hour => &self.hour,
            FieldKind::DayOfMonth => &self.day_of_month,
            FieldKind::Month => &self.month,
            FieldKind::DayOfWeek => &self.day_of_week,
        }
    }
}

/// A fully decoded cron expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Schedule {
    /// `@reboot`, `@daily`, ...
    Special { special: SpecialExpression },
    /// Standard five-field form
    Fields(FieldSet),
}
