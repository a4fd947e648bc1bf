//! Cron expression decoder
//!
//! Re-parses an expression into a [`Schedule`] and renders it as an English
//! sentence. Decoding enforces the same grammar as the validator and
//! fails with [`CronError::InvalidExpression`] instead of producing a partial
//! sentence.

use crate::error::{CronError, Result};
use crate::field::{parse_integer, split_once_exact, FieldKind, SpecialExpression};
use crate::types::{FieldDescription, FieldSet, ParsedValue, Schedule};
use std::str::FromStr;

/// Describe a cron expression in plain English
///
/// # Examples
///
/// ```
/// use a3s_cron_describe::decode_cron;
///
/// assert_eq!(decode_cron("5 4 * * sun").unwrap(), "At 04:05, on Sunday.");
/// assert_eq!(decode_cron("*/12 * * * *").unwrap(), "At every 12th minute.");
/// assert_eq!(decode_cron("@daily").unwrap(), "At 00:00.");
/// assert!(decode_cron("60 * * * *").is_err());
/// ```
pub fn decode_cron(expression: &str) -> Result<String> {
    Ok(parse_schedule(expression)?.describe())
}

/// Parse a cron expression into its typed representation
pub fn parse_schedule(expression: &str) -> Result<Schedule> {
    let parts: Vec<&str> = expression.split_whitespace().collect();

    if parts.is_empty() {
        return Err(reject("expression is empty".to_string()));
    }

    if parts.len() == 1 {
        if let Some(special) = SpecialExpression::lookup(parts[0]) {
            return Ok(Schedule::Special { special });
        }
    }

    if parts.len() != 5 {
        return Err(reject(format!("expected 5 fields, got {}", parts.len())));
    }

    Ok(Schedule::Fields(FieldSet {
        minute: decode_field(parts[0], FieldKind::Minute)?,
        hour: decode_field(parts[1], FieldKind::Hour)?,
        day_of_month: decode_field(parts[2], FieldKind::DayOfMonth)?,
        month: decode_field(parts[3], FieldKind::Month)?,
        day_of_week: decode_field(parts[4], FieldKind::DayOfWeek)?,
    }))
}

impl FromStr for Schedule {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self> {
        parse_schedule(s)
    }
}

/// Decode one field token into its description
pub fn decode_field(token: &str, kind: FieldKind) -> Result<FieldDescription> {
    if token == "*" {
        return Ok(FieldDescription::Any);
    }

    let subtokens: Vec<&str> = token.split(',').collect();
    let mut descriptions = subtokens
        .iter()
        .map(|part| decode_subtoken(part, kind))
        .collect::<Result<Vec<_>>>()?;

    let description = if descriptions.len() == 1 {
        descriptions.remove(0)
    } else {
        let values: Vec<ParsedValue> = descriptions
            .iter()
            .flat_map(|description| description.values(kind))
            .collect();

        if values.is_empty() {
            // only `*/n` entries, which carry no values of their own
            descriptions.remove(0)
        } else if subtokens.contains(&"*") {
            FieldDescription::AnyWithSpecific { values }
        } else {
            FieldDescription::Specific { values }
        }
    };

    tracing::trace!("Decoded {} field '{}': {:?}", kind, token, description);
    Ok(description)
}

fn decode_subtoken(token: &str, kind: FieldKind) -> Result<FieldDescription> {
    if token.contains('/') {
        decode_step(token, kind)
    } else if token.contains('-') {
        let (start, end) = decode_range(token, kind)?;
        Ok(FieldDescription::Range { start, end })
    } else if token == "*" {
        Ok(FieldDescription::Any)
    } else {
        let value = decode_value(token, kind)?;
        Ok(FieldDescription::Specific {
            values: vec![value],
        })
    }
}

fn decode_step(token: &str, kind: FieldKind) -> Result<FieldDescription> {
    let (base, step) = split_once_exact(token, '/')
        .ok_or_else(|| invalid_field(kind, token, "malformed step"))?;

    let step = parse_integer(step)
        .filter(|&n| n > 0)
        .or_else(|| kind.resolve_named(step))
        .ok_or_else(|| invalid_field(kind, token, "step must be a positive integer"))?;

    if base == "*" {
        Ok(FieldDescription::Every { step })
    } else if base.contains('-') {
        let (start, end) = decode_range(base, kind)?;
        Ok(FieldDescription::RangeStep { start, end, step })
    } else {
        let start = decode_value(base, kind)?;
        Ok(FieldDescription::FromStep { start, step })
    }
}

fn decode_range(token: &str, kind: FieldKind) -> Result<(ParsedValue, ParsedValue)> {
    let (start, end) = split_once_exact(token, '-')
        .ok_or_else(|| invalid_field(kind, token, "malformed range"))?;

    let start = decode_value(start, kind)?;
    let end = decode_value(end, kind)?;
    if end.position < start.position {
        return Err(invalid_field(kind, token, "range is descending"));
    }
    Ok((start, end))
}

fn decode_value(token: &str, kind: FieldKind) -> Result<ParsedValue> {
    kind.resolve(token)
        .map(|position| ParsedValue::new(kind, position))
        .ok_or_else(|| {
            invalid_field(
                kind,
                token,
                &format!("expected a value in {}-{}", kind.min(), kind.max()),
            )
        })
}

fn invalid_field(kind: FieldKind, token: &str, reason: &str) -> CronError {
    reject(format!("{} field '{}': {}", kind, token, reason))
}

fn reject(message: String) -> CronError {
    tracing::debug!("Rejecting cron expression: {}", message);
    CronError::InvalidExpression(message)
}
