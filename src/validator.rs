//! Cron expression validator
//!
//! Accepts a special shortcut (`@daily`, ...) on its own, or exactly five
//! whitespace-separated fields. Each field is a comma-separated list whose
//! entries are one of:
//!
//! - `*` - any value
//! - `a` - a single value (number or, for month/day-of-week, a name)
//! - `a-b` - an ascending range
//! - `*/n`, `a/n`, `a-b/n` - steps
//!
//! Validation never fails with an error; malformed input is simply `false`.

use crate::field::{parse_integer, split_once_exact, FieldKind, SpecialExpression};

/// Check whether a raw cron expression is valid
///
/// # Examples
///
/// ```
/// use a3s_cron_describe::validate_cron;
///
/// assert!(validate_cron("*/15 9-17 * * mon-fri"));
/// assert!(validate_cron("@weekly"));
/// assert!(!validate_cron("60 * * * *"));
/// assert!(!validate_cron("0-6 * * * fri-4"));
/// ```
pub fn validate_cron(expression: &str) -> bool {
    let parts: Vec<&str> = expression.split_whitespace().collect();

    if parts.is_empty() {
        tracing::debug!("Rejecting empty cron expression");
        return false;
    }

    if parts.len() == 1 && SpecialExpression::lookup(parts[0]).is_some() {
        return true;
    }

    if parts.len() != 5 {
        tracing::debug!(
            "Rejecting cron expression '{}': expected 5 fields, got {}",
            expression,
            parts.len()
        );
        return false;
    }

    FieldKind::ALL
        .iter()
        .zip(parts)
        .all(|(&kind, token)| validate_field(token, kind))
}

/// Check a single field token against the rules of its field kind
pub fn validate_field(token: &str, kind: FieldKind) -> bool {
    if token == "*" {
        return true;
    }

    let valid = token.split(',').all(|part| {
        if part.contains('/') {
            validate_step(part, kind)
        } else if part.contains('-') {
            validate_range(part, kind)
        } else {
            validate_single(part, kind)
        }
    });

    if !valid {
        tracing::debug!("Rejecting {} field '{}'", kind, token);
    }
    valid
}

/// `*/n`, `a/n` or `a-b/n`
fn validate_step(token: &str, kind: FieldKind) -> bool {
    let Some((base, step)) = split_once_exact(token, '/') else {
        return false;
    };

    let step_valid = matches!(parse_integer(step), Some(n) if n > 0)
        || kind.resolve_named(step).is_some();
    if !step_valid {
        return false;
    }

    if base == "*" {
        true
    } else if base.contains('-') {
        validate_range(base, kind)
    } else {
        kind.resolve(base).is_some()
    }
}

/// `a-b` with both ends in range and `a <= b`
fn validate_range(token: &str, kind: FieldKind) -> bool {
    let Some((start, end)) = split_once_exact(token, '-') else {
        return false;
    };

    match (kind.resolve(start), kind.resolve(end)) {
        (Some(start), Some(end)) => end >= start,
        _ => false,
    }
}

fn validate_single(token: &str, kind: FieldKind) -> bool {
    token == "*" || kind.resolve(token).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty() {
        assert!(!validate_cron(""));
        assert!(!validate_cron("   "));
        assert!(!validate_cron("\t\n"));
    }

    #[test]
    fn test_field_count() {
        assert!(!validate_cron("*"));
        assert!(!validate_cron("* * * *"));
        assert!(!validate_cron("* * * * * something"));
        assert!(validate_cron("* * * * *"));
        assert!(validate_cron("  *   *\t* * *  "));
    }

    #[test]
    fn test_specials() {
        for special in SpecialExpression::ALL {
            assert!(validate_cron(special.as_str()));
        }
        assert!(!validate_cron("@never"));
        assert!(!validate_cron("@DAILY"));
        assert!(!validate_cron("@daily * * * *"));
    }

    #[test]
    fn test_out_of_range() {
        assert!(!validate_cron("60 * * * *"));
        assert!(!validate_cron("* 25 * * *"));
        assert!(!validate_cron("* * 0 * *"));
        assert!(!validate_cron("* * 32 * *"));
        assert!(!validate_cron("* * * 13 *"));
        assert!(!validate_cron("* * * * 8"));
        assert!(validate_cron("59 23 31 12 7"));
        assert!(validate_cron("0 0 1 1 0"));
    }

    #[test]
    fn test_common_expressions() {
        assert!(validate_cron("0 9 * * 1"));
        assert!(validate_cron("*/15 * * * *"));
        assert!(validate_cron("0 9-17 * * 1-5"));
        assert!(validate_cron("0,30 * * * *"));
        assert!(validate_cron("5,10-15,*/20 * * * *"));
        assert!(validate_cron("*/4,1/10 * * * *"));
    }

    #[test]
    fn test_lists() {
        assert!(validate_field("1,3,7,8", FieldKind::Minute));
        assert!(validate_field("2,*", FieldKind::Minute));
        assert!(validate_field("*,9", FieldKind::Hour));
        assert!(!validate_field("1,2,", FieldKind::Minute));
        assert!(!validate_field(",1", FieldKind::Minute));
        assert!(!validate_field("1,,2", FieldKind::Minute));
    }

    #[test]
    fn test_ranges() {
        assert!(validate_field("1-25", FieldKind::Minute));
        assert!(validate_field("5-5", FieldKind::Minute));
        assert!(!validate_field("30-10", FieldKind::Minute));
        assert!(!validate_field("5-*", FieldKind::Minute));
        assert!(!validate_field("-5", FieldKind::Minute));
        assert!(!validate_field("5-", FieldKind::Minute));
        assert!(!validate_field("1-2-3", FieldKind::Minute));
        assert!(!validate_field("0-60", FieldKind::Minute));
    }

    #[test]
    fn test_named_ranges() {
        assert!(validate_field("jan-DEC", FieldKind::Month));
        assert!(validate_field("mon-fri", FieldKind::DayOfWeek));
        assert!(validate_field("1-fri", FieldKind::DayOfWeek));
        assert!(validate_field("sun-7", FieldKind::DayOfWeek));
        assert!(validate_field("feb-3", FieldKind::Month));
        assert!(!validate_field("fri-4", FieldKind::DayOfWeek));
        assert!(!validate_field("dec-jan", FieldKind::Month));
        assert!(!validate_field("mon-fri", FieldKind::Hour));
        assert!(!validate_cron("0-6 * * * fri-4"));
    }

    #[test]
    fn test_steps() {
        assert!(validate_field("*/5", FieldKind::Minute));
        assert!(validate_field("2/3", FieldKind::Minute));
        assert!(validate_field("4-6/3", FieldKind::Minute));
        assert!(validate_field("jan-apr/2", FieldKind::Month));
        assert!(validate_field("mar/2", FieldKind::Month));
        assert!(!validate_field("1/*", FieldKind::Minute));
        assert!(!validate_field("*/0", FieldKind::Minute));
        assert!(!validate_field("*/", FieldKind::Minute));
        assert!(!validate_field("/5", FieldKind::Minute));
        assert!(!validate_field("*/5/2", FieldKind::Minute));
        assert!(!validate_field("60/5", FieldKind::Minute));
        assert!(!validate_field("3-2/1", FieldKind::Minute));
    }

    #[test]
    fn test_named_step_divisor() {
        assert!(validate_field("jan-jun/feb", FieldKind::Month));
        assert!(validate_field("*/mon", FieldKind::DayOfWeek));
        assert!(!validate_field("*/jan", FieldKind::Minute));
    }

    #[test]
    fn test_mixed_invalid() {
        assert!(!validate_cron("7,9-12,3-2/* * * jan-apr/14,3 2"));
        assert!(!validate_cron("7,9-12,3-2/1 * * jan-apr/14,3 2"));
        assert!(!validate_cron("a * * * *"));
        assert!(!validate_cron("1.5 * * * *"));
    }
}
