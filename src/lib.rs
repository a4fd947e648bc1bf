//! # a3s-cron-describe
//!
//! Cron expression validation and plain-English schedule descriptions.
//!
//! ## Overview
//!
//! Two pure functions make up the core API:
//!
//! - [`validate_cron`] checks a raw expression against the cron field
//!   grammar and returns `bool`
//! - [`decode_cron`] turns a valid expression into a sentence such as
//!   `"At 04:05, on Sunday."`
//!
//! Both accept the standard five fields (minute, hour, day-of-month, month,
//! day-of-week) with `*`, lists, ranges, steps and the `JAN`-`DEC` /
//! `SUN`-`SAT` names, plus the `@reboot`, `@yearly`, `@monthly`, `@weekly`,
//! `@daily` and `@hourly` shortcuts.
//!
//! ## Quick Start
//!
//! ```rust
//! use a3s_cron_describe::{decode_cron, validate_cron};
//!
//! # fn example() -> a3s_cron_describe::Result<()> {
//! let expr = "0 0,12 1 */2 *";
//! assert!(validate_cron(expr));
//! assert_eq!(
//!     decode_cron(expr)?,
//!     "At minute 0 past hour 0, and 12, in every 2nd month, on the 1st."
//! );
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Architecture
//!
//! - **field** — static per-field table (ranges, names, display rules)
//! - **validator** — grammar check, never errors
//! - **decoder** — tokens to typed [`Schedule`] / [`FieldDescription`]
//! - **render** — typed description to English

pub mod decoder;
pub mod error;
pub mod field;
mod render;
pub mod types;
pub mod validator;

// Re-export core types
pub use decoder::{decode_cron, decode_field, parse_schedule};
pub use error::{CronError, Result};
pub use field::{ordinal, FieldKind, FieldSpec, SpecialExpression, ValueStyle};
pub use types::{FieldDescription, FieldSet, ParsedValue, Schedule};
pub use validator::{validate_cron, validate_field};
