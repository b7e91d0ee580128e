//! Parser for the text of Travian attack reports, as copied from the game client.
//!
//! The parse is total: malformed lines are skipped and the matching fields stay unset.
//! [`validate`] and [`check`] are the admission gate callers run before [`parse`].

pub mod assembler;
pub mod bounty;
pub mod entity;
pub mod header;
pub mod information;
pub mod normalizer;
pub mod options;
pub mod statistics;
pub mod units;
pub mod validator;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

use raidtracker_types::{errors::ReportError, report::Report};

pub use assembler::ReportAssembler;
pub use options::ParseOptions;
pub use validator::{check, validate};

/// Parses a report with the default grammar options.
pub fn parse(text: &str) -> Report {
    parse_with(text, &ParseOptions::default())
}

pub fn parse_with(text: &str, options: &ParseOptions) -> Report {
    let lines = normalizer::normalize_lines(text);
    ReportAssembler::new(options).run(&lines)
}

/// Runs the admission gate, then parses.
pub fn parse_checked(text: &str) -> Result<Report, ReportError> {
    parse_checked_with(text, &ParseOptions::default())
}

pub fn parse_checked_with(text: &str, options: &ParseOptions) -> Result<Report, ReportError> {
    check(text)?;
    Ok(parse_with(text, options))
}
