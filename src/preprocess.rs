//! Reassembly of physical lines into one logical line per field

use crate::error::{DecodeError, Result};
use tracing::warn;

const BLOCK_BEGIN: &str = "-BEGIN ";
const BLOCK_END: &str = "-END";
const COMMENT: &str = "//";
const DASH: char = '-';

/// Turns raw message text into logical `-TOKEN value` lines
pub struct Preprocessor;

impl Preprocessor {
    /// Join continuation lines and rename block openers
    ///
    /// - `-END...` lines are dropped
    /// - `-BEGIN NAME` opens a field named `-NAME`
    /// - `-...` opens a new field
    /// - anything else is appended to the open field after a single space
    ///
    /// Comment lines (`//`) and blank lines are dropped as well.
    pub fn preprocess(raw: &str) -> Result<Vec<String>> {
        if raw.is_empty() {
            return Err(DecodeError::empty_input("input is empty"));
        }

        let mut lines = Vec::new();
        let mut current = String::new();

        for physical in raw.lines() {
            if physical.starts_with(BLOCK_END) {
                continue;
            }

            if let Some(name) = physical.strip_prefix(BLOCK_BEGIN) {
                flush(&mut lines, &mut current);
                current.push(DASH);
                current.push_str(name.trim_matches(' '));
            } else if physical.starts_with(DASH) {
                flush(&mut lines, &mut current);
                current.push_str(physical.trim_matches(' '));
            } else if physical.starts_with(COMMENT) {
                continue;
            } else {
                let content = physical.trim();
                if content.is_empty() {
                    continue;
                }
                if current.is_empty() {
                    warn!(line = physical, "continuation line outside any field");
                    continue;
                }
                current.push(' ');
                current.push_str(content);
            }
        }

        flush(&mut lines, &mut current);

        Ok(lines)
    }
}

fn flush(lines: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        lines.push(std::mem::take(current));
    }
}
