//! Parsing of record-list values into repeated subfield records
//!
//! A record-list value is a flat run of `-KEY value` subfields, e.g.
//! `-PTID CYYZ -ETO 170301220429 -FL F000 -PTID JOOPY ...`. A key seen a
//! second time closes the current record and opens the next one.

use crate::line::LineParser;
use std::collections::HashMap;

/// Key/value subfields of one record
pub type Subfields = HashMap<String, String>;

/// Iterator over the `-KEY value` subfields of a record-list value
///
/// A subfield is a dash, any one character, then every following character
/// up to the next dash.
#[derive(Debug, Clone)]
pub struct SubfieldScanner<'a> {
    rest: &'a str,
}

impl<'a> SubfieldScanner<'a> {
    /// Create a scanner over a raw value
    pub fn new(value: &'a str) -> Self {
        SubfieldScanner { rest: value }
    }
}

impl<'a> Iterator for SubfieldScanner<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let start = self.rest.find('-')?;
        let candidate = &self.rest[start..];

        let Some(first) = candidate[1..].chars().next() else {
            self.rest = "";
            return None;
        };

        let body = 1 + first.len_utf8();
        let end = candidate[body..]
            .find('-')
            .map_or(candidate.len(), |offset| body + offset);

        self.rest = &candidate[end..];
        Some(&candidate[..end])
    }
}

/// Groups subfields of a record-list value into records
pub struct ComplexFieldParser;

impl ComplexFieldParser {
    /// Parse a raw record-list value into records, in source order
    ///
    /// An empty value yields no record. Any other value yields at least one,
    /// possibly empty, record.
    pub fn parse(value: &str) -> Vec<Subfields> {
        if value.trim().is_empty() {
            return Vec::new();
        }

        let mut records = Vec::new();
        let mut current = Subfields::new();

        for subfield in SubfieldScanner::new(value) {
            let (key, raw) = LineParser::split(subfield);

            if current.contains_key(key) {
                records.push(std::mem::take(&mut current));
            }

            current.insert(key.to_string(), raw.trim_matches(' ').to_string());
        }

        records.push(current);
        records
    }
}
