//! Splitting of logical lines into token name and value

/// Splits `-TOKEN value` lines
pub struct LineParser;

impl LineParser {
    /// Split a logical line into its token name and raw value
    ///
    /// The token runs from just after the leading dash up to the first space;
    /// the value is everything after that space, untouched. Without a space
    /// the whole remainder is the token and the value is empty.
    pub fn split(line: &str) -> (&str, &str) {
        let body = line.strip_prefix('-').unwrap_or(line);

        match body.split_once(' ') {
            Some((token, value)) => (token, value),
            None => (body, ""),
        }
    }
}
