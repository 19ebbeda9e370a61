//! Core types for ADEXP decoding

use crate::error::{DecodeError, Result};
use std::str::FromStr;

/// An ADEXP token handled by the decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Token {
    /// Message title
    Title,
    /// Aerodrome of departure
    Adep,
    /// Aerodrome of destination
    Ades,
    /// Alternate aerodrome
    Altnz,
    /// Aircraft identification
    Arcid,
    /// Aircraft type
    Arctyp,
    /// Equipment capability
    Ceqpt,
    /// Free text message body
    Msgtxt,
    /// Comment
    Comment,
    /// Estimated elapsed time at a flight information region boundary
    Eetfir,
    /// Speed
    Speed,
    /// Estimated data
    Estdata,
    /// Geographical points
    Geo,
    /// Route points
    Rtepts,
}

impl Token {
    /// Every managed token, in declaration order
    pub const ALL: [Token; 14] = [
        Token::Title,
        Token::Adep,
        Token::Ades,
        Token::Altnz,
        Token::Arcid,
        Token::Arctyp,
        Token::Ceqpt,
        Token::Msgtxt,
        Token::Comment,
        Token::Eetfir,
        Token::Speed,
        Token::Estdata,
        Token::Geo,
        Token::Rtepts,
    ];

    /// Keyword as it appears after the leading dash
    pub fn as_str(&self) -> &'static str {
        match self {
            Token::Title => "TITLE",
            Token::Adep => "ADEP",
            Token::Ades => "ADES",
            Token::Altnz => "ALTNZ",
            Token::Arcid => "ARCID",
            Token::Arctyp => "ARCTYP",
            Token::Ceqpt => "CEQPT",
            Token::Msgtxt => "MSGTXT",
            Token::Comment => "COMMENT",
            Token::Eetfir => "EETFIR",
            Token::Speed => "SPEED",
            Token::Estdata => "ESTDATA",
            Token::Geo => "GEO",
            Token::Rtepts => "RTEPTS",
        }
    }
}

impl FromStr for Token {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Token::ALL
            .iter()
            .copied()
            .find(|token| token.as_str() == s)
            .ok_or(())
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the value of a token is decoded and merged into a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldKind {
    /// Single value, last occurrence wins
    Scalar,
    /// Single value per occurrence, all occurrences kept in order
    RepeatingScalar,
    /// Sequence of records built from repeated subfields
    RecordList(RecordKind),
}

/// Record shape carried by a record-list token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordKind {
    /// Point id, estimated time over, flight level
    EstimatedData,
    /// Geo point id, latitude, longitude
    Geo,
    /// Point id, flight level, estimated time over
    RoutePoint,
}

/// Subfield keys used to build records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Subfield {
    /// Point id
    Ptid,
    /// Estimated time over
    Eto,
    /// Flight level
    Fl,
    /// Geo point id
    Geoid,
    /// Latitude
    Lattd,
    /// Longitude
    Longtd,
}

impl Subfield {
    /// Keyword as it appears after the leading dash
    pub fn as_str(&self) -> &'static str {
        match self {
            Subfield::Ptid => "PTID",
            Subfield::Eto => "ETO",
            Subfield::Fl => "FL",
            Subfield::Geoid => "GEOID",
            Subfield::Lattd => "LATTD",
            Subfield::Longtd => "LONGTD",
        }
    }
}

impl std::fmt::Display for Subfield {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flight level in hundreds of feet
///
/// Encoded on the wire as a single letter followed by decimal digits,
/// e.g. `F390` for 39,000 ft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlightLevel(u32);

impl FlightLevel {
    /// Create a flight level from hundreds of feet
    pub fn new(level: u32) -> Self {
        FlightLevel(level)
    }

    /// Parse an encoded flight level such as `F390`
    ///
    /// `token` only names the enclosing field in the error.
    pub fn parse(encoded: &str, token: Token) -> Result<Self> {
        let mut chars = encoded.chars();
        let prefix = chars.next();
        let digits = chars.as_str();

        let valid = prefix.is_some_and(|c| c.is_ascii_alphabetic())
            && !digits.is_empty()
            && digits.bytes().all(|b| b.is_ascii_digit());
        if !valid {
            return Err(DecodeError::malformed_flight_level(token.as_str(), encoded));
        }

        digits
            .parse::<u32>()
            .map(FlightLevel)
            .map_err(|_| DecodeError::malformed_flight_level(token.as_str(), encoded))
    }

    /// Get the level in hundreds of feet
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Get the altitude in feet
    pub fn feet(&self) -> u64 {
        u64::from(self.0) * 100
    }
}

impl std::fmt::Display for FlightLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "F{:03}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_from_str() {
        assert_eq!("ESTDATA".parse::<Token>(), Ok(Token::Estdata));
        assert_eq!("TITLE".parse::<Token>(), Ok(Token::Title));
        assert!("FOO".parse::<Token>().is_err());
        assert!("title".parse::<Token>().is_err());
    }

    #[test]
    fn test_token_display() {
        for token in Token::ALL {
            assert_eq!(token.to_string().parse::<Token>(), Ok(token));
        }
    }

    #[test]
    fn test_flight_level_parse() -> Result<()> {
        assert_eq!(FlightLevel::parse("F390", Token::Rtepts)?.value(), 390);
        assert_eq!(FlightLevel::parse("F000", Token::Rtepts)?.value(), 0);
        assert_eq!(FlightLevel::parse("A014", Token::Estdata)?.value(), 14);
        assert_eq!(FlightLevel::parse("F350", Token::Rtepts)?.feet(), 35_000);
        Ok(())
    }

    #[test]
    fn test_flight_level_malformed() {
        for encoded in ["", "F", "XYZ", "FXYZ", "390", "F-10", "F 390", "F99999999999"] {
            let err = FlightLevel::parse(encoded, Token::Rtepts).unwrap_err();
            assert_eq!(
                err,
                DecodeError::malformed_flight_level("RTEPTS", encoded),
                "{encoded:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_flight_level_display() {
        assert_eq!(FlightLevel::new(390).to_string(), "F390");
        assert_eq!(FlightLevel::new(14).to_string(), "F014");
    }
}
