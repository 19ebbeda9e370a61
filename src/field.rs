//! Decoding of one logical line into a typed field value

use crate::complex::{ComplexFieldParser, Subfields};
use crate::core::{FieldKind, FlightLevel, RecordKind, Token};
use crate::error::Result;
use crate::line::LineParser;
use crate::message::{EstimatedData, GeoPoint, RoutePoint};
use crate::registry::TokenRegistry;
use tracing::{error, warn};

/// One record of a record-list field, typed by its record kind
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Record {
    /// ESTDATA record
    EstimatedData(EstimatedData),
    /// GEO record
    Geo(GeoPoint),
    /// RTEPTS record
    RoutePoint(RoutePoint),
}

impl Record {
    /// Build a typed record from its raw subfields
    ///
    /// Subfield keys come from [`TokenRegistry::subfields`]; a missing
    /// subfield reads as empty, so a missing flight level is malformed.
    pub fn new(token: Token, kind: RecordKind, mut subfields: Subfields) -> Result<Self> {
        let [first, second, third] = TokenRegistry::subfields(kind)
            .map(|key| subfields.remove(key.as_str()).unwrap_or_default());

        let record = match kind {
            RecordKind::EstimatedData => Record::EstimatedData(EstimatedData {
                ptid: first,
                eto: second,
                flight_level: flight_level(token, &third)?,
            }),
            RecordKind::Geo => Record::Geo(GeoPoint {
                geoid: first,
                latitude: second,
                longitude: third,
            }),
            RecordKind::RoutePoint => Record::RoutePoint(RoutePoint {
                ptid: first,
                flight_level: flight_level(token, &second)?,
                eto: third,
            }),
        };

        Ok(record)
    }
}

fn flight_level(token: Token, encoded: &str) -> Result<FlightLevel> {
    FlightLevel::parse(encoded, token).inspect_err(|err| {
        error!(%token, value = encoded, %err, "flight level cannot be parsed");
    })
}

/// Value decoded from one logical line
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecodedField {
    /// Scalar or repeating scalar token with its raw value
    Scalar { token: Token, value: String },
    /// Record-list token with its records in source order
    RecordList { token: Token, records: Vec<Record> },
}

impl DecodedField {
    /// Token the field was decoded from
    pub fn token(&self) -> Token {
        match self {
            DecodedField::Scalar { token, .. } => *token,
            DecodedField::RecordList { token, .. } => *token,
        }
    }
}

/// Decodes logical lines one at a time
pub struct FieldDecoder;

impl FieldDecoder {
    /// Decode one logical line
    ///
    /// Blank lines, comments, lines with an empty token name and unmanaged
    /// tokens yield `None`.
    pub fn decode_line(line: &str) -> Result<Option<DecodedField>> {
        if line.is_empty() || line.starts_with("//") {
            return Ok(None);
        }

        let (name, value) = LineParser::split(line);
        if name.is_empty() {
            warn!(line, "token name is empty");
            return Ok(None);
        }

        let Some(token) = TokenRegistry::lookup(name) else {
            warn!(token = name, "token is not managed by the decoder");
            return Ok(None);
        };

        let field = match TokenRegistry::kind(token) {
            FieldKind::Scalar | FieldKind::RepeatingScalar => DecodedField::Scalar {
                token,
                value: value.to_string(),
            },
            FieldKind::RecordList(kind) => {
                let raw = ComplexFieldParser::parse(value);
                if raw.is_empty() {
                    warn!(%token, "record list value is empty");
                }
                let records = raw
                    .into_iter()
                    .map(|subfields| Record::new(token, kind, subfields))
                    .collect::<Result<Vec<_>>>()?;
                DecodedField::RecordList { token, records }
            }
        };

        Ok(Some(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;

    #[test]
    fn test_decode_scalar() -> Result<()> {
        let field = FieldDecoder::decode_line("-ARCID ACA878")?;
        assert_eq!(
            field,
            Some(DecodedField::Scalar {
                token: Token::Arcid,
                value: "ACA878".to_string(),
            })
        );
        Ok(())
    }

    #[test]
    fn test_decode_repeating_scalar() -> Result<()> {
        let field = FieldDecoder::decode_line("-EETFIR KZNY 0035")?;
        assert_eq!(field.map(|f| f.token()), Some(Token::Eetfir));
        Ok(())
    }

    #[test]
    fn test_decode_ignored_lines() -> Result<()> {
        assert_eq!(FieldDecoder::decode_line("")?, None);
        assert_eq!(FieldDecoder::decode_line("// comment")?, None);
        assert_eq!(FieldDecoder::decode_line("-")?, None);
        assert_eq!(FieldDecoder::decode_line("-FOO bar")?, None);
        Ok(())
    }

    #[test]
    fn test_decode_record_list() -> Result<()> {
        let field = FieldDecoder::decode_line(
            "-ESTDATA -PTID CYYZ -ETO 170301220429 -FL F000 -PTID JOOPY -ETO 170302002327 -FL F390",
        )?;
        let Some(DecodedField::RecordList { token, records }) = field else {
            panic!("expected a record list");
        };
        assert_eq!(token, Token::Estdata);
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[1],
            Record::EstimatedData(EstimatedData {
                ptid: "JOOPY".to_string(),
                eto: "170302002327".to_string(),
                flight_level: FlightLevel::new(390),
            })
        );
        Ok(())
    }

    #[test]
    fn test_decode_geo_without_flight_level() -> Result<()> {
        let field = FieldDecoder::decode_line("-GEO -GEOID GEO01 -LATTD 490000N -ETO 1703")?;
        let Some(DecodedField::RecordList { records, .. }) = field else {
            panic!("expected a record list");
        };
        assert_eq!(
            records,
            vec![Record::Geo(GeoPoint {
                geoid: "GEO01".to_string(),
                latitude: "490000N".to_string(),
                longitude: String::new(),
            })]
        );
        Ok(())
    }

    #[test]
    fn test_decode_empty_record_list() -> Result<()> {
        let field = FieldDecoder::decode_line("-RTEPTS")?;
        assert_eq!(
            field,
            Some(DecodedField::RecordList {
                token: Token::Rtepts,
                records: Vec::new(),
            })
        );
        Ok(())
    }

    #[test]
    fn test_record_built_from_registry_keys() -> Result<()> {
        let subfields = [("PT", ""), ("PTID", "BLM"), ("FL", "F171"), ("ETO", "170302051642")]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let record = Record::new(Token::Rtepts, RecordKind::RoutePoint, subfields)?;
        assert_eq!(
            record,
            Record::RoutePoint(RoutePoint {
                ptid: "BLM".to_string(),
                flight_level: FlightLevel::new(171),
                eto: "170302051642".to_string(),
            })
        );
        Ok(())
    }

    #[test]
    fn test_decode_malformed_flight_level() {
        let result = FieldDecoder::decode_line("-RTEPTS -PTID CYYZ -FL XYZ");
        assert_eq!(
            result,
            Err(DecodeError::malformed_flight_level("RTEPTS", "XYZ"))
        );
    }

    #[test]
    fn test_decode_missing_flight_level() {
        let result = FieldDecoder::decode_line("-ESTDATA -PTID CYYZ -ETO 170301220429");
        assert_eq!(
            result,
            Err(DecodeError::malformed_flight_level("ESTDATA", ""))
        );
    }
}
