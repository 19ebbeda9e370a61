//! Folding of decoded fields into a message

use crate::core::Token;
use crate::error::Result;
use crate::field::{DecodedField, Record};
use crate::message::{Message, MessageType};

/// Builds a [`Message`] from decoded fields applied in source order
///
/// Scalars overwrite, repeating scalars and record lists append.
#[derive(Debug, Default)]
pub struct MessageAggregator {
    message: Message,
}

impl MessageAggregator {
    /// Create an aggregator holding an empty message
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold per-line decode outcomes in order, stopping at the first error
    pub fn aggregate<I>(outcomes: I) -> Result<Message>
    where
        I: IntoIterator<Item = Result<Option<DecodedField>>>,
    {
        let mut aggregator = Self::new();
        for outcome in outcomes {
            if let Some(field) = outcome? {
                aggregator.apply(field);
            }
        }
        Ok(aggregator.finish())
    }

    /// Merge one field into the message
    pub fn apply(&mut self, field: DecodedField) {
        let msg = &mut self.message;

        match field {
            DecodedField::Scalar { token, value } => match token {
                Token::Title => msg.title = value,
                Token::Adep => msg.adep = value,
                Token::Ades => msg.ades = value,
                Token::Altnz => msg.alternate = value,
                Token::Arcid => msg.arcid = value,
                Token::Arctyp => msg.arc_type = value,
                Token::Ceqpt => msg.ceqpt = value,
                Token::Msgtxt => msg.message_text = value,
                Token::Comment => msg.comment = value,
                Token::Eetfir => msg.eetfir.push(value),
                Token::Speed => msg.speed.push(value),
                Token::Estdata | Token::Geo | Token::Rtepts => {
                    tracing::warn!(%token, "record list token carried a scalar value");
                }
            },
            DecodedField::RecordList { records, .. } => {
                for record in records {
                    match record {
                        Record::EstimatedData(data) => msg.estdata.push(data),
                        Record::Geo(point) => msg.geo.push(point),
                        Record::RoutePoint(point) => msg.route_points.push(point),
                    }
                }
            }
        }
    }

    /// Finish the message and stamp its type
    pub fn finish(mut self) -> Message {
        self.message.message_type = MessageType::Adexp;
        self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;
    use crate::field::FieldDecoder;

    fn decode_all(lines: &[&str]) -> Result<Message> {
        MessageAggregator::aggregate(lines.iter().map(|line| FieldDecoder::decode_line(line)))
    }

    #[test]
    fn test_scalar_last_occurrence_wins() -> Result<()> {
        let msg = decode_all(&["-ADEP CYYZ", "-ADEP LSZH"])?;
        assert_eq!(msg.adep, "LSZH");
        Ok(())
    }

    #[test]
    fn test_repeating_scalars_keep_source_order() -> Result<()> {
        let msg = decode_all(&[
            "-EETFIR KZNY 0035",
            "-SPEED N0456",
            "-EETFIR CZQX 0110",
            "-SPEED N0460",
            "-EETFIR EGGX 0310",
        ])?;
        assert_eq!(msg.eetfir, vec!["KZNY 0035", "CZQX 0110", "EGGX 0310"]);
        assert_eq!(msg.speed, vec!["N0456", "N0460"]);
        Ok(())
    }

    #[test]
    fn test_record_lists_append() -> Result<()> {
        let msg = decode_all(&[
            "-RTEPTS -PTID CYYZ -FL F000 -ETO 170301220429",
            "-GEO -GEOID GEO01 -LATTD 490000N -LONGTD 0500000W",
            "-RTEPTS -PTID JOOPY -FL F390 -ETO 170302002327",
        ])?;
        assert_eq!(msg.route_points.len(), 2);
        assert_eq!(msg.route_points[0].ptid, "CYYZ");
        assert_eq!(msg.route_points[1].flight_level.value(), 390);
        assert_eq!(msg.geo[0].latitude, "490000N");
        assert_eq!(msg.message_type, MessageType::Adexp);
        Ok(())
    }

    #[test]
    fn test_first_error_is_returned() {
        let result = decode_all(&[
            "-TITLE IFPL",
            "-ESTDATA -PTID CYYZ -ETO 170301220429 -FL FABC",
            "-RTEPTS -PTID CYYZ -FL XYZ -ETO 170301220429",
        ]);
        assert_eq!(
            result,
            Err(DecodeError::malformed_flight_level("ESTDATA", "FABC"))
        );
    }
}
