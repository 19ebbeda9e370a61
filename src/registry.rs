//! Fixed mapping from ADEXP token names to field kinds

use crate::core::{FieldKind, RecordKind, Subfield, Token};

/// Static registry of the tokens the decoder manages
///
/// Any token name missing from the registry is unmanaged and contributes
/// nothing to a decoded message.
pub struct TokenRegistry;

impl TokenRegistry {
    /// Resolve a token name, `None` when unmanaged
    pub fn lookup(name: &str) -> Option<Token> {
        name.parse().ok()
    }

    /// Field kind of a managed token
    pub fn kind(token: Token) -> FieldKind {
        match token {
            Token::Title
            | Token::Adep
            | Token::Ades
            | Token::Altnz
            | Token::Arcid
            | Token::Arctyp
            | Token::Ceqpt
            | Token::Msgtxt
            | Token::Comment => FieldKind::Scalar,
            Token::Eetfir | Token::Speed => FieldKind::RepeatingScalar,
            Token::Estdata => FieldKind::RecordList(RecordKind::EstimatedData),
            Token::Geo => FieldKind::RecordList(RecordKind::Geo),
            Token::Rtepts => FieldKind::RecordList(RecordKind::RoutePoint),
        }
    }

    /// Subfields read when building a record of the given kind, in the
    /// order of the record's fields
    pub fn subfields(kind: RecordKind) -> [Subfield; 3] {
        match kind {
            RecordKind::EstimatedData => [Subfield::Ptid, Subfield::Eto, Subfield::Fl],
            RecordKind::Geo => [Subfield::Geoid, Subfield::Lattd, Subfield::Longtd],
            RecordKind::RoutePoint => [Subfield::Ptid, Subfield::Fl, Subfield::Eto],
        }
    }
}
