//! # ADEXP Message Decoder
//!
//! A Rust library for decoding ADEXP (ATS Data Exchange Presentation)
//! air-traffic messages.
//!
//! ADEXP is a line-oriented text format: every field starts with a dash and a
//! token name, values may wrap over several physical lines, and some fields
//! carry a repeated list of `-KEY value` subfields. This library provides:
//!
//! - Reassembly of wrapped and block (`-BEGIN`/`-END`) fields
//! - Decoding of scalar, repeating and record-list fields
//! - Aggregation into a typed [`Message`]
//! - Optional parallel decoding with source-order results
//!
//! ## Features
//!
//! - `serde`: Enable serialization/deserialization support
//!
//! ## Example
//!
//! ```
//! use adexp_decoder::decode;
//!
//! let message = decode("-TITLE IFPL\n-ARCID ACA878\n-RTEPTS -PTID JOOPY -FL F390 -ETO 170302002327")?;
//! assert_eq!(message.arcid, "ACA878");
//! assert!(message.is_upper_level());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod aggregate;
pub mod complex;
pub mod core;
pub mod decoder;
pub mod error;
pub mod field;
pub mod line;
pub mod message;
pub mod preprocess;
pub mod registry;

pub use aggregate::MessageAggregator;
pub use crate::core::{FieldKind, FlightLevel, RecordKind, Subfield, Token};
pub use decoder::{decode, Decoder, DecoderBuilder, Strategy};
pub use error::{DecodeError, Result};
pub use field::{DecodedField, FieldDecoder, Record};
pub use message::{is_upper_level, EstimatedData, GeoPoint, Message, MessageType, RoutePoint};
pub use registry::TokenRegistry;

/// ADEXP domain constants
pub mod constants {
    /// Flight level above which a route is in the upper airspace
    pub const UPPER_LEVEL: u32 = 350;
}
