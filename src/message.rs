//! Decoded ADEXP message and its record types

use crate::constants::UPPER_LEVEL;
use crate::core::FlightLevel;

/// Format a message was decoded from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MessageType {
    /// ATS Data Exchange Presentation
    #[default]
    Adexp,
    /// ICAO/AFTN format, reserved and never produced by this decoder
    Icao,
}

/// Estimated data over a point
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EstimatedData {
    /// Point id
    pub ptid: String,
    /// Estimated time over, raw `YYMMDDhhmmss` encoding
    pub eto: String,
    /// Flight level
    pub flight_level: FlightLevel,
}

/// Geographical point
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    /// Geo point id
    pub geoid: String,
    /// Latitude, raw encoding
    pub latitude: String,
    /// Longitude, raw encoding
    pub longitude: String,
}

/// Point of the planned route
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutePoint {
    /// Point id
    pub ptid: String,
    /// Flight level over the point
    pub flight_level: FlightLevel,
    /// Estimated time over, raw `YYMMDDhhmmss` encoding
    pub eto: String,
}

/// A decoded ADEXP message
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    /// Message type
    pub message_type: MessageType,
    /// Message title (e.g. `IFPL`)
    pub title: String,
    /// Aerodrome of departure
    pub adep: String,
    /// Aerodrome of destination
    pub ades: String,
    /// Alternate aerodrome
    pub alternate: String,
    /// Aircraft identification
    pub arcid: String,
    /// Aircraft type
    pub arc_type: String,
    /// Equipment
    pub ceqpt: String,
    /// Free text message body
    pub message_text: String,
    /// Comment
    pub comment: String,
    /// Flight information region crossings
    pub eetfir: Vec<String>,
    /// Speeds
    pub speed: Vec<String>,
    /// Estimated data
    pub estdata: Vec<EstimatedData>,
    /// Geo points
    pub geo: Vec<GeoPoint>,
    /// Route points
    pub route_points: Vec<RoutePoint>,
}

impl Message {
    /// Check if any route point is above the upper airspace boundary (FL350)
    pub fn is_upper_level(&self) -> bool {
        self.route_points
            .iter()
            .any(|point| point.flight_level.value() > UPPER_LEVEL)
    }
}

/// Check if a message concerns the upper airspace (any route point above FL350)
pub fn is_upper_level(message: &Message) -> bool {
    message.is_upper_level()
}
