use std::fmt;

use serde::{Deserialize, Serialize};
use serde_this_or_that::as_f64;

use super::error::ModelError;

/// Rent charged per unit of floor area.
pub const RATE: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoomKind {
    Bedroom,
    LivingRoom,
    Bathroom,
    Kitchen,
    Other(String),
}

impl From<&str> for RoomKind {
    fn from(label: &str) -> Self {
        let normalized = label
            .trim()
            .to_lowercase()
            .replace(['_', '-'], " ");

        match normalized.as_str() {
            "bedroom" => RoomKind::Bedroom,
            "living room" | "livingroom" => RoomKind::LivingRoom,
            "bathroom" => RoomKind::Bathroom,
            "kitchen" => RoomKind::Kitchen,
            _ => RoomKind::Other(label.trim().to_string()),
        }
    }
}

impl From<String> for RoomKind {
    fn from(label: String) -> Self {
        RoomKind::from(label.as_str())
    }
}

impl From<RoomKind> for String {
    fn from(kind: RoomKind) -> Self {
        kind.to_string()
    }
}

impl fmt::Display for RoomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomKind::Bedroom => write!(f, "bedroom"),
            RoomKind::LivingRoom => write!(f, "living room"),
            RoomKind::Bathroom => write!(f, "bathroom"),
            RoomKind::Kitchen => write!(f, "kitchen"),
            RoomKind::Other(label) => write!(f, "{}", label),
        }
    }
}

/// Raw room fields as they arrive from seed files or stored documents.
/// Dimensions may be given as numbers or numeric strings.
#[derive(Debug, Deserialize)]
pub struct RoomInput {
    #[serde(alias = "type")]
    pub kind: String,
    #[serde(deserialize_with = "as_f64")]
    pub length: f64,
    #[serde(deserialize_with = "as_f64")]
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RoomInput")]
pub struct Room {
    kind: RoomKind,
    length: f64,
    width: f64,
}

impl Room {
    /// Known labels are normalized, so `RoomKind::Other("bedroom")` becomes
    /// `RoomKind::Bedroom` and counts as one.
    pub fn new(kind: impl Into<RoomKind>, length: f64, width: f64) -> Result<Room, ModelError> {
        let kind = RoomKind::from(kind.into().to_string());
        if kind == RoomKind::Other(String::new()) {
            return Err(ModelError::EmptyField("room type"));
        }

        Ok(Room {
            kind,
            length: validate_dimension("length", length)?,
            width: validate_dimension("width", width)?,
        })
    }

    /// Builds a room from string dimensions, e.g. `Room::parse("bedroom", "10", "12")`.
    pub fn parse(kind: &str, length: &str, width: &str) -> Result<Room, ModelError> {
        Room::new(
            kind,
            parse_dimension("length", length)?,
            parse_dimension("width", width)?,
        )
    }

    pub fn kind(&self) -> &RoomKind {
        &self.kind
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn is_bedroom(&self) -> bool {
        self.kind == RoomKind::Bedroom
    }

    pub fn area(&self) -> f64 {
        self.length * self.width
    }

    pub fn cost(&self) -> f64 {
        self.area() * RATE
    }
}

impl TryFrom<RoomInput> for Room {
    type Error = ModelError;

    fn try_from(input: RoomInput) -> Result<Self, Self::Error> {
        Room::new(input.kind, input.length, input.width)
    }
}

fn parse_dimension(field: &'static str, raw: &str) -> Result<f64, ModelError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ModelError::InvalidDimension {
            field,
            value: raw.to_string(),
        })
}

// Dimensions must be finite and strictly positive
fn validate_dimension(field: &'static str, value: f64) -> Result<f64, ModelError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ModelError::InvalidDimension {
            field,
            value: value.to_string(),
        })
    }
}
