use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum Error {
    #[error("GeoHash length '{length}' is out of range (valid: 1..=11 for encoding, non-empty for decoding)")]
    InvalidLength { length: usize },

    #[error("Character '{character}' at index {index} is not part of the GeoHash alphabet")]
    InvalidCharacter { character: char, index: usize },

    #[error("Longitude '{longitude}' is out of range (valid: -180.0..=180.0)")]
    LongitudeOutOfRange { longitude: f64 },

    #[error("Latitude '{latitude}' is out of range (valid: -90.0..=90.0)")]
    LatitudeOutOfRange { latitude: f64 },
}
