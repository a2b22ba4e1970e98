//! Search vocabularies: canonical barangay and amenity labels.
//!
//! The vocabularies are configuration, not behavior. Both lists are ordered:
//! intent parsing picks the first barangay found in the phrase, and
//! suggestions are emitted in list order, so reordering a vocabulary file is
//! an observable change.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Ordered vocabularies the search engine matches against.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Canonical barangay names, in display order
    #[serde(default)]
    pub barangays: Vec<String>,
    /// Canonical amenity labels, in display order
    #[serde(default)]
    pub amenities: Vec<String>,
}

impl Vocabulary {
    /// Creates a vocabulary from explicit lists.
    pub fn new(barangays: Vec<String>, amenities: Vec<String>) -> Self {
        Self { barangays, amenities }
    }

    /// The vocabularies shipped with the app.
    pub fn builtin() -> Self {
        let barangays = [
            "Talolong",
            "Rizal",
            "Gomez",
            "Magsaysay",
            "Burgos",
            "Bocboc",
            "Danlagan",
            "Del Pilar",
            "Mabini",
            "Villa Espina",
        ];
        let amenities = [
            "WiFi",
            "Parking",
            "Aircon",
            "Furnished",
            "Own CR",
            "Kitchen",
            "Laundry",
            "Pet Friendly",
            "CCTV",
            "Water Included",
        ];
        Self {
            barangays: barangays.iter().map(|s| s.to_string()).collect(),
            amenities: amenities.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Parses a vocabulary from TOML text.
    ///
    /// Missing keys fall back to empty lists, so a file can override just one
    /// vocabulary.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Loads a vocabulary from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
