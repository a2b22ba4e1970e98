//! Listing records and search parameters.
//!
//! Listings come from the app's storage layer as loosely-shaped JSON, so every
//! field other than the identifier is optional. Accessors on this side handle
//! the unset case explicitly instead of leaning on defaults at parse time.

use serde::{Deserialize, Serialize};

/// A rental property record as stored by the app.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Listing {
    /// Stable listing identifier
    pub id: String,
    /// Listing title shown in search results
    pub title: Option<String>,
    /// Free-text location label (e.g. "Talolong, Lopez")
    pub location: Option<String>,
    /// Free-text street address
    pub address: Option<String>,
    /// Long-form description
    pub description: Option<String>,
    /// Monthly price in pesos
    pub price: Option<f64>,
    /// Number of bedrooms
    pub rooms: Option<u32>,
    /// Number of bathrooms
    pub bathrooms: Option<u32>,
    /// Property type label (e.g. "House", "Apartment", "Bedspace")
    pub property_type: Option<String>,
    /// Canonical barangay name
    pub barangay: Option<String>,
    /// Amenity labels (e.g. "WiFi", "Parking")
    pub amenities: Option<Vec<String>>,
    /// Rental type label (e.g. "Whole Unit", "Per Room", "Per Bed")
    pub rental_type: Option<String>,
}

impl Listing {
    /// Creates an empty listing with the given identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Amenity labels, empty when none are recorded.
    #[inline]
    pub fn amenity_labels(&self) -> &[String] {
        self.amenities.as_deref().unwrap_or_default()
    }

    /// Lower-cased concatenation of the listing's free-text fields.
    ///
    /// Used for free-text matching; missing fields contribute nothing. When
    /// `with_property_type` is set the property-type label is appended, which
    /// is the wider haystack scoring uses.
    pub(crate) fn haystack(&self, with_property_type: bool) -> String {
        let mut text = String::new();
        for field in [&self.title, &self.location, &self.address, &self.description] {
            if let Some(value) = field {
                text.push_str(value);
                text.push(' ');
            }
        }
        if with_property_type {
            if let Some(value) = &self.property_type {
                text.push_str(value);
                text.push(' ');
            }
        }
        text.to_lowercase()
    }
}

/// Who the unit is being searched for.
///
/// Mapped heuristically onto the listing's rental-type label: families want
/// whole units, individuals want shared/per-room setups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OccupantType {
    /// Renting the unit as a whole
    Family,
    /// Renting a room or bed within a shared unit
    Individual,
}

/// Search constraints, all optional.
///
/// An unset field means "no constraint". Built either directly by filter UI
/// or by [`parse_intent`](crate::parse_intent) from a free-text phrase; the
/// two sources can be merged by the caller with the UI taking precedence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchParams {
    /// Free-text query matched against the listing's text fields
    pub query: Option<String>,
    /// Target barangay or location fragment
    pub location: Option<String>,
    /// Minimum monthly price in pesos, inclusive
    pub min_price: Option<f64>,
    /// Maximum monthly price in pesos, inclusive
    pub max_price: Option<f64>,
    /// Minimum bedroom count; `0` behaves like unset
    pub rooms: Option<u32>,
    /// Amenity labels that must all be present
    pub amenities: Option<Vec<String>>,
    /// Exact property-type label
    pub property_type: Option<String>,
    /// Occupant heuristic applied to the rental-type label
    pub occupant_type: Option<OccupantType>,
}

impl SearchParams {
    /// Returns true when no constraint is set at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// The query trimmed and lower-cased, `None` when unset or blank.
    pub(crate) fn normalized_query(&self) -> Option<String> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }

    /// Room constraint, treating `Some(0)` as unset.
    #[inline]
    pub(crate) fn min_rooms(&self) -> Option<u32> {
        self.rooms.filter(|&n| n > 0)
    }
}
