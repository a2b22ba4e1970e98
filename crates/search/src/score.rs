//! Relevance scoring for listings.
//!
//! Scoring never decides inclusion, only ordering among listings that already
//! passed the filter. Contributions are additive and independent; there is no
//! penalty and no early exit, so every score is a small non-negative integer.

use crate::listing::{Listing, SearchParams};
use crate::text::{eq_ci, opt_contains_ci, opt_eq_ci};
use serde::Serialize;

/// Per-signal breakdown of a listing's relevance score.
///
/// Useful for explaining a ranking in debug output; the engine itself only
/// looks at [`total`](Self::total).
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ScoreBreakdown {
    /// +3 when the free-text query appears in the listing's text
    pub query: u32,
    /// 3/2/1 for barangay equality / location substring / address substring
    pub location: u32,
    /// +2 when the listing has at least the requested rooms
    pub rooms: u32,
    /// Up to +2 when the price sits inside the requested range
    pub price: u32,
    /// +1 per requested amenity the listing has
    pub amenities: u32,
    /// +2 on a property-type match
    pub property_type: u32,
}

impl ScoreBreakdown {
    /// Scores a single listing against the search parameters.
    pub fn of(listing: &Listing, params: &SearchParams) -> Self {
        let mut breakdown = Self::default();

        if let Some(query) = params.normalized_query() {
            if listing.haystack(true).contains(&query) {
                breakdown.query = 3;
            }
        }

        // Strongest location signal only: exact barangay beats a location
        // substring beats an address substring.
        if let Some(location) = params.location.as_deref().map(str::trim).filter(|l| !l.is_empty()) {
            breakdown.location = if opt_eq_ci(listing.barangay.as_deref(), location) {
                3
            } else if opt_contains_ci(listing.location.as_deref(), location) {
                2
            } else if opt_contains_ci(listing.address.as_deref(), location) {
                1
            } else {
                0
            };
        }

        if let Some(wanted) = params.min_rooms() {
            if listing.rooms.is_some_and(|r| r >= wanted) {
                breakdown.rooms = 2;
            }
        }

        if let Some(price) = listing.price {
            if params.min_price.is_some_and(|min| price >= min) {
                breakdown.price += 1;
            }
            if params.max_price.is_some_and(|max| price <= max) {
                breakdown.price += 1;
            }
        }

        if let Some(required) = &params.amenities {
            breakdown.amenities = required
                .iter()
                .filter(|want| listing.amenity_labels().iter().any(|have| eq_ci(have, want)))
                .count() as u32;
        }

        if let Some(wanted) = params.property_type.as_deref() {
            if opt_eq_ci(listing.property_type.as_deref(), wanted) {
                breakdown.property_type = 2;
            }
        }

        breakdown
    }

    /// Sum of all contributions.
    #[inline]
    pub fn total(&self) -> u32 {
        self.query + self.location + self.rooms + self.price + self.amenities + self.property_type
    }
}

/// Calculates the relevance score of a listing for the given parameters.
///
/// # Example
/// ```
/// use hanapbahay_search::{score_listing, Listing, SearchParams};
///
/// let listing = Listing {
///     title: Some("House with parking".to_string()),
///     ..Listing::new("L-1")
/// };
/// let params = SearchParams {
///     query: Some("parking".to_string()),
///     ..SearchParams::default()
/// };
/// assert_eq!(score_listing(&listing, &params), 3);
/// ```
#[inline]
pub fn score_listing(listing: &Listing, params: &SearchParams) -> u32 {
    ScoreBreakdown::of(listing, params).total()
}
