//! Multi-criteria listing filtering with relevance ranking.
//!
//! A constraint is active only when its parameter is set; inactive constraints
//! are skipped entirely, so a listing with missing fields is never excluded by
//! a constraint the caller did not ask for. Survivors are ordered by relevance
//! score, descending, with a stable sort so equal scores keep their original
//! relative order.

use crate::listing::{Listing, OccupantType, SearchParams};
use crate::score::score_listing;
use crate::text::{eq_ci, opt_contains_ci, opt_eq_ci};

/// Filters listings against the search parameters and ranks the survivors.
///
/// Input listings are not mutated; the result is a reordered subset of
/// clones. Calling twice with identical inputs yields identical output.
///
/// # Example
/// ```
/// use hanapbahay_search::{filter_listings, Listing, SearchParams};
///
/// let listings = vec![
///     Listing { price: Some(4500.0), ..Listing::new("a") },
///     Listing { price: Some(15000.0), ..Listing::new("b") },
/// ];
/// let params = SearchParams {
///     max_price: Some(10000.0),
///     ..SearchParams::default()
/// };
/// let ranked = filter_listings(&listings, &params);
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked[0].id, "a");
/// ```
pub fn filter_listings(listings: &[Listing], params: &SearchParams) -> Vec<Listing> {
    #[cfg(feature = "parallel")]
    let scored: Vec<Option<(Listing, u32)>> = {
        use rayon::prelude::*;
        listings
            .par_iter()
            .map(|listing| match_and_score(listing, params))
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let scored: Vec<Option<(Listing, u32)>> = listings
        .iter()
        .map(|listing| match_and_score(listing, params))
        .collect();

    // The parallel map preserves input order, so the stable sort below keeps
    // original relative order among equal scores.
    let mut survivors: Vec<(Listing, u32)> = scored.into_iter().flatten().collect();
    survivors.sort_by(|a, b| b.1.cmp(&a.1));

    tracing::debug!(
        candidates = listings.len(),
        survivors = survivors.len(),
        "Filtered listings"
    );

    survivors.into_iter().map(|(listing, _)| listing).collect()
}

/// Clones and scores the listing when it passes every active constraint.
fn match_and_score(listing: &Listing, params: &SearchParams) -> Option<(Listing, u32)> {
    if matches(listing, params) {
        Some((listing.clone(), score_listing(listing, params)))
    } else {
        None
    }
}

/// True when the listing passes every active constraint.
fn matches(listing: &Listing, params: &SearchParams) -> bool {
    if let Some(location) = params.location.as_deref().map(str::trim).filter(|l| !l.is_empty()) {
        // OR across three signals: exact barangay, location substring,
        // address substring.
        let hit = opt_eq_ci(listing.barangay.as_deref(), location)
            || opt_contains_ci(listing.location.as_deref(), location)
            || opt_contains_ci(listing.address.as_deref(), location);
        if !hit {
            return false;
        }
    }

    // Price bounds are inclusive and only apply when the listing has a price.
    if let (Some(min), Some(price)) = (params.min_price, listing.price) {
        if price < min {
            return false;
        }
    }
    if let (Some(max), Some(price)) = (params.max_price, listing.price) {
        if price > max {
            return false;
        }
    }

    if let Some(wanted) = params.min_rooms() {
        if listing.rooms.unwrap_or(0) < wanted {
            return false;
        }
    }

    if let Some(required) = params.amenities.as_deref().filter(|a| !a.is_empty()) {
        // AND semantics: a listing with no amenities can never satisfy a
        // non-empty requirement list.
        let have = listing.amenity_labels();
        if !required
            .iter()
            .all(|want| have.iter().any(|label| eq_ci(label, want)))
        {
            return false;
        }
    }

    if let Some(wanted) = params.property_type.as_deref() {
        if !opt_eq_ci(listing.property_type.as_deref(), wanted) {
            return false;
        }
    }

    if let Some(occupant) = params.occupant_type {
        // Heuristic over the rental-type label; listings without a label pass.
        if let Some(rental) = listing.rental_type.as_deref() {
            let whole_unit = eq_ci(rental, "whole unit");
            match occupant {
                OccupantType::Family if !whole_unit => return false,
                OccupantType::Individual if whole_unit => return false,
                _ => {}
            }
        }
    }

    if let Some(query) = params.normalized_query() {
        if !listing.haystack(false).contains(&query) {
            return false;
        }
    }

    true
}
