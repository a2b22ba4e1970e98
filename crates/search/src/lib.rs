//! Listing search for HanapBahay.
//!
//! This crate provides:
//! - Free-text intent parsing (price bounds, room counts, barangays, amenities)
//! - Multi-criteria filtering with relevance ranking
//! - Autocomplete suggestions from vocabularies plus recent/popular terms
//! - A trailing-edge debouncer for search-as-you-type callers
//!
//! Every function is a pure function of its arguments: listings are supplied by
//! the caller on each call, vocabularies are passed in explicitly, and no
//! module-level state is held anywhere.
//!
//! # Example
//!
//! ```
//! use hanapbahay_search::{filter_listings, parse_intent, Listing, Vocabulary};
//!
//! let vocab = Vocabulary::builtin();
//! let params = parse_intent("2br under 8k in talolong with wifi", &vocab);
//! assert_eq!(params.rooms, Some(2));
//! assert_eq!(params.max_price, Some(8000.0));
//! assert_eq!(params.location.as_deref(), Some("Talolong"));
//!
//! let listings: Vec<Listing> = Vec::new();
//! let ranked = filter_listings(&listings, &params);
//! assert!(ranked.is_empty());
//! ```

mod error;
mod filter;
mod intent;
mod listing;
mod score;
mod suggest;
mod text;
mod vocab;

#[cfg(feature = "debounce")]
mod debounce;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::{Result, SearchError};
pub use filter::filter_listings;
pub use intent::parse_intent;
pub use listing::{Listing, OccupantType, SearchParams};
pub use score::{score_listing, ScoreBreakdown};
pub use suggest::{suggest_terms, Suggestion, SuggestionKind};
pub use vocab::Vocabulary;

#[cfg(feature = "debounce")]
pub use debounce::{Debouncer, DEFAULT_DEBOUNCE_MS};
