//! Autocomplete suggestions for the search box.
//!
//! Candidates come from three sources: the vocabulary (locations, then
//! amenities), the caller's recent searches, and the caller's popular terms.
//!
//! Ordering note: recent terms are prepended to the front one at a time while
//! iterating them in original order, so the *last* recent term ends up first.
//! That matches the shipped app behavior the mobile client depends on, and is
//! kept deliberately; see `test_recent_terms_last_ends_up_first` for the
//! pinned ordering and the sibling test for the ordering this is *not*.

use crate::text::contains_ci;
use crate::vocab::Vocabulary;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Maximum recent and popular terms included per source.
const TERMS_PER_SOURCE: usize = 6;

/// Where a suggestion came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    /// A known barangay
    Location,
    /// A known amenity label
    Amenity,
    /// One of the caller's recent searches
    Recent,
    /// A popular search term
    Popular,
}

/// A single autocomplete candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Source of the suggestion
    pub kind: SuggestionKind,
    /// Value to search for when selected
    pub value: String,
    /// Text shown in the dropdown
    pub label: String,
}

impl Suggestion {
    fn new(kind: SuggestionKind, term: &str) -> Self {
        Self {
            kind,
            value: term.to_string(),
            label: term.to_string(),
        }
    }
}

/// Builds ordered, de-duplicated suggestions for a search-box input.
///
/// An empty `input` matches every vocabulary entry. De-duplication is by
/// display label, first occurrence wins.
///
/// # Example
/// ```
/// use hanapbahay_search::{suggest_terms, SuggestionKind, Vocabulary};
///
/// let vocab = Vocabulary::builtin();
/// let suggestions = suggest_terms("talo", &[], &[], &vocab);
/// assert_eq!(suggestions.len(), 1);
/// assert_eq!(suggestions[0].kind, SuggestionKind::Location);
/// assert_eq!(suggestions[0].label, "Talolong");
/// ```
pub fn suggest_terms(
    input: &str,
    recent: &[String],
    popular: &[String],
    vocab: &Vocabulary,
) -> Vec<Suggestion> {
    let input = input.trim();
    let mut candidates: Vec<Suggestion> = Vec::new();

    for barangay in &vocab.barangays {
        if input.is_empty() || contains_ci(barangay, input) {
            candidates.push(Suggestion::new(SuggestionKind::Location, barangay));
        }
    }
    for amenity in &vocab.amenities {
        if input.is_empty() || contains_ci(amenity, input) {
            candidates.push(Suggestion::new(SuggestionKind::Amenity, amenity));
        }
    }

    // Sequential unshift: each recent term is inserted at the front in turn,
    // so the last of the first six recent terms ends up first overall.
    for term in recent.iter().take(TERMS_PER_SOURCE) {
        candidates.insert(0, Suggestion::new(SuggestionKind::Recent, term));
    }

    for term in popular.iter().take(TERMS_PER_SOURCE) {
        candidates.push(Suggestion::new(SuggestionKind::Popular, term));
    }

    let mut seen: HashSet<String> = HashSet::with_capacity(candidates.len());
    candidates.retain(|s| seen.insert(s.label.clone()));
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn labels(suggestions: &[Suggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.label.as_str()).collect()
    }

    #[test]
    fn test_empty_input_lists_whole_vocabulary() {
        let vocab = Vocabulary::builtin();
        let suggestions = suggest_terms("", &[], &[], &vocab);
        assert_eq!(
            suggestions.len(),
            vocab.barangays.len() + vocab.amenities.len()
        );
        assert_eq!(suggestions[0].kind, SuggestionKind::Location);
    }

    #[test]
    fn test_input_filters_both_vocabularies() {
        let vocab = Vocabulary::new(terms(&["Talolong", "Rizal"]), terms(&["WiFi", "Water Included"]));
        let suggestions = suggest_terms("wa", &[], &[], &vocab);
        assert_eq!(labels(&suggestions), vec!["Water Included"]);
        assert_eq!(suggestions[0].kind, SuggestionKind::Amenity);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let vocab = Vocabulary::builtin();
        let suggestions = suggest_terms("TALO", &[], &[], &vocab);
        assert_eq!(labels(&suggestions), vec!["Talolong"]);
    }

    #[test]
    fn test_recent_terms_last_ends_up_first() {
        // Pinned shipped behavior: sequential unshift reverses the recent
        // slice relative to its input order.
        let vocab = Vocabulary::new(terms(&["Rizal"]), Vec::new());
        let suggestions = suggest_terms("", &terms(&["first", "second", "third"]), &[], &vocab);
        assert_eq!(labels(&suggestions), vec!["third", "second", "first", "Rizal"]);
    }

    #[test]
    fn test_recent_terms_are_not_first_recent_first() {
        // The intuitive ordering would keep "first" in front; asserting the
        // opposite here makes the compatibility choice visible.
        let vocab = Vocabulary::new(Vec::new(), Vec::new());
        let suggestions = suggest_terms("", &terms(&["first", "second"]), &[], &vocab);
        assert_ne!(labels(&suggestions), vec!["first", "second"]);
        assert_eq!(labels(&suggestions), vec!["second", "first"]);
    }

    #[test]
    fn test_recent_capped_at_six() {
        let vocab = Vocabulary::new(Vec::new(), Vec::new());
        let recent = terms(&["a", "b", "c", "d", "e", "f", "g", "h"]);
        let suggestions = suggest_terms("", &recent, &[], &vocab);
        // Only the first six are considered, then reversed by the unshifts.
        assert_eq!(labels(&suggestions), vec!["f", "e", "d", "c", "b", "a"]);
    }

    #[test]
    fn test_popular_appended_after_vocabulary() {
        let vocab = Vocabulary::new(terms(&["Rizal"]), terms(&["WiFi"]));
        let suggestions = suggest_terms("", &[], &terms(&["cheap room", "near school"]), &vocab);
        assert_eq!(
            labels(&suggestions),
            vec!["Rizal", "WiFi", "cheap room", "near school"]
        );
        assert_eq!(suggestions[2].kind, SuggestionKind::Popular);
    }

    #[test]
    fn test_popular_capped_at_six() {
        let vocab = Vocabulary::new(Vec::new(), Vec::new());
        let popular = terms(&["a", "b", "c", "d", "e", "f", "g"]);
        let suggestions = suggest_terms("", &[], &popular, &vocab);
        assert_eq!(suggestions.len(), 6);
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let vocab = Vocabulary::new(terms(&["Rizal"]), Vec::new());
        let suggestions = suggest_terms(
            "",
            &terms(&["Rizal"]),
            &terms(&["Rizal"]),
            &vocab,
        );
        // The recent entry was unshifted ahead of the vocabulary entry, so the
        // surviving "Rizal" is tagged recent.
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].kind, SuggestionKind::Recent);
    }

    #[test]
    fn test_all_sources_empty() {
        let vocab = Vocabulary::new(Vec::new(), Vec::new());
        assert!(suggest_terms("anything", &[], &[], &vocab).is_empty());
    }
}
