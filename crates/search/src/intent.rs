//! Free-text intent parsing.
//!
//! Turns a search phrase like "2br under 8k in talolong with wifi" into
//! structured [`SearchParams`], opportunistically extracting hints without
//! requiring the user to touch the filter UI. The raw phrase is always kept
//! as the free-text query so downstream matching never loses information.

use crate::listing::SearchParams;
use crate::vocab::Vocabulary;
use once_cell::sync::Lazy;
use regex::Regex;

static ROOMS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*(?:br|bed(?:rooms?)?|rooms?)\b").unwrap());

static UNDER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"under\s+(\d+)\s*k?\b").unwrap());

static MAX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:<=|less\s+than|max)\s*(\d+)\s*k?\b").unwrap());

static RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:between|from)\s+(\d+)\s*k?\s*(?:and|to|-)\s*(\d+)\s*k?\b").unwrap()
});

static BARE_AMOUNT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{4,6})\b").unwrap());

/// Parses a free-text search phrase into partial [`SearchParams`].
///
/// Matching is case-insensitive. Extraction is best-effort: a pattern that
/// fails to match (or fails to parse as a number) simply leaves its field
/// unset. The raw input is preserved in `query` either way.
///
/// # Example
/// ```
/// use hanapbahay_search::{parse_intent, Vocabulary};
///
/// let params = parse_intent("3 bedroom house from 5k to 12k in rizal", &Vocabulary::builtin());
/// assert_eq!(params.rooms, Some(3));
/// assert_eq!(params.min_price, Some(5000.0));
/// assert_eq!(params.max_price, Some(12000.0));
/// assert_eq!(params.location.as_deref(), Some("Rizal"));
/// ```
pub fn parse_intent(input: &str, vocab: &Vocabulary) -> SearchParams {
    let text = input.to_lowercase();
    // A "k" anywhere in the phrase means the user is talking in thousands.
    let kilo = text.contains('k');

    let mut params = SearchParams {
        query: Some(input.to_string()),
        ..SearchParams::default()
    };

    if let Some(caps) = ROOMS_RE.captures(&text) {
        params.rooms = caps[1].parse::<u32>().ok();
    }

    // Price rules in priority order; the first rule that matches wins.
    if let Some(caps) = UNDER_RE.captures(&text) {
        params.max_price = caps[1].parse::<f64>().ok().map(|n| scale(n, kilo));
    } else if let Some(caps) = MAX_RE.captures(&text) {
        params.max_price = caps[1].parse::<f64>().ok().map(|n| scale(n, kilo));
    } else if let Some(caps) = RANGE_RE.captures(&text) {
        if let (Ok(a), Ok(b)) = (caps[1].parse::<f64>(), caps[2].parse::<f64>()) {
            let (a, b) = (scale(a, kilo), scale(b, kilo));
            params.min_price = Some(a.min(b));
            params.max_price = Some(a.max(b));
        }
    } else if let Some(caps) = BARE_AMOUNT_RE.captures(&text) {
        // A standalone 4-6 digit number is already an absolute peso amount.
        params.max_price = caps[1].parse::<f64>().ok();
    }

    params.location = vocab
        .barangays
        .iter()
        .find(|b| text.contains(&b.to_lowercase()))
        .cloned();

    let amenities: Vec<String> = vocab
        .amenities
        .iter()
        .filter(|a| text.contains(&a.to_lowercase()))
        .cloned()
        .collect();
    if !amenities.is_empty() {
        params.amenities = Some(amenities);
    }

    tracing::debug!(
        input,
        rooms = ?params.rooms,
        min_price = ?params.min_price,
        max_price = ?params.max_price,
        location = ?params.location,
        "Parsed search intent"
    );

    params
}

#[inline]
fn scale(n: f64, kilo: bool) -> f64 {
    if kilo { n * 1000.0 } else { n }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> SearchParams {
        parse_intent(input, &Vocabulary::builtin())
    }

    #[test]
    fn test_raw_input_preserved_as_query() {
        let params = parse("2BR under 8k in Talolong");
        assert_eq!(params.query.as_deref(), Some("2BR under 8k in Talolong"));
    }

    #[test]
    fn test_rooms_token_variants() {
        assert_eq!(parse("2br apartment").rooms, Some(2));
        assert_eq!(parse("3 bedroom house").rooms, Some(3));
        assert_eq!(parse("4 rooms").rooms, Some(4));
        assert_eq!(parse("1 bed unit").rooms, Some(1));
    }

    #[test]
    fn test_rooms_first_match_only() {
        assert_eq!(parse("2br or maybe 3br").rooms, Some(2));
    }

    #[test]
    fn test_rooms_ignores_unrelated_words() {
        // "2 bright" is not a room count
        assert_eq!(parse("2 bright windows").rooms, None);
    }

    #[test]
    fn test_under_with_k_scales() {
        assert_eq!(parse("under 8k").max_price, Some(8000.0));
    }

    #[test]
    fn test_under_without_k_is_literal() {
        assert_eq!(parse("under 8000").max_price, Some(8000.0));
        assert_eq!(parse("under 500").max_price, Some(500.0));
    }

    #[test]
    fn test_k_anywhere_in_text_scales() {
        // The "k" lives in another token but still flips the scale.
        assert_eq!(parse("under 8, near kiosk").max_price, Some(8000.0));
    }

    #[test]
    fn test_max_rule() {
        assert_eq!(parse("max 10k").max_price, Some(10_000.0));
        assert_eq!(parse("less than 6k").max_price, Some(6000.0));
    }

    #[test]
    fn test_under_takes_priority_over_max() {
        let params = parse("under 3k max 9k");
        assert_eq!(params.max_price, Some(3000.0));
    }

    #[test]
    fn test_range_rule_orders_bounds() {
        let params = parse("between 10k and 4k");
        assert_eq!(params.min_price, Some(4000.0));
        assert_eq!(params.max_price, Some(10_000.0));

        let params = parse("from 3k to 7k");
        assert_eq!(params.min_price, Some(3000.0));
        assert_eq!(params.max_price, Some(7000.0));
    }

    #[test]
    fn test_bare_amount_is_never_scaled() {
        // "parking" contains a "k" but a standalone amount is already absolute.
        let params = parse("7000 with parking");
        assert_eq!(params.max_price, Some(7000.0));
        assert_eq!(params.min_price, None);
    }

    #[test]
    fn test_bare_amount_requires_four_digits() {
        assert_eq!(parse("near gate 3").max_price, None);
        assert_eq!(parse("around 950").max_price, None);
    }

    #[test]
    fn test_location_first_vocabulary_match_wins() {
        let params = parse("rizal or gomez");
        // Vocabulary order decides, not phrase order.
        assert_eq!(params.location.as_deref(), Some("Rizal"));

        let params = parse("gomez near talolong");
        assert_eq!(params.location.as_deref(), Some("Talolong"));
    }

    #[test]
    fn test_location_canonical_casing() {
        assert_eq!(parse("house in TALOLONG").location.as_deref(), Some("Talolong"));
    }

    #[test]
    fn test_amenities_collects_all_matches() {
        let params = parse("with wifi and parking, aircon preferred");
        assert_eq!(
            params.amenities,
            Some(vec![
                "WiFi".to_string(),
                "Parking".to_string(),
                "Aircon".to_string()
            ])
        );
    }

    #[test]
    fn test_amenities_unset_when_none_match() {
        assert_eq!(parse("cheap house").amenities, None);
    }

    #[test]
    fn test_overflowing_room_count_degrades_to_unset() {
        assert_eq!(parse("99999999999999 rooms").rooms, None);
    }

    #[test]
    fn test_empty_input() {
        let params = parse("");
        assert_eq!(params.query.as_deref(), Some(""));
        assert_eq!(params.rooms, None);
        assert_eq!(params.max_price, None);
        assert_eq!(params.location, None);
        assert_eq!(params.amenities, None);
    }
}
