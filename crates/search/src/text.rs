//! Case and whitespace normalization helpers.

/// Case-insensitive equality after trimming both sides.
#[inline]
pub(crate) fn eq_ci(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

/// Case-insensitive substring check after trimming the needle.
#[inline]
pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.trim().to_lowercase())
}

/// Optional-field variant of [`contains_ci`]; `None` never contains anything.
#[inline]
pub(crate) fn opt_contains_ci(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|h| contains_ci(h, needle))
}

/// Optional-field variant of [`eq_ci`]; `None` never equals anything.
#[inline]
pub(crate) fn opt_eq_ci(value: Option<&str>, other: &str) -> bool {
    value.is_some_and(|v| eq_ci(v, other))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eq_ci_trims_and_folds_case() {
        assert!(eq_ci(" Talolong ", "TALOLONG"));
        assert!(!eq_ci("Talolong", "Rizal"));
    }

    #[test]
    fn test_contains_ci() {
        assert!(contains_ci("Purok 3, Talolong, Lopez", "talolong"));
        assert!(!contains_ci("Rizal", "talolong"));
    }

    #[test]
    fn test_optional_variants_reject_none() {
        assert!(!opt_contains_ci(None, "talolong"));
        assert!(!opt_eq_ci(None, "talolong"));
        assert!(opt_eq_ci(Some("TALOLONG"), "talolong"));
    }
}
