//! Alternative spellings to try when a direct geocoding query finds nothing.

const US_STATE_ABBREVIATIONS: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY", "DC",
];

/// Common country names mapped to the ISO code the geocoder expects
const COUNTRY_SYNONYMS: [(&str, &str); 1] = [("UK", "GB")];

fn country_code_for(synonym: &str) -> Option<&'static str> {
    COUNTRY_SYNONYMS
        .iter()
        .find(|(alias, _)| *alias == synonym)
        .map(|(_, code)| *code)
}

fn is_us_state(abbreviation: &str) -> bool {
    US_STATE_ABBREVIATIONS.contains(&abbreviation)
}

/// Fallback queries for `query`, in the order they should be tried.
///
/// Only queries with at least two comma-separated parts get fallbacks:
/// a trailing country synonym is swapped for its ISO code (`London, UK` ->
/// `London,GB`), and a trailing US state abbreviation gets `, US` appended
/// (`Boston, MA` -> `Boston, MA, US`).
pub fn fallback_queries(query: &str) -> Vec<String> {
    let parts: Vec<&str> = query.split(',').map(str::trim).collect();
    let Some((last, leading)) = parts.split_last() else {
        return Vec::new();
    };
    if leading.is_empty() {
        return Vec::new();
    }

    let suffix = last.to_uppercase().replace('.', "");
    let mut fallbacks = Vec::new();

    if let Some(code) = country_code_for(&suffix) {
        fallbacks.push(format!("{},{code}", leading.join(",")));
    }

    if is_us_state(&suffix) {
        fallbacks.push(format!("{query}, US"));
    }

    fallbacks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_synonym() {
        assert_eq!(fallback_queries("London, UK"), vec!["London,GB"]);
        assert_eq!(fallback_queries("London, u.k."), vec!["London,GB"]);
    }

    #[test]
    fn test_us_state_abbreviation() {
        assert_eq!(fallback_queries("Boston, MA"), vec!["Boston, MA, US"]);
        assert_eq!(fallback_queries("Washington, d.c."), vec!["Washington, d.c., US"]);
    }

    #[test]
    fn test_no_fallback_for_single_part() {
        assert!(fallback_queries("UK").is_empty());
        assert!(fallback_queries("Boston").is_empty());
    }

    #[test]
    fn test_no_fallback_for_unknown_suffix() {
        assert!(fallback_queries("Paris, France").is_empty());
    }

    #[test]
    fn test_multi_part_prefix_is_kept() {
        assert_eq!(
            fallback_queries("Soho, London, UK"),
            vec!["Soho,London,GB"]
        );
    }
}
