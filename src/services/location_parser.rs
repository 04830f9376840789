//! Splitting raw user input into location queries.

use crate::models::LocationQuery;

/// Separator between locations in a single input string
pub const LOCATION_DELIMITER: char = ';';

/// Split `raw` on `;`, trim each part and drop the empty ones, keeping order
pub fn parse_locations(raw: &str) -> Vec<LocationQuery> {
    raw.split(LOCATION_DELIMITER)
        .filter_map(LocationQuery::new)
        .collect()
}

/// Parse every element of a `cities` list and concatenate the results
pub fn parse_location_list<S: AsRef<str>>(items: &[S]) -> Vec<LocationQuery> {
    items
        .iter()
        .flat_map(|item| parse_locations(item.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(queries: &[LocationQuery]) -> Vec<&str> {
        queries.iter().map(LocationQuery::as_str).collect()
    }

    #[test]
    fn test_parse_drops_blank_segments() {
        let queries = parse_locations("Boston,MA; ;London,UK;");
        assert_eq!(texts(&queries), vec!["Boston,MA", "London,UK"]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_locations("").is_empty());
        assert!(parse_locations("   ").is_empty());
        assert!(parse_locations(" ; ;; ").is_empty());
    }

    #[test]
    fn test_parse_is_repeatable() {
        let raw = "Paris ;Tokyo; Lima ";
        assert_eq!(parse_locations(raw), parse_locations(raw));
        assert_eq!(texts(&parse_locations(raw)), vec!["Paris", "Tokyo", "Lima"]);
    }

    #[test]
    fn test_parse_list_flattens_in_order() {
        let items = vec![
            "Boston, MA".to_string(),
            "  ".to_string(),
            "London, UK; Paris".to_string(),
        ];
        let queries = parse_location_list(&items);
        assert_eq!(texts(&queries), vec!["Boston, MA", "London, UK", "Paris"]);
    }
}
