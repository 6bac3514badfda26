//! Heuristic classification of JSON objects as records or lookup tables

/// Leading character that marks a key as a dynamic identifier (e.g. `@107`).
pub const SENTINEL_CHAR: char = '@';

/// Longest key length still considered map-like by the heuristic.
const MAX_MAP_KEY_LEN: usize = 10;

/// How a JSON object should be compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectShape {
    /// Fixed-schema record, compared by exact key-set equality.
    Record,
    /// Dynamic lookup table, compared by sampling entry value shapes.
    Map,
}

/// Classify an object by sampling up to `sample` of its keys.
///
/// A key votes for `Map` when it starts with [`SENTINEL_CHAR`], contains no
/// lowercase character, or is at most 10 characters long. Ticker symbols
/// satisfy at least one of these, while spelled-out schema field names such as
/// `assetPositions` satisfy none. Every sampled key must vote for `Map`; a
/// single holdout makes the object a `Record`. JSON carries no ground truth
/// for this distinction, so misclassification is possible by construction.
///
/// Objects with fewer than `sample` keys have all of their keys inspected.
/// An empty key set classifies as `Map` vacuously.
pub fn classify_keys<'a, I>(keys: I, sample: usize) -> ObjectShape
where
    I: IntoIterator<Item = &'a str>,
{
    if keys.into_iter().take(sample).all(is_map_like_key) {
        ObjectShape::Map
    } else {
        ObjectShape::Record
    }
}

fn is_map_like_key(key: &str) -> bool {
    key.starts_with(SENTINEL_CHAR)
        || !key.chars().any(char::is_lowercase)
        || key.chars().count() <= MAX_MAP_KEY_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: usize = 10;

    #[test]
    fn test_ticker_keys_classify_as_map() {
        let keys = ["BTC", "ETH", "SOL", "DOGE"];
        assert_eq!(classify_keys(keys, SAMPLE), ObjectShape::Map);
    }

    #[test]
    fn test_sentinel_prefixed_keys_classify_as_map() {
        // Builder-deployed markets are keyed "@<index>".
        let keys = ["@107", "@142"];
        assert_eq!(classify_keys(keys, SAMPLE), ObjectShape::Map);
    }

    #[test]
    fn test_long_uppercase_key_still_map() {
        assert_eq!(classify_keys(["LONGTICKERSYMBOL"], SAMPLE), ObjectShape::Map);
    }

    #[test]
    fn test_short_lowercase_key_still_map() {
        // "coin" is lowercase but only 4 chars, so the length rule wins.
        assert_eq!(classify_keys(["coin"], SAMPLE), ObjectShape::Map);
    }

    #[test]
    fn test_schema_field_name_classifies_as_record() {
        let keys = ["BTC", "assetPositions"];
        assert_eq!(classify_keys(keys, SAMPLE), ObjectShape::Record);
    }

    #[test]
    fn test_only_first_sample_keys_are_inspected() {
        let mut keys: Vec<String> = (0..SAMPLE).map(|i| format!("K{i}")).collect();
        keys.push("marginSummaryTotals".to_string());

        // The holdout key sits past the sample window.
        let shape = classify_keys(keys.iter().map(String::as_str), SAMPLE);
        assert_eq!(shape, ObjectShape::Map);

        // Widening the window brings it into view.
        let shape = classify_keys(keys.iter().map(String::as_str), SAMPLE + 1);
        assert_eq!(shape, ObjectShape::Record);
    }

    #[test]
    fn test_fewer_keys_than_sample_inspects_all() {
        let keys = ["BTC", "withdrawablesPending"];
        assert_eq!(classify_keys(keys, SAMPLE), ObjectShape::Record);
    }

    #[test]
    fn test_empty_key_set_is_vacuously_map() {
        assert_eq!(classify_keys(std::iter::empty::<&str>(), SAMPLE), ObjectShape::Map);
    }
}
