//! Token-level encode/decode for correlation headers.
//!
//! The id and attribute extraction paths deliberately use different split
//! rules, preserved from the wire protocol's reference behavior: the id
//! path splits on every colon and takes the second segment (so
//! `corrid:a:b` yields `a`), while the attribute path splits once and
//! keeps the full remainder (so `attr:attr2:1` yields `attr2:1`). Do not
//! unify them.

/// Token label carrying the correlation id.
pub const CORRID_LABEL: &str = "corrid:";

/// Token label carrying one attribute value.
pub const ATTR_LABEL: &str = "attr:";

/// Delimiter joining tokens within one raw header value.
pub const TOKEN_DELIMITER: char = ',';

/// Split every raw value on the token delimiter, concatenating the results
/// into one flat token sequence in input order.
pub fn flatten<S: AsRef<str>>(raw_values: &[S]) -> Vec<String> {
    raw_values
        .iter()
        .flat_map(|value| value.as_ref().split(TOKEN_DELIMITER))
        .map(|token| token.to_string())
        .collect()
}

/// Extract the correlation id from the first `corrid:` token.
///
/// Later id tokens are ignored. Returns `None` when no token matches; the
/// caller decides whether an empty extracted id counts as absent.
pub fn extract_corr_id(tokens: &[String]) -> Option<String> {
    tokens
        .iter()
        .find(|token| token.starts_with(CORRID_LABEL))
        .and_then(|token| token.split(':').nth(1))
        .map(|id| id.to_string())
}

/// Extract every `attr:` token's value, in scan order.
///
/// The value is everything after the first colon; an empty remainder is
/// kept as the empty string. A matching token with no colon at all cannot
/// occur (the label itself carries one), but such a token would be dropped
/// rather than treated as an error.
pub fn extract_attrs(tokens: &[String]) -> Vec<String> {
    tokens
        .iter()
        .filter(|token| token.starts_with(ATTR_LABEL))
        .filter_map(|token| token.splitn(2, ':').nth(1))
        .map(|value| value.to_string())
        .collect()
}

/// Encode id + attributes as ordered header tokens: id always first, then
/// attributes in insertion order.
pub fn encode(corr_id: &str, attrs: &[String]) -> Vec<String> {
    let mut headers = Vec::with_capacity(1 + attrs.len());
    headers.push(format!("{}{}", CORRID_LABEL, corr_id));
    headers.extend(attrs.iter().map(|attr| format!("{}{}", ATTR_LABEL, attr)));
    headers
}

/// Join encoded tokens into a single outbound header value.
pub fn join(headers: &[String]) -> String {
    headers.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        flatten(raw)
    }

    #[test]
    fn test_flatten_preserves_order() {
        let flat = tokens(&["a,b", "c", "d,e"]);
        assert_eq!(flat, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_extract_corr_id_first_match_wins() {
        let flat = tokens(&["corrid:first,corrid:second"]);
        assert_eq!(extract_corr_id(&flat), Some("first".to_string()));
    }

    #[test]
    fn test_extract_corr_id_absent() {
        let flat = tokens(&["attr:a:1"]);
        assert_eq!(extract_corr_id(&flat), None);
    }

    #[test]
    fn test_extract_corr_id_splits_on_every_colon() {
        // The id path takes the segment between the first and second colon.
        let flat = tokens(&["corrid:a:b"]);
        assert_eq!(extract_corr_id(&flat), Some("a".to_string()));
    }

    #[test]
    fn test_extract_corr_id_empty_remainder() {
        let flat = tokens(&["corrid:"]);
        assert_eq!(extract_corr_id(&flat), Some(String::new()));
    }

    #[test]
    fn test_extract_attrs_keeps_full_remainder() {
        let flat = tokens(&["attr:attr1=2", "attr:attr2:1", "attr:attr3"]);
        assert_eq!(extract_attrs(&flat), vec!["attr1=2", "attr2:1", "attr3"]);
    }

    #[test]
    fn test_extract_attrs_empty_value_kept() {
        let flat = tokens(&["attr:"]);
        assert_eq!(extract_attrs(&flat), vec![""]);
    }

    #[test]
    fn test_extract_attrs_ignores_unlabeled_tokens() {
        let flat = tokens(&["attr", "corrid:x", "other:1", "attr:kept:1"]);
        assert_eq!(extract_attrs(&flat), vec!["kept:1"]);
    }

    #[test]
    fn test_encode_order() {
        let attrs = vec!["a:1".to_string(), "b:2".to_string()];
        assert_eq!(
            encode("cid", &attrs),
            vec!["corrid:cid", "attr:a:1", "attr:b:2"]
        );
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let attrs = vec!["a:1".to_string(), "a:1".to_string(), "b=2".to_string()];
        let encoded = encode("cid1", &attrs);

        let flat = flatten(&[join(&encoded)]);
        assert_eq!(extract_corr_id(&flat), Some("cid1".to_string()));
        assert_eq!(extract_attrs(&flat), attrs);
    }

    #[test]
    fn test_join_uses_token_delimiter() {
        let headers = vec!["corrid:cid".to_string(), "attr:a:1".to_string()];
        assert_eq!(join(&headers), "corrid:cid,attr:a:1");
    }
}
