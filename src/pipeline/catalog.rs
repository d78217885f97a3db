//! Placeholder catalog resolver.

use async_trait::async_trait;

use super::{CatalogResolver, PipelineResult, SuggestionItem};

/// Fallback identifier used when digit extraction yields nothing.
pub const DEFAULT_TIC_ID: &str = "268125229";

/// Deterministic stand-in for a real catalog search.
///
/// Derives suggestions from the query text alone: queries containing
/// digits become TIC-style identifiers (a base item plus two
/// near-variants), digit-free queries become a single title-cased item.
/// Empty queries yield an empty list rather than an error.
// TODO: replace with a real catalog query (MAST/astroquery-equivalent)
// ranked by match confidence; the (query, domain) -> ranked items
// contract must not change.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicCatalog;

#[async_trait]
impl CatalogResolver for HeuristicCatalog {
    async fn suggest(&self, query: &str, _domain: &str) -> PipelineResult<Vec<SuggestionItem>> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Ok(Vec::new());
        }

        if trimmed.chars().any(|c| c.is_ascii_digit()) {
            let digits: String = trimmed
                .chars()
                .filter(char::is_ascii_digit)
                .take(9)
                .collect();
            let base = if digits.is_empty() {
                DEFAULT_TIC_ID
            } else {
                digits.as_str()
            };
            Ok(vec![
                tic_item(base, ""),
                tic_item(base, "1"),
                tic_item(base, "2"),
            ])
        } else {
            let label = format!("{}-1", title_case(trimmed));
            Ok(vec![SuggestionItem {
                id: label.clone(),
                label,
            }])
        }
    }
}

fn tic_item(base: &str, suffix: &str) -> SuggestionItem {
    let id = format!("TIC {base}{suffix}");
    SuggestionItem {
        label: id.clone(),
        id,
    }
}

/// Uppercase the first letter of each word and lowercase the rest,
/// preserving the original separators. Any non-alphabetic character
/// starts a new word.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            at_word_start = true;
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn numeric_query_yields_three_variants() {
        let items = HeuristicCatalog.suggest("TIC 268125229", "TESS").await.unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].id, "TIC 268125229");
        assert_eq!(items[1].id, "TIC 2681252291");
        assert_eq!(items[2].id, "TIC 2681252292");
        for item in &items {
            assert_eq!(item.id, item.label);
        }
    }

    #[tokio::test]
    async fn digits_are_truncated_to_nine() {
        let items = HeuristicCatalog.suggest("12345678901234", "TESS").await.unwrap();
        assert_eq!(items[0].id, "TIC 123456789");
    }

    #[tokio::test]
    async fn digits_keep_original_order_across_separators() {
        let items = HeuristicCatalog.suggest("ab1cd2ef3", "TESS").await.unwrap();
        assert_eq!(items[0].id, "TIC 123");
    }

    #[tokio::test]
    async fn text_query_yields_single_titlecased_item() {
        let items = HeuristicCatalog.suggest("pi mensae", "TESS").await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label, "Pi Mensae-1");
        assert_eq!(items[0].id, items[0].label);
    }

    #[tokio::test]
    async fn empty_and_whitespace_queries_yield_nothing() {
        assert!(HeuristicCatalog.suggest("", "TESS").await.unwrap().is_empty());
        assert!(HeuristicCatalog.suggest("   ", "TESS").await.unwrap().is_empty());
    }

    #[test]
    fn title_case_handles_mixed_case_words() {
        assert_eq!(title_case("proxima CENTAURI b"), "Proxima Centauri B");
        assert_eq!(title_case("kepler"), "Kepler");
    }
}
