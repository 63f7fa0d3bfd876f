//! Types shared by catalog providers and their consumers.

use serde::{Deserialize, Serialize};

/// A movie (or other title) as returned by the catalog provider.
///
/// Identity is `id`; every other field may change between fetches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Provider identifier (an IMDb id for OMDb).
    pub id: String,
    /// Display title.
    pub title: String,
    /// Release year as reported upstream ("1999", "2010–2014", ...).
    pub year: String,
    /// Poster image URL ("N/A" when OMDb has none).
    pub poster_url: String,
    /// Title kind ("movie", "series", "episode").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// One upstream page of a title search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderPage {
    /// Matches on this upstream page, in provider order.
    pub matches: Vec<CatalogItem>,
    /// Total matches the provider reports for the whole query.
    pub total_matches: u64,
    /// Provider signalled "no matches" instead of returning results.
    pub not_found: bool,
}

impl ProviderPage {
    /// A page signalling that the query matched nothing.
    pub fn not_found() -> Self {
        Self {
            matches: Vec::new(),
            total_matches: 0,
            not_found: true,
        }
    }

    /// Number of matches the page accounts for (0 when `not_found`).
    pub fn reported_total(&self) -> u64 {
        if self.not_found {
            0
        } else {
            self.total_matches
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_item_json_names() {
        let item = CatalogItem {
            id: "tt0133093".to_string(),
            title: "The Matrix".to_string(),
            year: "1999".to_string(),
            poster_url: "https://example.com/matrix.jpg".to_string(),
            kind: None,
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], "tt0133093");
        assert_eq!(json["posterUrl"], "https://example.com/matrix.jpg");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_catalog_item_kind_optional_on_input() {
        let item: CatalogItem = serde_json::from_str(
            r#"{"id":"tt1","title":"A","year":"2001","posterUrl":"N/A","kind":"movie"}"#,
        )
        .unwrap();
        assert_eq!(item.kind.as_deref(), Some("movie"));

        let item: CatalogItem =
            serde_json::from_str(r#"{"id":"tt2","title":"B","year":"2002","posterUrl":"N/A"}"#)
                .unwrap();
        assert!(item.kind.is_none());
    }

    #[test]
    fn test_not_found_page_reports_zero() {
        let page = ProviderPage {
            matches: vec![],
            total_matches: 12,
            not_found: true,
        };
        assert_eq!(page.reported_total(), 0);
        assert_eq!(ProviderPage::not_found().reported_total(), 0);
    }
}
