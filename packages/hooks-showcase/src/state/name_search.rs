/// The names the search widget filters.
pub const NAMES: [&str; 5] = ["Alice", "Bob", "Charlie", "David", "Emily"];

/// Returns the names in [`NAMES`] that contain `text`, ignoring case, in list order.
///
/// Empty text matches nothing rather than everything.
pub fn recommend(text: &str) -> Vec<&'static str> {
    if text.is_empty() {
        return Vec::new();
    }
    let needle = text.to_lowercase();
    NAMES
        .iter()
        .copied()
        .filter(|name| name.to_lowercase().contains(&needle))
        .collect()
}

/// Search text and the recommendations derived from it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameSearch {
    search_text: String,
    recommendations: Vec<&'static str>,
}

impl NameSearch {
    /// Replaces the search text and recomputes the recommendations.
    ///
    /// Recomputation happens on every call, even if the text did not change.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.recommendations = recommend(&self.search_text);
        tracing::debug!(
            search_text = %self.search_text,
            matches = self.recommendations.len(),
            "recommendations recomputed"
        );
    }

    /// Returns the search text.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Returns the current recommendations.
    pub fn recommendations(&self) -> &[&'static str] {
        &self.recommendations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommend() {
        assert!(recommend("").is_empty());
        assert_eq!(recommend("al"), ["Alice"]);
        assert_eq!(recommend("AL"), ["Alice"]);
        assert_eq!(recommend("li"), ["Alice", "Charlie"]);
        assert_eq!(recommend("i"), ["Alice", "Charlie", "David", "Emily"]);
        assert_eq!(recommend("e"), ["Alice", "Charlie", "Emily"]);
        assert!(recommend("zz").is_empty());
        assert_eq!(recommend(" "), Vec::<&str>::new());
    }

    #[test]
    fn test_recommend_matches_definition() {
        for text in ["a", "B", "li", "vid", "EMILY", "x", "ar"] {
            let expected: Vec<_> = NAMES
                .into_iter()
                .filter(|name| name.to_lowercase().contains(&text.to_lowercase()))
                .collect();
            assert_eq!(recommend(text), expected, "text: {text:?}");
            assert_eq!(recommend(text), recommend(text));
        }
    }

    #[test]
    fn test_name_search() {
        let mut search = NameSearch::default();
        assert!(search.recommendations().is_empty());

        search.set_search_text("al");
        assert_eq!(search.search_text(), "al");
        assert_eq!(search.recommendations(), ["Alice"]);

        search.set_search_text("al");
        assert_eq!(search.recommendations(), ["Alice"]);

        search.set_search_text("");
        assert!(search.recommendations().is_empty());
    }
}
