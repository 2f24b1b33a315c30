/// Lowercased words of a free-text search.
///
/// Matching is AND over words and OR over fields: every word has to occur
/// somewhere, but different words may occur in different fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchWords(Vec<String>);

impl SearchWords {
    pub fn parse(search: &str) -> Self {
        Self(search.split_whitespace().map(str::to_lowercase).collect())
    }

    /// No words: the search filter is a no-op.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.0
    }

    /// Every word is a substring of `haystack`, which must already be lowercase.
    pub fn all_found_in(&self, haystack: &str) -> bool {
        self.0.iter().all(|word| haystack.contains(word.as_str()))
    }

    /// Every word is a substring of at least one of the lowercase `fields`.
    pub fn each_found_in_any(&self, fields: &[String]) -> bool {
        self.0
            .iter()
            .all(|word| fields.iter().any(|field| field.contains(word.as_str())))
    }
}
