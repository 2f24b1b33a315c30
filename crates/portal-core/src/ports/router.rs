use std::fmt;

/// Path plus query string of the current page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub path: String,
    /// Encoded query without the leading `?`.
    pub query: String,
}

impl Location {
    pub fn new(path: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: query.into(),
        }
    }

    /// Split a relative URL such as `/projects?term=Fall#top`. The fragment is dropped.
    pub fn parse(url: &str) -> Self {
        let url = url.split('#').next().unwrap_or_default();
        match url.split_once('?') {
            Some((path, query)) => Self::new(path, query),
            None => Self::new(url, ""),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.query.is_empty() {
            f.write_str(&self.path)
        } else {
            write!(f, "{}?{}", self.path, self.query)
        }
    }
}

/// Browser history as seen by the browsing pages.
pub trait RouterPort: Send + Sync {
    fn location(&self) -> Location;

    /// Replace the current history entry; never adds one.
    fn replace(&self, location: Location);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_path_and_query() {
        let location = Location::parse("/projects?term=Fall&year=2021#list");
        assert_eq!(location.path, "/projects");
        assert_eq!(location.query, "term=Fall&year=2021");
        assert_eq!(location.to_string(), "/projects?term=Fall&year=2021");
    }

    #[test]
    fn test_display_omits_empty_query() {
        assert_eq!(Location::parse("/clients").to_string(), "/clients");
        assert_eq!(Location::parse("/clients?").to_string(), "/clients");
    }
}
