//! URL mapping entity, the only record the service persists.

/// An original URL together with the alias it is published under.
///
/// Both fields are stored exactly as given; no trimming, case-folding or
/// scheme inference happens at the storage layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub url: String,
    pub alias: String,
}

impl UrlMapping {
    /// Creates a new mapping.
    pub fn new(url: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alias: alias.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_creation() {
        let mapping = UrlMapping::new("https://example.com", "ex");

        assert_eq!(mapping.url, "https://example.com");
        assert_eq!(mapping.alias, "ex");
    }

    #[test]
    fn test_mapping_keeps_input_verbatim() {
        let mapping = UrlMapping::new(" HTTPS://Example.com/Path ", "Ex");

        assert_eq!(mapping.url, " HTTPS://Example.com/Path ");
        assert_eq!(mapping.alias, "Ex");
    }
}
