//! Immutable name → image reference mapping searched by the finder.

mod source;

use std::collections::BTreeMap;

pub use source::{fetch_remote, load_catalog, CatalogError, CatalogSource, BUNDLED_CATALOG};

/// One catalog item. Identity is the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<'a> {
    pub name: &'a str,
    pub image_ref: &'a str,
}

/// The fixed set of entries for a session.
///
/// Keys are unique and iterate in ascending order regardless of where the
/// catalog was loaded from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: BTreeMap<String, String>,
}

impl Catalog {
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }

    /// Parse a JSON object of `{ "name": "imageRef", ... }`.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let entries: BTreeMap<String, String> = serde_json::from_str(text)?;
        Ok(Self::new(entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn image_ref(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn entries(&self) -> impl Iterator<Item = Entry<'_>> {
        self.entries.iter().map(|(name, image_ref)| Entry {
            name: name.as_str(),
            image_ref: image_ref.as_str(),
        })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Terminal representation of an image reference.
///
/// GitHub emoji URLs end in `<hex>[-<hex>...].png`; those decode to the emoji
/// itself. Anything else is returned unchanged.
pub fn display_glyph(image_ref: &str) -> String {
    decode_codepoints(image_ref).unwrap_or_else(|| image_ref.to_string())
}

fn decode_codepoints(image_ref: &str) -> Option<String> {
    let path = image_ref.split(['?', '#']).next()?;
    let file = path.rsplit('/').next()?;
    let stem = file.strip_suffix(".png")?;
    if stem.is_empty() {
        return None;
    }
    stem.split('-')
        .map(|hex| u32::from_str_radix(hex, 16).ok().and_then(char::from_u32))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_iterate_in_key_order() {
        let catalog: Catalog = [("dog", "d"), ("cat", "c"), ("cow", "w")]
            .into_iter()
            .collect();
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["cat", "cow", "dog"]);
    }

    #[test]
    fn from_json_rejects_non_object() {
        assert!(Catalog::from_json("[1, 2]").is_err());
        let catalog = Catalog::from_json(r#"{"cat": "cat.png"}"#).unwrap();
        assert_eq!(catalog.image_ref("cat"), Some("cat.png"));
    }

    #[test]
    fn glyph_decodes_github_urls() {
        let url = "https://github.githubassets.com/images/icons/emoji/unicode/1f431.png?v8";
        assert_eq!(display_glyph(url), "\u{1f431}");
        let flag = "https://github.githubassets.com/images/icons/emoji/unicode/1f1fa-1f1f8.png?v8";
        assert_eq!(display_glyph(flag), "\u{1f1fa}\u{1f1f8}");
    }

    #[test]
    fn glyph_keeps_other_references() {
        assert_eq!(display_glyph("cat.png"), "cat.png");
        assert_eq!(
            display_glyph("https://github.githubassets.com/images/icons/emoji/octocat.png?v8"),
            "https://github.githubassets.com/images/icons/emoji/octocat.png?v8"
        );
    }
}
