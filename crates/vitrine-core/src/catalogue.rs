//! Catalogue domain types: products, categories and the loaded catalogue
//!
//! The catalogue is static content: it is read once at startup (from a TOML
//! file or the built-in default) and never mutated afterwards.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result, ResultExt};
use crate::media::MediaRef;
use tracing::debug;

/// Built-in catalogue used when no catalogue file is given
const DEFAULT_CATALOGUE: &str = include_str!("../assets/catalogue.toml");

// ─────────────────────────────────────────────────────────────────────────────
// Identifiers
// ─────────────────────────────────────────────────────────────────────────────

/// Unique identifier of a product
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Identifier of a category, including the two reserved values
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    /// Reserved id: show every product plus the placeholder slot
    pub const ALL: &'static str = "all";
    /// Reserved id: show only the placeholder slot
    pub const FUTURE: &'static str = "future";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn all() -> Self {
        Self::new(Self::ALL)
    }

    pub fn future() -> Self {
        Self::new(Self::FUTURE)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_all(&self) -> bool {
        self.0 == Self::ALL
    }

    pub fn is_future(&self) -> bool {
        self.0 == Self::FUTURE
    }

    /// Whether this id carries filtering meaning rather than matching a tag
    pub fn is_reserved(&self) -> bool {
        self.is_all() || self.is_future()
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Records
// ─────────────────────────────────────────────────────────────────────────────

/// Craft parameters recorded for a finished piece
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CraftParams {
    /// Ordered techniques; the first one is shown on the card
    #[serde(default)]
    pub techniques: Vec<String>,

    #[serde(default)]
    pub materials: Option<String>,

    #[serde(default)]
    pub size: Option<String>,
}

impl CraftParams {
    pub fn primary_technique(&self) -> Option<&str> {
        self.techniques.first().map(String::as_str)
    }
}

/// A catalogue item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    /// Archive code shown as a badge (e.g. `NO.001`)
    pub archive_id: String,

    /// Display title
    pub code_name: String,

    /// Secondary title line
    #[serde(default)]
    pub title: String,

    pub category: CategoryId,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Primary media reference
    pub media: MediaRef,

    #[serde(default)]
    pub craft: CraftParams,
}

impl Product {
    /// Tags shown on a card (at most two)
    pub fn card_tags(&self) -> &[String] {
        &self.tags[..self.tags.len().min(2)]
    }
}

/// A filter control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub label: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Catalogue
// ─────────────────────────────────────────────────────────────────────────────

/// Ordered products and categories, validated on load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalogue {
    #[serde(default)]
    pub categories: Vec<Category>,

    #[serde(default)]
    pub products: Vec<Product>,
}

impl Catalogue {
    /// Build and validate a catalogue from already-parsed records
    pub fn new(categories: Vec<Category>, products: Vec<Product>) -> Result<Self> {
        let catalogue = Self {
            categories,
            products,
        };
        catalogue.validate()?;
        Ok(catalogue)
    }

    /// Parse a catalogue from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let catalogue: Catalogue = toml::from_str(content)?;
        catalogue.validate()?;
        Ok(catalogue)
    }

    /// Load a catalogue file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::catalogue_not_found(path));
        }
        let content = std::fs::read_to_string(path)
            .context(format!("Reading catalogue {}", path.display()))?;
        let catalogue = Self::from_toml_str(&content)
            .context(format!("Parsing catalogue {}", path.display()))?;
        debug!(
            "Loaded catalogue from {:?}: {} categories, {} products",
            path,
            catalogue.categories.len(),
            catalogue.products.len()
        );
        Ok(catalogue)
    }

    /// The catalogue compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(DEFAULT_CATALOGUE)
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    pub fn has_category(&self, id: &CategoryId) -> bool {
        self.category(id).is_some()
    }

    /// Category selected at startup: `all` when declared, else the first one
    pub fn default_category(&self) -> Option<&CategoryId> {
        self.category(&CategoryId::all())
            .or_else(|| self.categories.first())
            .map(|c| &c.id)
    }

    fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(Error::catalogue_invalid("no categories declared"));
        }

        let mut category_ids = HashSet::new();
        for category in &self.categories {
            if !category_ids.insert(&category.id) {
                return Err(Error::catalogue_invalid(format!(
                    "duplicate category id '{}'",
                    category.id
                )));
            }
        }

        let mut product_ids = HashSet::new();
        for product in &self.products {
            if !product_ids.insert(&product.id) {
                return Err(Error::catalogue_invalid(format!(
                    "duplicate product id '{}'",
                    product.id
                )));
            }
            if product.category.is_reserved() || !category_ids.contains(&product.category) {
                return Err(Error::catalogue_invalid(format!(
                    "product '{}' has unknown category '{}'",
                    product.id, product.category
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaKind;
    use std::io::Write;

    const SMALL: &str = r#"
[[categories]]
id = "all"
label = "All"

[[categories]]
id = "shaker"
label = "Shakers"

[[products]]
id = "p1"
archive_id = "NO.001"
code_name = "Tidepool"
title = "Quicksand shaker"
category = "shaker"
tags = ["ocean", "glitter", "blue"]
media = "media/tidepool.mp4"

[products.craft]
techniques = ["oil pour", "resin seal"]
"#;

    #[test]
    fn test_parse_small_catalogue() {
        let catalogue = Catalogue::from_toml_str(SMALL).unwrap();
        assert_eq!(catalogue.categories.len(), 2);
        assert_eq!(catalogue.products.len(), 1);

        let product = catalogue.product(&ProductId::new("p1")).unwrap();
        assert_eq!(product.archive_id, "NO.001");
        assert_eq!(product.craft.primary_technique(), Some("oil pour"));
        assert_eq!(product.card_tags(), ["ocean", "glitter"]);
    }

    #[test]
    fn test_builtin_catalogue_is_valid() {
        let catalogue = Catalogue::builtin().unwrap();
        assert!(catalogue.has_category(&CategoryId::all()));
        assert!(catalogue.has_category(&CategoryId::future()));
        assert!(!catalogue.products.is_empty());
    }

    #[test]
    fn test_builtin_media_is_inline() {
        let catalogue = Catalogue::builtin().unwrap();
        assert!(catalogue.products.iter().all(|p| p.media.is_inline()));

        let tidepool = catalogue.product(&ProductId::new("tidepool")).unwrap();
        assert_eq!(tidepool.media.kind(), MediaKind::Motion);
        let starfall = catalogue.product(&ProductId::new("starfall")).unwrap();
        assert_eq!(starfall.media.kind(), MediaKind::Still);
    }

    #[test]
    fn test_default_category_prefers_all() {
        let catalogue = Catalogue::from_toml_str(SMALL).unwrap();
        assert_eq!(catalogue.default_category(), Some(&CategoryId::all()));

        let no_all = Catalogue::new(
            vec![Category {
                id: CategoryId::new("pins"),
                label: "Pins".into(),
            }],
            vec![],
        )
        .unwrap();
        assert_eq!(no_all.default_category(), Some(&CategoryId::new("pins")));
    }

    #[test]
    fn test_rejects_empty_categories() {
        let err = Catalogue::new(vec![], vec![]).unwrap_err();
        assert!(matches!(err, Error::CatalogueInvalid { .. }));
    }

    #[test]
    fn test_rejects_duplicate_product_ids() {
        let doubled = format!("{SMALL}\n{}", &SMALL[SMALL.find("[[products]]").unwrap()..]);
        let err = Catalogue::from_toml_str(&doubled).unwrap_err();
        assert!(err.to_string().contains("duplicate product id 'p1'"));
    }

    #[test]
    fn test_rejects_unknown_category() {
        let bad = SMALL.replace(r#"category = "shaker""#, r#"category = "badges""#);
        let err = Catalogue::from_toml_str(&bad).unwrap_err();
        assert!(err.to_string().contains("unknown category 'badges'"));
    }

    #[test]
    fn test_rejects_product_in_reserved_category() {
        let bad = SMALL.replace(r#"category = "shaker""#, r#"category = "all""#);
        assert!(Catalogue::from_toml_str(&bad).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SMALL.as_bytes()).unwrap();

        let catalogue = Catalogue::load(file.path()).unwrap();
        assert_eq!(catalogue.products[0].code_name, "Tidepool");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalogue::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, Error::CatalogueNotFound { .. }));
    }

    #[test]
    fn test_reserved_ids() {
        assert!(CategoryId::all().is_reserved());
        assert!(CategoryId::future().is_reserved());
        assert!(!CategoryId::new("shaker").is_reserved());
    }
}
