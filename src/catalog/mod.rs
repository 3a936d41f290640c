//! Sticker catalog wiring.
//!
//! This module owns the in-memory catalog built from the flat-color-icons
//! index (`data/icons/flat-color-icons/index.html`): parsing lives in
//! [`index`], display-title derivation in [`title`]. The catalog is immutable
//! once built; its accessors mirror the ones the emitter writes into the
//! generated application source.

pub mod index;
pub mod title;

pub use index::{load_icon_index, parse_icon_index};
pub use title::display_title;

/// One sticker: the resource id referencing the icon asset plus the derived
/// human-readable tooltip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StickerInfo {
    pub resource: String,
    pub tooltip: String,
}

/// A named category and its stickers, in document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub icons: Vec<StickerInfo>,
}

/// Ordered sticker catalog. Categories keep the order of their headings in
/// the index document; stickers keep the order of their images.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StickerCatalog {
    categories: Vec<Category>,
}

impl StickerCatalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Category names in document order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|category| category.name.as_str())
    }

    /// Stickers for a category, or an empty slice when the category is
    /// unknown.
    pub fn category_icons(&self, name: &str) -> &[StickerInfo] {
        self.categories
            .iter()
            .find(|category| category.name == name)
            .map(|category| category.icons.as_slice())
            .unwrap_or(&[])
    }

    /// Tooltip for a resource id, scanning every category in order.
    ///
    /// Returns an empty string instead of erroring; callers treat an unknown
    /// resource as having no tooltip.
    pub fn icon_tooltip(&self, resource: &str) -> &str {
        for category in &self.categories {
            for icon in &category.icons {
                if icon.resource == resource {
                    return &icon.tooltip;
                }
            }
        }
        ""
    }

    /// Access the ordered categories (used by the emitter).
    pub fn entries(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
