//! Parser for the flat-color-icons index document.
//!
//! The index is a small, well-formed XHTML file: each `<h2>` heading names a
//! category and the `<p>` that follows it holds one `<img>` per sticker, with
//! the icon file name in the image's `title` attribute. Headings and
//! paragraphs are paired positionally, so the parser is intentionally strict
//! about mismatched counts instead of letting tooltips drift into the wrong
//! category.

use crate::catalog::title::display_title;
use crate::catalog::{Category, StickerCatalog, StickerInfo};
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

/// Read and parse the icon index at `path`.
pub fn load_icon_index(path: &Path) -> Result<StickerCatalog> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading icon index {}", path.display()))?;
    parse_icon_index(&text).with_context(|| format!("parsing icon index {}", path.display()))
}

/// Parse the icon index document into a catalog.
///
/// Walks `<h2>` and `<p>` elements in document order and pairs the Ith
/// paragraph with the Ith heading. A heading/paragraph count mismatch is a
/// hard error.
pub fn parse_icon_index(text: &str) -> Result<StickerCatalog> {
    let document = roxmltree::Document::parse(text).context("icon index is not well-formed")?;
    let root = document.root_element();

    let mut names = Vec::new();
    for heading in root.descendants().filter(|n| n.has_tag_name("h2")) {
        let name = heading.text().map(str::trim).unwrap_or_default();
        if name.is_empty() {
            bail!("heading {} has no category name", names.len() + 1);
        }
        names.push(name.to_string());
    }

    let paragraphs: Vec<_> = root.descendants().filter(|n| n.has_tag_name("p")).collect();
    if names.len() != paragraphs.len() {
        bail!(
            "icon index has {} category headings but {} icon paragraphs; \
             the positional pairing would misalign tooltips",
            names.len(),
            paragraphs.len()
        );
    }

    let mut categories = Vec::with_capacity(names.len());
    for (name, paragraph) in names.into_iter().zip(paragraphs) {
        let mut icons = Vec::new();
        for image in paragraph.descendants().filter(|n| n.has_tag_name("img")) {
            let file_name = image.attribute("title").with_context(|| {
                format!(
                    "image {} in category '{name}' has no title attribute",
                    icons.len() + 1
                )
            })?;
            let resource = file_name.split('.').next().unwrap_or(file_name);
            if resource.is_empty() {
                bail!("image title '{file_name}' in category '{name}' has an empty file stem");
            }
            icons.push(StickerInfo {
                resource: resource.to_string(),
                tooltip: display_title(resource),
            });
        }
        categories.push(Category { name, icons });
    }

    Ok(StickerCatalog::new(categories))
}
