//! Emits the generated sticker catalog source.
//!
//! The generator writes a complete Rust module the application compiles in:
//! one ordered `static` literal of `(category, stickers)` pairs plus the
//! accessor functions the picker uses. Category names and tooltips pass
//! through `gettext` at the access points so translators see every string.

use crate::catalog::StickerCatalog;
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const HEADER: &str = "\
// This is a generated file. Do not edit.
//
// Regenerate with `gen-sticker-set` after changing the icon index.

use gettextrs::gettext;

#[derive(Clone, Copy, Debug)]
pub struct StickerInfo {
    pub resource: &'static str,
    tooltip: &'static str,
}

impl StickerInfo {
    /// Localized tooltip for this sticker.
    pub fn tooltip(&self) -> String {
        gettext(self.tooltip)
    }
}

";

const ACCESSORS: &str = "\
/// Category names in document order, localized.
pub fn categories() -> Vec<String> {
    STICKER_SET.iter().map(|(name, _)| gettext(*name)).collect()
}

/// Stickers for a category, or an empty slice when the category is unknown.
pub fn category_icons(category: &str) -> &'static [StickerInfo] {
    STICKER_SET
        .iter()
        .find(|(name, _)| gettext(*name) == category)
        .map(|(_, icons)| *icons)
        .unwrap_or(&[])
}

/// Tooltip for a resource id, or an empty string when no sticker matches.
pub fn icon_tooltip(resource: &str) -> String {
    for (_, icons) in STICKER_SET {
        for icon in *icons {
            if icon.resource == resource {
                return gettext(icon.tooltip);
            }
        }
    }
    String::new()
}
";

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Render the full generated module as a string.
pub fn render_module(catalog: &StickerCatalog) -> String {
    let mut out = String::from(HEADER);

    out.push_str("static STICKER_SET: &[(&str, &[StickerInfo])] = &[\n");
    for category in catalog.entries() {
        // String::write_fmt on a String cannot fail.
        let _ = writeln!(out, "    (\n        \"{}\",\n        &[", escape(&category.name));
        for icon in &category.icons {
            let _ = writeln!(
                out,
                "            StickerInfo {{ resource: \"{}\", tooltip: \"{}\" }},",
                escape(&icon.resource),
                escape(&icon.tooltip)
            );
        }
        out.push_str("        ],\n    ),\n");
    }
    out.push_str("];\n\n");

    out.push_str(ACCESSORS);
    out
}

/// Render the catalog and overwrite `path` with it.
pub fn write_generated(catalog: &StickerCatalog, path: &Path) -> Result<()> {
    fs::write(path, render_module(catalog))
        .with_context(|| format!("writing generated catalog to {}", path.display()))
}
