//! Generates the sticker catalog source from the flat-color-icons index.
//!
//! One-off generator with no arguments: it locates the Stickerbook checkout
//! (via `STICKERBOOK_ROOT` or an upward search), parses
//! `data/icons/flat-color-icons/index.html`, and overwrites
//! `src/sticker_set.rs` with the ordered catalog literal and its accessors.

use anyhow::Result;
use stickerbook_tools::catalog::load_icon_index;
use stickerbook_tools::emit::write_generated;
use stickerbook_tools::{find_app_root, generated_set_path, icon_index_path};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let root = find_app_root()?;
    let catalog = load_icon_index(&icon_index_path(&root))?;

    let sticker_count: usize = catalog
        .entries()
        .iter()
        .map(|category| category.icons.len())
        .sum();
    let output = generated_set_path(&root);
    write_generated(&catalog, &output)?;

    println!(
        "wrote {} categories ({sticker_count} stickers) to {}",
        catalog.entries().len(),
        output.display()
    );
    Ok(())
}
