//! Build-support library for the Stickerbook application.
//!
//! Two unrelated pieces of packaging glue share this crate: the sticker
//! catalog generator (`gen-sticker-set`) and the post-install integration
//! hook (`post-install`). Both binaries locate the application checkout the
//! same way, so root discovery and the fixed in-tree paths live here.

use anyhow::{Result, bail};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

pub mod catalog;
pub mod emit;
pub mod install;

pub use catalog::{Category, StickerCatalog, StickerInfo};

const ROOT_SENTINEL: &str = "meson.build";
const DATA_DIR: &str = "data";

/// Relative path of the icon index consumed by the generator.
pub const ICON_INDEX_PATH: &str = "data/icons/flat-color-icons/index.html";

/// Relative path of the source file the generator overwrites.
pub const GENERATED_SET_PATH: &str = "src/sticker_set.rs";

fn is_app_root(candidate: &Path) -> bool {
    candidate.join(ROOT_SENTINEL).is_file() && candidate.join(DATA_DIR).is_dir()
}

fn app_root_from_hint(hint: &str) -> Option<PathBuf> {
    if hint.is_empty() {
        return None;
    }
    let hint_path = PathBuf::from(hint);
    if !hint_path.exists() || !is_app_root(&hint_path) {
        return None;
    }
    fs::canonicalize(hint_path).ok()
}

fn search_upwards(start: &Path) -> Option<PathBuf> {
    let mut dir = fs::canonicalize(start).ok()?;
    loop {
        if is_app_root(&dir) {
            return Some(dir);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Locate the Stickerbook checkout the tools should operate on.
///
/// Resolution order: the `STICKERBOOK_ROOT` environment variable, an upward
/// search from the current directory, an upward search from the executable,
/// then the build-time `STICKERBOOK_ROOT_HINT` embedded by `build.rs`.
pub fn find_app_root() -> Result<PathBuf> {
    if let Ok(env_root) = env::var("STICKERBOOK_ROOT") {
        if let Some(root) = app_root_from_hint(&env_root) {
            return Ok(root);
        }
    }

    if let Ok(cwd) = env::current_dir() {
        if let Some(root) = search_upwards(&cwd) {
            return Ok(root);
        }
    }

    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            if let Some(root) = search_upwards(exe_dir) {
                return Ok(root);
            }
        }
    }

    if let Some(hint) = option_env!("STICKERBOOK_ROOT_HINT") {
        if let Some(root) = app_root_from_hint(hint) {
            return Ok(root);
        }
    }

    bail!(
        "Unable to locate the Stickerbook checkout. Set STICKERBOOK_ROOT to the cloned repository."
    );
}

/// Absolute path of the icon index under `root`.
pub fn icon_index_path(root: &Path) -> PathBuf {
    root.join(ICON_INDEX_PATH)
}

/// Absolute path of the generated catalog source under `root`.
pub fn generated_set_path(root: &Path) -> PathBuf {
    root.join(GENERATED_SET_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn root_hint_requires_sentinel_files() {
        let temp = TempCheckout::new();
        assert!(app_root_from_hint(&temp.root.display().to_string()).is_none());

        fs::write(temp.root.join("meson.build"), "project('stickerbook')\n").unwrap();
        fs::create_dir_all(temp.root.join("data")).unwrap();
        let resolved = app_root_from_hint(&temp.root.display().to_string()).unwrap();
        assert_eq!(resolved, fs::canonicalize(&temp.root).unwrap());
    }

    #[test]
    fn search_upwards_finds_enclosing_checkout() {
        let temp = TempCheckout::new();
        fs::write(temp.root.join("meson.build"), "project('stickerbook')\n").unwrap();
        let nested = temp.root.join("data/icons/flat-color-icons");
        fs::create_dir_all(&nested).unwrap();

        let resolved = search_upwards(&nested).unwrap();
        assert_eq!(resolved, fs::canonicalize(&temp.root).unwrap());
    }

    #[test]
    fn fixed_paths_join_under_root() {
        let root = Path::new("/opt/stickerbook");
        assert_eq!(
            icon_index_path(root),
            Path::new("/opt/stickerbook/data/icons/flat-color-icons/index.html")
        );
        assert_eq!(
            generated_set_path(root),
            Path::new("/opt/stickerbook/src/sticker_set.rs")
        );
    }

    struct TempCheckout {
        root: PathBuf,
    }

    impl TempCheckout {
        fn new() -> Self {
            static COUNTER: AtomicUsize = AtomicUsize::new(0);
            let mut dir = env::temp_dir();
            dir.push(format!(
                "stickerbook-root-test-{}-{}",
                std::process::id(),
                COUNTER.fetch_add(1, Ordering::SeqCst)
            ));
            fs::create_dir_all(&dir).unwrap();
            Self { root: dir }
        }
    }

    impl Drop for TempCheckout {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.root);
        }
    }
}
