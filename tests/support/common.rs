#![cfg(unix)]
#![allow(dead_code)]

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Icon index fixture with two categories, mirroring the real document shape.
pub const SAMPLE_INDEX: &str = r#"<html>
  <body>
    <h1>Flat Color Icons</h1>
    <h2>Objects</h2>
    <p>
      <img src="alarm_clock.png" title="alarm_clock.png"/>
      <img src="sort_az.png" title="sort_az.png"/>
      <img src="folder.png" title="folder.png"/>
    </p>
    <h2>Mobile</h2>
    <p>
      <img src="iphone_photo.png" title="iphone_photo.png"/>
      <img src="sms_icon.png" title="sms_icon.png"/>
    </p>
  </body>
</html>
"#;

/// A throwaway Stickerbook checkout: sentinel `meson.build`, the icon index
/// under `data/`, and an empty `src/` for the generated file.
pub struct FakeCheckout {
    pub dir: TempDir,
}

impl FakeCheckout {
    pub fn with_index(index_html: &str) -> Result<Self> {
        let dir = TempDir::new().context("failed to allocate fake checkout")?;
        let root = dir.path();
        fs::write(root.join("meson.build"), "project('stickerbook')\n")?;
        let icons = root.join("data/icons/flat-color-icons");
        fs::create_dir_all(&icons)?;
        fs::write(icons.join("index.html"), index_html)?;
        fs::create_dir_all(root.join("src"))?;
        Ok(Self { dir })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn generated_path(&self) -> PathBuf {
        self.root().join("src/sticker_set.rs")
    }
}

/// Directory of stub desktop tools that record their arguments instead of
/// touching the system. Each stub appends its argv to
/// `$MARK_DIR/<tool>.args`.
pub struct StubTools {
    pub dir: TempDir,
    pub mark_dir: TempDir,
}

impl StubTools {
    pub fn install() -> Result<Self> {
        Self::install_with_exit_codes(&[
            ("glib-compile-schemas", 0),
            ("gtk-update-icon-cache", 0),
            ("update-mime-database", 0),
        ])
    }

    pub fn install_with_exit_codes(tools: &[(&str, i32)]) -> Result<Self> {
        let dir = TempDir::new().context("failed to allocate stub tool dir")?;
        let mark_dir = TempDir::new().context("failed to allocate marker dir")?;
        for (name, exit_code) in tools {
            let path = dir.path().join(name);
            fs::write(
                &path,
                format!("#!/bin/sh\necho \"$@\" >> \"$MARK_DIR/{name}.args\"\nexit {exit_code}\n"),
            )?;
            make_executable(&path)?;
        }
        Ok(Self { dir, mark_dir })
    }

    /// Recorded argv lines for a tool, empty when it never ran.
    pub fn recorded_args(&self, tool: &str) -> Vec<String> {
        let path = self.mark_dir.path().join(format!("{tool}.args"));
        match fs::read_to_string(path) {
            Ok(contents) => contents.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn command(&self, binary: &str) -> Command {
        let mut cmd = Command::new(binary);
        cmd.env("PATH", self.dir.path())
            .env("MARK_DIR", self.mark_dir.path());
        cmd
    }
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd.output().context("failed to spawn command")?;
    if !output.status.success() {
        anyhow::bail!(
            "command failed with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(output)
}

fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)?;
    Ok(())
}
