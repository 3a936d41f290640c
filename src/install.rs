//! Post-install system integration.
//!
//! After `meson install` stages files into their final locations, the
//! desktop environment needs its caches refreshed: compiled GSettings
//! schemas, the icon theme cache, and the shared mime database. This module
//! separates planning from execution so the gating rules stay testable:
//! `integration_plan` is pure and returns the exact tool invocations,
//! `run_integration` performs them synchronously without shell
//! interpretation. A `DESTDIR` install is staged to an alternate root, so the
//! plan is empty and the final packaging step handles integration instead.

use anyhow::{Context, Result, bail};
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

pub const SCHEMA_COMPILER: &str = "glib-compile-schemas";
pub const ICON_CACHE_UPDATER: &str = "gtk-update-icon-cache";
pub const MIME_DATABASE_UPDATER: &str = "update-mime-database";

pub const DEFAULT_ICON_THEME: &str = "hicolor";

/// Install-time environment, read once per invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InstallEnv {
    /// Set when `DESTDIR` is present and non-empty: the install is staged to
    /// an alternate root and system integration must be skipped.
    pub staged: bool,
    /// Value of `MESON_INSTALL_PREFIX`, the base for every target directory.
    pub prefix: Option<PathBuf>,
}

impl InstallEnv {
    pub fn from_env() -> Self {
        let staged = env::var_os("DESTDIR")
            .map(|value| !value.is_empty())
            .unwrap_or(false);
        let prefix = env::var_os("MESON_INSTALL_PREFIX").map(PathBuf::from);
        Self { staged, prefix }
    }

    fn prefix(&self) -> Result<&Path> {
        self.prefix
            .as_deref()
            .context("MESON_INSTALL_PREFIX is not set; run this hook from the meson install step")
    }
}

/// Which integration points a particular build needs. The original hook
/// shipped as near-duplicate variants differing only in this selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IntegrationSteps {
    pub schemas: bool,
    pub icon_cache: bool,
    pub force_icon_cache: bool,
    pub mime_database: bool,
}

impl IntegrationSteps {
    /// The most common variant: compile schemas and refresh the icon cache.
    pub fn default_variant() -> Self {
        Self {
            schemas: true,
            icon_cache: true,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.schemas || self.icon_cache || self.mime_database)
    }
}

/// One planned external tool call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolInvocation {
    pub program: &'static str,
    pub args: Vec<OsString>,
    pub announcement: &'static str,
}

/// Compute the ordered tool invocations for this install.
///
/// Returns an empty plan for staged installs; `MESON_INSTALL_PREFIX` is only
/// required when integration actually runs.
pub fn integration_plan(
    install: &InstallEnv,
    steps: IntegrationSteps,
    icon_theme: &str,
) -> Result<Vec<ToolInvocation>> {
    if install.staged {
        return Ok(Vec::new());
    }

    let prefix = install.prefix()?;
    let mut plan = Vec::new();

    if steps.schemas {
        plan.push(ToolInvocation {
            program: SCHEMA_COMPILER,
            args: vec![prefix.join("share/glib-2.0/schemas").into_os_string()],
            announcement: "Compiling GSettings schemas...",
        });
    }

    if steps.icon_cache {
        let mut args = Vec::new();
        if steps.force_icon_cache {
            args.push(OsString::from("-f"));
        }
        args.push(prefix.join("share/icons").join(icon_theme).into_os_string());
        plan.push(ToolInvocation {
            program: ICON_CACHE_UPDATER,
            args,
            announcement: "Updating icon cache...",
        });
    }

    if steps.mime_database {
        plan.push(ToolInvocation {
            program: MIME_DATABASE_UPDATER,
            args: vec![prefix.join("share/mime").into_os_string()],
            announcement: "Updating mime database...",
        });
    }

    Ok(plan)
}

/// Run every planned invocation, collecting failures instead of stopping at
/// the first one. A tool that exits non-zero or cannot be started fails the
/// hook after the remaining steps have run.
pub fn run_integration(plan: &[ToolInvocation]) -> Result<()> {
    let mut failures: Vec<String> = Vec::new();

    for invocation in plan {
        println!("{}", invocation.announcement);
        match Command::new(invocation.program)
            .args(&invocation.args)
            .status()
        {
            Ok(status) if status.success() => {}
            Ok(status) => failures.push(format!("{} exited with {status}", invocation.program)),
            Err(err) => failures.push(format!(
                "{} could not be started: {err}",
                invocation.program
            )),
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        bail!(
            "{} integration step(s) failed:\n{}",
            failures.len(),
            failures.join("\n")
        )
    }
}
