//! Installer module resolution
//!
//! The installer ships either next to this binary (installer-local layout)
//! or inside a full repository checkout (root layout). Contexts are tried in
//! order; the first one with a readable manifest and an installer program wins.
//!
//! ```text
//! installer-local: <anchor>/../package.json
//!                  <anchor>/../lib/installer
//! root:            <anchor>/../../../package.json
//!                  <anchor>/../../../tools/installer/lib/installer
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::infrastructure::traits::FileSystem;
use crate::infrastructure::{InfraError, InfraResult};

/// Where the installer module may live relative to the anchor directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionContext {
    InstallerLocal,
    Root,
}

impl ResolutionContext {
    /// Evaluation order.
    pub const ORDER: [ResolutionContext; 2] =
        [ResolutionContext::InstallerLocal, ResolutionContext::Root];

    fn package_dir(&self, anchor: &Path) -> PathBuf {
        match self {
            ResolutionContext::InstallerLocal => anchor.join(".."),
            ResolutionContext::Root => anchor.join("..").join("..").join(".."),
        }
    }

    pub fn manifest_path(&self, anchor: &Path) -> PathBuf {
        self.package_dir(anchor).join("package.json")
    }

    pub fn installer_path(&self, anchor: &Path) -> PathBuf {
        let base = self.package_dir(anchor);
        match self {
            ResolutionContext::InstallerLocal => base.join("lib").join("installer"),
            ResolutionContext::Root => base
                .join("tools")
                .join("installer")
                .join("lib")
                .join("installer"),
        }
    }
}

impl fmt::Display for ResolutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionContext::InstallerLocal => f.write_str("installer context"),
            ResolutionContext::Root => f.write_str("root context"),
        }
    }
}

/// A located installer: its program and the version from its manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallerModule {
    pub context: ResolutionContext,
    pub version: String,
    pub manifest: PathBuf,
    pub program: PathBuf,
}

#[derive(Debug, Deserialize)]
struct PackageManifest {
    version: Option<String>,
}

/// Resolves the installer module by trying each context in turn.
pub struct ModuleResolver {
    fs: Arc<dyn FileSystem>,
    anchor: PathBuf,
    contexts: Vec<ResolutionContext>,
}

impl ModuleResolver {
    /// Create a resolver trying the contexts in `ResolutionContext::ORDER`.
    pub fn new(fs: Arc<dyn FileSystem>, anchor: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            anchor: anchor.into(),
            contexts: ResolutionContext::ORDER.to_vec(),
        }
    }

    pub fn anchor(&self) -> &Path {
        &self.anchor
    }

    /// First context that resolves wins; otherwise every failure is reported.
    #[instrument(skip(self), fields(anchor = %self.anchor.display()))]
    pub fn resolve(&self) -> InfraResult<InstallerModule> {
        let mut attempts = Vec::with_capacity(self.contexts.len());

        for context in &self.contexts {
            match self.resolve_in(*context) {
                Ok(module) => {
                    debug!(
                        "resolve: {} -> {} (version {})",
                        context,
                        module.program.display(),
                        module.version
                    );
                    return Ok(module);
                }
                Err(reason) => {
                    debug!("resolve: {} not found ({}), trying next", context, reason);
                    attempts.push(format!("{context}: {reason}"));
                }
            }
        }

        Err(InfraError::Resolution { attempts })
    }

    fn resolve_in(&self, context: ResolutionContext) -> Result<InstallerModule, String> {
        let manifest = context.manifest_path(&self.anchor);
        let content = self
            .fs
            .read_to_string(&manifest)
            .map_err(|e| format!("cannot read {}: {}", manifest.display(), e))?;
        let parsed: PackageManifest = serde_json::from_str(&content)
            .map_err(|e| format!("cannot parse {}: {}", manifest.display(), e))?;
        let version = parsed
            .version
            .ok_or_else(|| format!("no version in {}", manifest.display()))?;

        let program = context.installer_path(&self.anchor);
        if !self.fs.is_file(&program) {
            return Err(format!("installer not found at {}", program.display()));
        }

        Ok(InstallerModule {
            context,
            version,
            manifest: self.tidy(manifest),
            program: self.tidy(program),
        })
    }

    /// Drop `..` segments for display when the path can be canonicalized.
    fn tidy(&self, path: PathBuf) -> PathBuf {
        self.fs.canonicalize(&path).unwrap_or(path)
    }
}

/// Directory holding the running executable.
pub fn executable_dir() -> std::io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("executable has no parent directory: {}", exe.display()),
        )
    })
}
