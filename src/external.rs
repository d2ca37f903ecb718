//! External Collaborators - Path Optimizer and Font Compiler
//!
//! Both services are consumed as black boxes behind traits. The stand-ins
//! here keep the pipeline runnable (and testable) without the real services
//! wired in, mirroring how exports were stubbed before the renderer landed.

use async_trait::async_trait;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::registry::IconRegistry;

#[derive(Debug, Error)]
#[error("Optimizer failed for {path}: {message}")]
pub struct OptimizeError {
    pub path: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct OptimizeRequest {
    /// Source path, for diagnostics only.
    pub path: String,
    /// Plugin pipeline, built-in defaults first.
    pub plugins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Optimized {
    /// Optimized vector text. The extractor depends on this containing
    /// literal `d="..."` attribute occurrences.
    pub data: String,
}

/// The built-in plugin pipeline. Caller plugins are appended after these so
/// callers can extend but never silently override required normalization.
pub fn default_plugins() -> Vec<String> {
    vec!["flattenTransforms".to_string(), "mergePaths".to_string()]
}

#[async_trait]
pub trait PathOptimizer: Send + Sync {
    async fn optimize(
        &self,
        source: &str,
        request: &OptimizeRequest,
    ) -> Result<Optimized, OptimizeError>;
}

/// Stand-in optimizer: returns the source text unchanged.
pub struct PassthroughOptimizer;

#[async_trait]
impl PathOptimizer for PassthroughOptimizer {
    async fn optimize(
        &self,
        source: &str,
        _request: &OptimizeRequest,
    ) -> Result<Optimized, OptimizeError> {
        Ok(Optimized {
            data: source.to_string(),
        })
    }
}

#[derive(Debug, Error)]
pub enum FontCompileError {
    #[error("Font compilation failed: {0}")]
    Failed(String),

    #[error("Font file I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Compiles the registry's geometry and code points into a binary font file
/// at `dest`. The pipeline never inspects the produced bytes; it only copies
/// the file into the mobile bundle's fonts subtree.
pub trait FontCompiler: Send + Sync {
    fn compile(&self, registry: &IconRegistry, dest: &Path) -> Result<PathBuf, FontCompileError>;
}

/// Stand-in compiler: writes a deterministic placeholder listing the glyph
/// assignments, so bundling stays exercisable end to end.
pub struct StubFontCompiler;

impl FontCompiler for StubFontCompiler {
    fn compile(&self, registry: &IconRegistry, dest: &Path) -> Result<PathBuf, FontCompileError> {
        let mut payload = String::new();
        for entry in registry.entries() {
            payload.push_str(&format!("{}={:04X}\n", entry.name, entry.code_point));
        }
        fs::write(dest, payload)?;
        Ok(dest.to_path_buf())
    }
}
