//! Build Pipeline - Single Entry Point
//!
//! CRITICAL: the registry is assembled exactly once per run, before any
//! artifact is written, and every emitter reads the same immutable snapshot.
//! A failed assembly emits nothing; a failed write does not roll back other
//! targets (each target's write is idempotent and rerunning overwrites
//! cleanly).

use serde::Serialize;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::{BuildConfig, ConfigError};
use crate::emit::{
    data::{CssEmitter, JsonEmitter},
    flutter::{font_asset_path, FlutterEmitter},
    react::ReactEmitter,
    react_native::ReactNativeEmitter,
    EmitError, EmittedFile, Emitter,
};
use crate::external::{
    FontCompileError, FontCompiler, PassthroughOptimizer, PathOptimizer, StubFontCompiler,
};
use crate::hashing::compute_registry_hash;
use crate::registry::{assemble, AssemblyError, IconRegistry};
use crate::source::{enumerate, SourceError};
use crate::ENGINE_VERSION;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Assembly(#[from] AssemblyError),

    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error(transparent)]
    FontCompile(#[from] FontCompileError),

    #[error("Cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Summary of one completed run; also serialized as the build manifest.
/// No timestamps or random ids: two runs over the same inputs must produce
/// identical manifests.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildReport {
    pub engine_version: String,
    pub font_name: String,
    pub base_code_point: u32,
    pub icon_count: usize,
    pub registry_hash: String,
    /// Artifact paths relative to the output directory, sorted.
    pub artifacts: Vec<PathBuf>,
}

/// The build pipeline - single entry point for a full registry run.
pub struct BuildPipeline {
    config: BuildConfig,
    optimizer: Arc<dyn PathOptimizer>,
    font_compiler: Arc<dyn FontCompiler>,
}

impl BuildPipeline {
    pub fn new(
        config: BuildConfig,
        optimizer: Arc<dyn PathOptimizer>,
        font_compiler: Arc<dyn FontCompiler>,
    ) -> Self {
        Self {
            config,
            optimizer,
            font_compiler,
        }
    }

    /// Pipeline wired with the stand-in collaborators.
    pub fn with_defaults(config: BuildConfig) -> Self {
        Self::new(
            config,
            Arc::new(PassthroughOptimizer),
            Arc::new(StubFontCompiler),
        )
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Assemble the registry without writing anything (inspection aid).
    pub async fn registry(&self) -> Result<IconRegistry, PipelineError> {
        self.config.validate()?;
        let sources = enumerate(&self.config.source_dir)?;
        Ok(assemble(sources, self.optimizer.as_ref(), &self.config).await?)
    }

    /// Run the full pipeline: enumerate, assemble, emit every enabled
    /// target, then write the build manifest.
    pub async fn build(&self) -> Result<BuildReport, PipelineError> {
        self.config.validate()?;

        let sources = enumerate(&self.config.source_dir)?;
        info!(
            count = sources.len(),
            source_dir = %self.config.source_dir.display(),
            "enumerated icon sources"
        );

        let registry = assemble(sources, self.optimizer.as_ref(), &self.config).await?;
        let registry_hash = compute_registry_hash(&registry)?;

        let mut artifacts = vec![];
        for emitter in self.enabled_emitters() {
            let files = emitter.emit(&registry, &self.config)?;
            for file in &files {
                self.write_artifact(file)?;
                debug!(emitter = emitter.target(), path = %file.path.display(), "wrote artifact");
            }
            artifacts.extend(files.into_iter().map(|f| f.path));
        }

        if self.config.targets.flutter {
            artifacts.push(self.bundle_font(&registry)?);
        }

        artifacts.sort();
        let report = BuildReport {
            engine_version: ENGINE_VERSION.to_string(),
            font_name: self.config.font_name.clone(),
            base_code_point: self.config.base_code_point,
            icon_count: registry.len(),
            registry_hash,
            artifacts,
        };
        self.write_manifest(&report)?;

        info!(
            icons = report.icon_count,
            hash = %report.registry_hash,
            "build complete"
        );
        Ok(report)
    }

    fn enabled_emitters(&self) -> Vec<Box<dyn Emitter>> {
        let targets = &self.config.targets;
        let mut emitters: Vec<Box<dyn Emitter>> = vec![];
        if targets.json {
            emitters.push(Box::new(JsonEmitter));
        }
        if targets.css {
            emitters.push(Box::new(CssEmitter));
        }
        if targets.react {
            emitters.push(Box::new(ReactEmitter));
        }
        if targets.react_native {
            emitters.push(Box::new(ReactNativeEmitter));
        }
        if targets.flutter {
            emitters.push(Box::new(FlutterEmitter));
        }
        emitters
    }

    fn write_artifact(&self, file: &EmittedFile) -> Result<(), PipelineError> {
        let dest = self.config.output_dir.join(&file.path);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|e| PipelineError::Write {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        fs::write(&dest, &file.contents).map_err(|e| PipelineError::Write {
            path: dest,
            source: e,
        })
    }

    /// Compiles the font and places it under the Flutter subtree. Returns
    /// the bundled file's path relative to the output directory.
    fn bundle_font(&self, registry: &IconRegistry) -> Result<PathBuf, PipelineError> {
        let relative = font_asset_path(&self.config);
        let dest = self.config.output_dir.join(&relative);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|e| PipelineError::Write {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        self.font_compiler.compile(registry, &dest)?;
        debug!(path = %relative.display(), "bundled compiled font");
        Ok(relative)
    }

    fn write_manifest(&self, report: &BuildReport) -> Result<(), PipelineError> {
        let mut contents = serde_json::to_string_pretty(report)?;
        contents.push('\n');
        self.write_artifact(&EmittedFile::new(
            format!("{}.manifest.json", self.config.font_name),
            contents,
        ))
    }
}
