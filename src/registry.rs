//! Icon Registry - Single Source of Truth
//!
//! Built once per run, read-only thereafter. Extraction for distinct icons
//! runs concurrently, but entries are assembled in enumeration order and
//! code points are assigned from that order alone; completion timing never
//! leaks into the result.

use futures::future;
use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

use crate::config::{BuildConfig, DuplicatePolicy};
use crate::extract::{extract_geometry, ExtractError};
use crate::external::PathOptimizer;
use crate::source::IconSource;

#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error("Duplicate icon name {name:?}: {first} vs {second}")]
    DuplicateName {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("Cannot read icon file {path}: {source}")]
    UnreadableIcon {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Extract(#[from] ExtractError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconEntry {
    pub name: String,
    /// Ordered path-data strings; may be empty.
    pub geometry: Vec<String>,
    pub code_point: u32,
}

/// Ordered map from icon name to entry. No entry is ever removed or mutated
/// after assembly; emitters hold a shared reference only.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct IconRegistry {
    entries: IndexMap<String, IconEntry>,
}

impl IconRegistry {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&IconEntry> {
        self.entries.get(name)
    }

    /// Entries in enumeration order.
    pub fn entries(&self) -> impl Iterator<Item = &IconEntry> {
        self.entries.values()
    }
}

/// Builds the registry from enumerated sources. File reads and optimizer
/// calls for distinct icons run concurrently; `try_join_all` resolves in
/// input order, so enumeration order survives any completion order, and the
/// whole assembly fails on the first unrecoverable extraction.
pub async fn assemble(
    sources: Vec<IconSource>,
    optimizer: &dyn PathOptimizer,
    config: &BuildConfig,
) -> Result<IconRegistry, AssemblyError> {
    let sources = apply_duplicate_policy(sources, config.duplicates)?;
    let extra_plugins = &config.extra_plugins;

    let jobs = sources.iter().map(|icon| async move {
        let raw = tokio::fs::read_to_string(&icon.path).await.map_err(|e| {
            AssemblyError::UnreadableIcon {
                path: icon.path.clone(),
                source: e,
            }
        })?;
        let hint = icon.path.display().to_string();
        let geometry = extract_geometry(optimizer, &raw, &hint, extra_plugins).await?;
        debug!(icon = %icon.name, paths = geometry.len(), "extracted geometry");
        Ok::<_, AssemblyError>(geometry)
    });
    let geometries = future::try_join_all(jobs).await?;

    let mut entries = IndexMap::with_capacity(sources.len());
    for (index, (icon, geometry)) in sources.into_iter().zip(geometries).enumerate() {
        let code_point = config.base_code_point + index as u32;
        entries.insert(
            icon.name.clone(),
            IconEntry {
                name: icon.name,
                geometry,
                code_point,
            },
        );
    }

    Ok(IconRegistry { entries })
}

fn apply_duplicate_policy(
    sources: Vec<IconSource>,
    policy: DuplicatePolicy,
) -> Result<Vec<IconSource>, AssemblyError> {
    let mut by_name: IndexMap<String, IconSource> = IndexMap::with_capacity(sources.len());
    for source in sources {
        match by_name.entry(source.name.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(source);
            }
            Entry::Occupied(mut slot) => match policy {
                DuplicatePolicy::Reject => {
                    return Err(AssemblyError::DuplicateName {
                        name: source.name,
                        first: slot.get().path.clone(),
                        second: source.path,
                    });
                }
                DuplicatePolicy::LastWriteWins => {
                    slot.insert(source);
                }
            },
        }
    }
    Ok(by_name.into_values().collect())
}
