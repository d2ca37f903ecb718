//! Multi-Target Emitters
//!
//! An emitter is a pure function of the finalized registry: it renders
//! in-memory artifacts and never touches the filesystem, the registry, or a
//! sibling emitter. Each target owns a disjoint subtree of the output
//! directory; writing is the pipeline's job.

pub mod data;
pub mod flutter;
pub mod react;
pub mod react_native;

use indexmap::IndexMap;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::BuildConfig;
use crate::naming::{normalize, NamingPolicy};
use crate::registry::{IconEntry, IconRegistry};

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("Icons {first:?} and {second:?} both normalize to identifier {identifier:?}")]
    IdentifierCollision {
        identifier: String,
        first: String,
        second: String,
    },

    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

/// One rendered artifact. `path` is relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedFile {
    pub path: PathBuf,
    pub contents: String,
}

impl EmittedFile {
    pub fn new(path: impl Into<PathBuf>, contents: String) -> Self {
        Self {
            path: path.into(),
            contents,
        }
    }
}

pub trait Emitter {
    fn target(&self) -> &'static str;

    fn emit(&self, registry: &IconRegistry, config: &BuildConfig)
        -> Result<Vec<EmittedFile>, EmitError>;
}

/// One identifier per entry, in registry order. Two names that collide after
/// normalization are an error here, never a silent overwrite.
pub(crate) fn resolve_identifiers<'r>(
    registry: &'r IconRegistry,
    policy: &NamingPolicy,
) -> Result<Vec<(&'r IconEntry, String)>, EmitError> {
    let mut seen: IndexMap<String, String> = IndexMap::with_capacity(registry.len());
    let mut resolved = Vec::with_capacity(registry.len());
    for entry in registry.entries() {
        let identifier = normalize(&entry.name, policy);
        if let Some(first) = seen.insert(identifier.clone(), entry.name.clone()) {
            return Err(EmitError::IdentifierCollision {
                identifier,
                first,
                second: entry.name.clone(),
            });
        }
        resolved.push((entry, identifier));
    }
    Ok(resolved)
}

/// Single-quoted JS string literal.
pub(crate) fn js_string(raw: &str) -> String {
    format!("'{}'", raw.replace('\\', "\\\\").replace('\'', "\\'"))
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::config::BuildConfig;
    use crate::registry::{assemble, IconRegistry};
    use crate::source::IconSource;
    use std::path::PathBuf;

    /// Registry fixture built through the real assembly path, from in-memory
    /// sources written to a temp dir.
    pub fn registry_from(icons: &[(&str, &str)], font_name: &str) -> (IconRegistry, BuildConfig) {
        let dir = tempfile::tempdir().unwrap();
        let mut sources = vec![];
        for (name, body) in icons {
            let path = dir.path().join(format!("{name}.svg"));
            std::fs::write(&path, body).unwrap();
            sources.push(IconSource {
                name: name.to_string(),
                path,
            });
        }
        let config = BuildConfig::new(
            dir.path().to_path_buf(),
            PathBuf::from("dist"),
            font_name,
        );
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let registry = runtime
            .block_on(assemble(
                sources,
                &crate::external::PassthroughOptimizer,
                &config,
            ))
            .unwrap();
        (registry, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::NamingPolicy;

    #[test]
    fn collision_is_reported_with_both_names() {
        let (registry, _config) = test_support::registry_from(
            &[
                ("arrow-left", r#"<path d="M0 0"/>"#),
                ("arrow_left", r#"<path d="M1 1"/>"#),
            ],
            "myfont",
        );
        let err = resolve_identifiers(&registry, &NamingPolicy::react("myfont")).unwrap_err();
        match err {
            EmitError::IdentifierCollision {
                identifier,
                first,
                second,
            } => {
                assert_eq!(identifier, "ArrowLeft");
                assert_eq!(first, "arrow-left");
                assert_eq!(second, "arrow_left");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn js_string_escapes_quotes_and_backslashes() {
        assert_eq!(js_string("it's"), r"'it\'s'");
        assert_eq!(js_string(r"a\b"), r"'a\\b'");
    }
}
