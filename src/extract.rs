//! Geometry Extraction
//!
//! Optimizes one icon's source text and scans the result for path-data
//! attributes in document order. Zero matches is a valid empty geometry,
//! not an error.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use crate::external::{default_plugins, OptimizeError, OptimizeRequest, PathOptimizer};

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error(transparent)]
    Optimize(#[from] OptimizeError),
}

static PATH_DATA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bd="([^"]*)""#).expect("path-data pattern"));

/// Ordered path-data strings for one icon. `path_hint` is carried through to
/// the optimizer for diagnostics only.
pub async fn extract_geometry(
    optimizer: &dyn PathOptimizer,
    raw: &str,
    path_hint: &str,
    extra_plugins: &[String],
) -> Result<Vec<String>, ExtractError> {
    let mut plugins = default_plugins();
    plugins.extend(extra_plugins.iter().cloned());

    let request = OptimizeRequest {
        path: path_hint.to_string(),
        plugins,
    };
    let optimized = optimizer.optimize(raw, &request).await?;

    Ok(PATH_DATA
        .captures_iter(&optimized.data)
        .map(|capture| capture[1].to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::PassthroughOptimizer;

    async fn extract(raw: &str) -> Vec<String> {
        extract_geometry(&PassthroughOptimizer, raw, "test.svg", &[])
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn collects_paths_in_document_order() {
        let geometry = extract(
            r#"<svg><path d="M10 10h5"/><g><path d="M0 0v2"/></g><path d="M3 3"/></svg>"#,
        )
        .await;
        assert_eq!(geometry, ["M10 10h5", "M0 0v2", "M3 3"]);
    }

    #[tokio::test]
    async fn zero_matches_is_empty_geometry() {
        let geometry = extract(r#"<svg><circle r="4"/></svg>"#).await;
        assert!(geometry.is_empty());
    }

    #[tokio::test]
    async fn ignores_attributes_that_merely_end_in_d() {
        let geometry = extract(r#"<svg id="outlined" aria-hidden="true"><path d="M1 1"/></svg>"#)
            .await;
        assert_eq!(geometry, ["M1 1"]);
    }

    #[tokio::test]
    async fn optimizer_failure_propagates() {
        struct FailingOptimizer;

        #[async_trait::async_trait]
        impl PathOptimizer for FailingOptimizer {
            async fn optimize(
                &self,
                _source: &str,
                request: &OptimizeRequest,
            ) -> Result<crate::external::Optimized, OptimizeError> {
                Err(OptimizeError {
                    path: request.path.clone(),
                    message: "malformed markup".to_string(),
                })
            }
        }

        let err = extract_geometry(&FailingOptimizer, "<svg/>", "broken.svg", &[])
            .await
            .unwrap_err();
        assert!(err.to_string().contains("broken.svg"));
    }
}
