//! IconForge Core - Icon Registry Compiler
//!
//! # The Five Laws (Non-Negotiable)
//! 1. The Registry Is Truth
//! 2. Code Points Follow Enumeration Order
//! 3. Emitters Consume, Never Mutate
//! 4. Deterministic Output
//! 5. Manifests Enable Reproduction

pub mod config;
pub mod emit;
pub mod external;
pub mod extract;
pub mod hashing;
pub mod naming;
pub mod pipeline;
pub mod registry;
pub mod source;

pub use config::{BuildConfig, ConfigError, DuplicatePolicy, TargetFlags};
pub use external::{
    FontCompiler, OptimizeRequest, Optimized, PassthroughOptimizer, PathOptimizer,
    StubFontCompiler,
};
pub use hashing::{canonical_json, compute_registry_hash};
pub use pipeline::{BuildPipeline, BuildReport, PipelineError};
pub use registry::{IconEntry, IconRegistry};

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
