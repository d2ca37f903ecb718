//! Hashing - SHA-256 Determinism Receipts
//!
//! Two runs over the same inputs must agree byte for byte; the registry hash
//! recorded in the build manifest is how that is checked.

use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::registry::IconRegistry;

/// SHA-256 of `data`, as a lowercase hex string.
pub fn sha256_hex(data: &[u8]) -> String {
    let digest = Sha256::digest(data);
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Canonical JSON: sorted keys, no whitespace. Hash inputs go through this
/// so field order can never influence a hash.
pub fn canonical_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let value: Value = serde_json::to_value(value)?;
    serde_json::to_string(&sort_keys(&value))
}

fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<_> = map.keys().collect();
            keys.sort();
            Value::Object(
                keys.into_iter()
                    .map(|k| (k.clone(), sort_keys(&map[k])))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        _ => value.clone(),
    }
}

/// Hash of the finalized registry: names, geometry, and code points.
pub fn compute_registry_hash(registry: &IconRegistry) -> Result<String, serde_json::Error> {
    let canonical = canonical_json(registry)?;
    Ok(sha256_hex(canonical.as_bytes()))
}
