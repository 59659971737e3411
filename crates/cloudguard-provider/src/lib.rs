//! Resource provider adapters: descriptor enumeration for the evaluation engine.
//!
//! This crate is allowed to do filesystem IO. All provider-side lookups are
//! resolved (or marked failed) before a descriptor leaves this crate; the
//! engine never performs network or filesystem access of its own.

#![forbid(unsafe_code)]

mod snapshot;

pub use snapshot::{Inventory, SnapshotProvider, parse_inventory};

use cloudguard_domain::model::ResourceDescriptor;
use cloudguard_types::ResourceKind;

/// Supplies the descriptors of one kind for a scan.
///
/// Wholesale failure here is fatal for that kind's scan only; per-attribute
/// failures travel inside the descriptors as `Retrieved::Failed` markers and
/// never surface through this error type.
pub trait ResourceProvider {
    fn list_descriptors(&self, kind: ResourceKind)
    -> Result<Vec<ResourceDescriptor>, ProviderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("read inventory {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parse inventory {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
