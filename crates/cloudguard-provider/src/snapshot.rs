use crate::{ProviderError, ResourceProvider};
use camino::Utf8PathBuf;
use cloudguard_domain::model::{BucketDescriptor, InstanceDescriptor, ResourceDescriptor};
use cloudguard_types::ResourceKind;
use serde::{Deserialize, Serialize};

/// A point-in-time inventory document: the attribute bags a live provider
/// would have resolved ahead of evaluation, one section per resource kind.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    pub instances: Vec<InstanceDescriptor>,
    #[serde(default)]
    pub buckets: Vec<BucketDescriptor>,
}

/// Parse text as an inventory document.
///
/// Designed to never panic on any input; malformed documents come back as
/// errors.
pub fn parse_inventory(text: &str) -> Result<Inventory, serde_json::Error> {
    serde_json::from_str(text)
}

/// Provider backed by an inventory snapshot on disk.
#[derive(Clone, Debug)]
pub struct SnapshotProvider {
    path: Utf8PathBuf,
}

impl SnapshotProvider {
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ResourceProvider for SnapshotProvider {
    fn list_descriptors(
        &self,
        kind: ResourceKind,
    ) -> Result<Vec<ResourceDescriptor>, ProviderError> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| ProviderError::Io {
            path: self.path.to_string(),
            source,
        })?;
        let inventory = parse_inventory(&text).map_err(|source| ProviderError::Parse {
            path: self.path.to_string(),
            source,
        })?;

        let descriptors: Vec<ResourceDescriptor> = match kind {
            ResourceKind::Instance => inventory
                .instances
                .into_iter()
                .map(ResourceDescriptor::Instance)
                .collect(),
            ResourceKind::Bucket => inventory
                .buckets
                .into_iter()
                .map(ResourceDescriptor::Bucket)
                .collect(),
        };

        tracing::info!(kind = %kind, count = descriptors.len(), "enumerated descriptors from snapshot");
        Ok(descriptors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    const INVENTORY: &str = r#"{
        "instances": [
            {
                "instance_id": "i-1",
                "key_name": "ops-key",
                "tags": { "Name": "web-1" },
                "security_groups": [
                    {
                        "group_id": "sg-1",
                        "ingress": { "known": [ { "protocol": "tcp", "cidr_ranges": ["0.0.0.0/0"] } ] }
                    },
                    {
                        "group_id": "sg-2",
                        "ingress": { "failed": "throttled" }
                    }
                ]
            }
        ],
        "buckets": [
            {
                "name": "b-1",
                "public_access_block": { "known": { "block_public_acls": true } },
                "encryption": { "known": null },
                "versioning": { "known": { "enabled": true, "mfa_delete": false } },
                "access_logging": { "known": true },
                "policy": { "known": null }
            }
        ]
    }"#;

    fn write_inventory(dir: &TempDir, contents: &str) -> Utf8PathBuf {
        let path = Utf8PathBuf::from_path_buf(dir.path().join("inventory.json")).expect("utf8 path");
        std::fs::write(&path, contents).expect("write inventory");
        path
    }

    #[test]
    fn snapshot_provider_lists_each_kind_separately() {
        let tmp = TempDir::new().expect("temp dir");
        let provider = SnapshotProvider::new(write_inventory(&tmp, INVENTORY));

        let instances = provider
            .list_descriptors(ResourceKind::Instance)
            .expect("list instances");
        assert_eq!(instances.len(), 1);
        assert_eq!(instances[0].resource_id(), "i-1");

        let buckets = provider
            .list_descriptors(ResourceKind::Bucket)
            .expect("list buckets");
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].resource_id(), "b-1");
    }

    #[test]
    fn per_attribute_failure_markers_survive_parsing() {
        let inventory = parse_inventory(INVENTORY).expect("parse");
        let groups = &inventory.instances[0].security_groups;
        assert!(groups[0].ingress.known().is_some());
        assert!(groups[1].ingress.is_failed());
    }

    #[test]
    fn missing_file_is_a_wholesale_enumeration_error() {
        let provider = SnapshotProvider::new("does/not/exist.json");
        let err = provider
            .list_descriptors(ResourceKind::Bucket)
            .unwrap_err();
        assert!(matches!(err, ProviderError::Io { .. }));
    }

    #[test]
    fn malformed_inventory_is_a_parse_error() {
        let tmp = TempDir::new().expect("temp dir");
        let provider = SnapshotProvider::new(write_inventory(&tmp, "{ not json"));
        let err = provider
            .list_descriptors(ResourceKind::Instance)
            .unwrap_err();
        assert!(matches!(err, ProviderError::Parse { .. }));
    }

    #[test]
    fn empty_document_yields_empty_sections() {
        let inventory = parse_inventory("{}").expect("parse");
        assert!(inventory.instances.is_empty());
        assert!(inventory.buckets.is_empty());
    }

    proptest! {
        #[test]
        fn parse_inventory_never_panics(input in ".*") {
            let _ = parse_inventory(&input);
        }
    }
}
