use cloudguard_types::ResourceKind;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// Outcome of one provider-side attribute lookup, resolved before evaluation.
///
/// Rules treat `Failed` as "could not verify" (a retrieval-failure
/// diagnostic), never as a rule error. A missing-but-retrievable attribute is
/// modeled as `Known(None)` where absence is meaningful.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Retrieved<T> {
    Known(T),
    Failed(String),
}

impl<T> Retrieved<T> {
    pub fn known(&self) -> Option<&T> {
        match self {
            Retrieved::Known(value) => Some(value),
            Retrieved::Failed(_) => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Retrieved::Failed(_))
    }
}

/// Point-in-time snapshot of one compute instance's relevant configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InstanceDescriptor {
    pub instance_id: String,
    #[serde(default)]
    pub image_id: Option<String>,
    #[serde(default)]
    pub key_name: Option<String>,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
    #[serde(default)]
    pub security_groups: Vec<SecurityGroup>,
}

/// A security group attached to an instance. The group id travels with the
/// instance; the rule detail is a separate lookup that can fail on its own.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SecurityGroup {
    pub group_id: String,
    pub ingress: Retrieved<Vec<IngressRule>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IngressRule {
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub cidr_ranges: Vec<String>,
}

/// Point-in-time snapshot of one storage bucket's relevant configuration.
///
/// Every attribute slot is a fully-resolved `Retrieved` value: the provider
/// finishes (or fails) each lookup before the descriptor enters evaluation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BucketDescriptor {
    pub name: String,
    /// `Known(None)` = no public access block configured at all.
    pub public_access_block: Retrieved<Option<PublicAccessBlock>>,
    /// `Known(None)` = no server-side encryption configuration.
    pub encryption: Retrieved<Option<EncryptionConfig>>,
    pub versioning: Retrieved<BucketVersioning>,
    pub access_logging: Retrieved<bool>,
    /// `Known(None)` = no bucket policy attached (not a violation by itself).
    pub policy: Retrieved<Option<PolicyDocument>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicAccessBlock {
    #[serde(default)]
    pub block_public_acls: bool,
    #[serde(default)]
    pub ignore_public_acls: bool,
    #[serde(default)]
    pub block_public_policy: bool,
    #[serde(default)]
    pub restrict_public_buckets: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptionConfig {
    #[serde(default)]
    pub algorithm: Option<String>,
    #[serde(default)]
    pub kms_key_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketVersioning {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub mfa_delete: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyDocument {
    #[serde(default)]
    pub statements: Vec<PolicyStatement>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyStatement {
    #[serde(default)]
    pub effect: Option<String>,
    /// Raw principal value; shape varies by provider (`"*"`, `{"AWS": [...]}`, ...).
    #[serde(default)]
    pub principal: JsonValue,
}

/// Kind-dispatched descriptor handed to the engine.
#[derive(Clone, Debug, PartialEq)]
pub enum ResourceDescriptor {
    Instance(InstanceDescriptor),
    Bucket(BucketDescriptor),
}

impl ResourceDescriptor {
    pub fn kind(&self) -> ResourceKind {
        match self {
            ResourceDescriptor::Instance(_) => ResourceKind::Instance,
            ResourceDescriptor::Bucket(_) => ResourceKind::Bucket,
        }
    }

    pub fn resource_id(&self) -> &str {
        match self {
            ResourceDescriptor::Instance(i) => &i.instance_id,
            ResourceDescriptor::Bucket(b) => &b.name,
        }
    }
}
