use crate::model::{BucketDescriptor, InstanceDescriptor};
use crate::policy::EffectiveConfig;
use cloudguard_types::{Issue, ResourceKind, ids};

mod access_logging;
mod approved_image;
mod cross_account_policy;
mod encryption_at_rest;
mod key_pair;
mod mfa_delete;
mod open_ingress;
mod public_access_block;
mod required_tags;
mod utils;
mod versioning;


/// Ordered rule ids for one resource kind. Evaluation and issue ordering
/// follow this order; rules for one kind never see another kind's
/// descriptors.
pub fn rule_ids(kind: ResourceKind) -> &'static [&'static str] {
    match kind {
        ResourceKind::Instance => &[
            ids::RULE_INSTANCE_APPROVED_IMAGE,
            ids::RULE_INSTANCE_OPEN_INGRESS,
            ids::RULE_INSTANCE_KEY_PAIR,
            ids::RULE_INSTANCE_REQUIRED_TAGS,
        ],
        ResourceKind::Bucket => &[
            ids::RULE_BUCKET_PUBLIC_ACCESS_BLOCK,
            ids::RULE_BUCKET_ENCRYPTION_AT_REST,
            ids::RULE_BUCKET_VERSIONING,
            ids::RULE_BUCKET_ACCESS_LOGGING,
            ids::RULE_BUCKET_MFA_DELETE,
            ids::RULE_BUCKET_CROSS_ACCOUNT_POLICY,
        ],
    }
}

pub fn run_instance(desc: &InstanceDescriptor, cfg: &EffectiveConfig, out: &mut Vec<Issue>) {
    approved_image::run(desc, cfg, out);
    open_ingress::run(desc, cfg, out);
    key_pair::run(desc, cfg, out);
    required_tags::run(desc, cfg, out);
}

pub fn run_bucket(desc: &BucketDescriptor, cfg: &EffectiveConfig, out: &mut Vec<Issue>) {
    public_access_block::run(desc, cfg, out);
    encryption_at_rest::run(desc, cfg, out);
    versioning::run(desc, cfg, out);
    access_logging::run(desc, cfg, out);
    mfa_delete::run(desc, cfg, out);
    cross_account_policy::run(desc, cfg, out);
}
