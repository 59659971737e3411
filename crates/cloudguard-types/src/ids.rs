//! Stable identifiers for rules and issue codes.
//!
//! `rule_id` is a dotted namespace (`<kind>.<concern>`). `code` is a short
//! snake_case discriminator.

// Instance rules
pub const RULE_INSTANCE_APPROVED_IMAGE: &str = "instance.approved_image";
pub const RULE_INSTANCE_OPEN_INGRESS: &str = "instance.open_ingress";
pub const RULE_INSTANCE_KEY_PAIR: &str = "instance.key_pair";
pub const RULE_INSTANCE_REQUIRED_TAGS: &str = "instance.required_tags";

// Bucket rules
pub const RULE_BUCKET_PUBLIC_ACCESS_BLOCK: &str = "bucket.public_access_block";
pub const RULE_BUCKET_ENCRYPTION_AT_REST: &str = "bucket.encryption_at_rest";
pub const RULE_BUCKET_VERSIONING: &str = "bucket.versioning";
pub const RULE_BUCKET_ACCESS_LOGGING: &str = "bucket.access_logging";
pub const RULE_BUCKET_MFA_DELETE: &str = "bucket.mfa_delete";
pub const RULE_BUCKET_CROSS_ACCOUNT_POLICY: &str = "bucket.cross_account_policy";

// Codes: instance rules
pub const CODE_UNAPPROVED_IMAGE: &str = "unapproved_image";
pub const CODE_OPEN_INGRESS: &str = "open_ingress";
pub const CODE_MISSING_KEY_PAIR: &str = "missing_key_pair";
pub const CODE_MISSING_REQUIRED_TAG: &str = "missing_required_tag";

// Codes: bucket rules
pub const CODE_PUBLIC_ACCESS_UNBLOCKED: &str = "public_access_unblocked";
pub const CODE_ENCRYPTION_DISABLED: &str = "encryption_disabled";
pub const CODE_VERSIONING_DISABLED: &str = "versioning_disabled";
pub const CODE_LOGGING_DISABLED: &str = "logging_disabled";
pub const CODE_MFA_DELETE_DISABLED: &str = "mfa_delete_disabled";
pub const CODE_WILDCARD_PRINCIPAL: &str = "wildcard_principal";

// Shared: an attribute lookup failed on the provider side
pub const CODE_RETRIEVAL_FAILED: &str = "retrieval_failed";
