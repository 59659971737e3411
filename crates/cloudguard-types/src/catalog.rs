//! Static rule documentation registry.
//!
//! Maps rule IDs and codes to human-readable descriptions with remediation
//! guidance. This is the fallback catalog when no remote knowledge base is
//! configured or reachable; it never drives which rules execute.

use crate::ids;

/// Documentation entry for a rule or code.
#[derive(Debug, Clone)]
pub struct RuleDoc {
    /// Short description of the rule/code.
    pub title: &'static str,
    /// What the rule checks and why it exists.
    pub summary: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
}

/// Look up documentation by rule_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_rule_doc(identifier: &str) -> Option<RuleDoc> {
    // Try rule_id first, then code
    match identifier {
        // Rule IDs
        ids::RULE_INSTANCE_APPROVED_IMAGE | ids::CODE_UNAPPROVED_IMAGE => {
            Some(doc_approved_image())
        }
        ids::RULE_INSTANCE_OPEN_INGRESS | ids::CODE_OPEN_INGRESS => Some(doc_open_ingress()),
        ids::RULE_INSTANCE_KEY_PAIR | ids::CODE_MISSING_KEY_PAIR => Some(doc_key_pair()),
        ids::RULE_INSTANCE_REQUIRED_TAGS | ids::CODE_MISSING_REQUIRED_TAG => {
            Some(doc_required_tags())
        }
        ids::RULE_BUCKET_PUBLIC_ACCESS_BLOCK | ids::CODE_PUBLIC_ACCESS_UNBLOCKED => {
            Some(doc_public_access_block())
        }
        ids::RULE_BUCKET_ENCRYPTION_AT_REST | ids::CODE_ENCRYPTION_DISABLED => {
            Some(doc_encryption_at_rest())
        }
        ids::RULE_BUCKET_VERSIONING | ids::CODE_VERSIONING_DISABLED => Some(doc_versioning()),
        ids::RULE_BUCKET_ACCESS_LOGGING | ids::CODE_LOGGING_DISABLED => Some(doc_access_logging()),
        ids::RULE_BUCKET_MFA_DELETE | ids::CODE_MFA_DELETE_DISABLED => Some(doc_mfa_delete()),
        ids::RULE_BUCKET_CROSS_ACCOUNT_POLICY | ids::CODE_WILDCARD_PRINCIPAL => {
            Some(doc_cross_account_policy())
        }

        ids::CODE_RETRIEVAL_FAILED => Some(doc_retrieval_failed()),

        _ => None,
    }
}

/// List all known rule IDs.
pub fn all_rule_ids() -> &'static [&'static str] {
    &[
        ids::RULE_INSTANCE_APPROVED_IMAGE,
        ids::RULE_INSTANCE_OPEN_INGRESS,
        ids::RULE_INSTANCE_KEY_PAIR,
        ids::RULE_INSTANCE_REQUIRED_TAGS,
        ids::RULE_BUCKET_PUBLIC_ACCESS_BLOCK,
        ids::RULE_BUCKET_ENCRYPTION_AT_REST,
        ids::RULE_BUCKET_VERSIONING,
        ids::RULE_BUCKET_ACCESS_LOGGING,
        ids::RULE_BUCKET_MFA_DELETE,
        ids::RULE_BUCKET_CROSS_ACCOUNT_POLICY,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_UNAPPROVED_IMAGE,
        ids::CODE_OPEN_INGRESS,
        ids::CODE_MISSING_KEY_PAIR,
        ids::CODE_MISSING_REQUIRED_TAG,
        ids::CODE_PUBLIC_ACCESS_UNBLOCKED,
        ids::CODE_ENCRYPTION_DISABLED,
        ids::CODE_VERSIONING_DISABLED,
        ids::CODE_LOGGING_DISABLED,
        ids::CODE_MFA_DELETE_DISABLED,
        ids::CODE_WILDCARD_PRINCIPAL,
        ids::CODE_RETRIEVAL_FAILED,
    ]
}

fn doc_approved_image() -> RuleDoc {
    RuleDoc {
        title: "Approved Machine Images",
        summary: "\
Flags instances launched from an image that is not on the configured approved
list. Unvetted images may carry outdated packages, unknown provenance, or
missing hardening baselines. The rule is inactive until an approved list is
configured.",
        remediation: "\
Rebuild the instance from an image on the approved list, or add the image to
`approved_images` for `instance.approved_image` in cloudguard.toml after
review.",
    }
}

fn doc_open_ingress() -> RuleDoc {
    RuleDoc {
        title: "No Unrestricted Ingress",
        summary: "\
Flags instances whose security groups permit inbound traffic from 0.0.0.0/0.
World-open ingress exposes management ports and internal services to the whole
internet and is the most common initial access vector in cloud incidents.",
        remediation: "\
Restrict each ingress rule to known CIDR ranges, a VPN range, or a load
balancer security group. If a resource legitimately serves the public
internet, exempt it via the rule's `allow` patterns instead of widening the
baseline.",
    }
}

fn doc_key_pair() -> RuleDoc {
    RuleDoc {
        title: "Key Pair Present",
        summary: "\
Flags instances with no associated key pair. Without one, emergency access
falls back to weaker or ad-hoc mechanisms.",
        remediation: "Associate a managed key pair when launching the instance.",
    }
}

fn doc_required_tags() -> RuleDoc {
    RuleDoc {
        title: "Required Tags",
        summary: "\
Flags instances missing required tags (default: `Name`). Untagged resources
cannot be attributed to an owner or cost center and tend to outlive their
purpose.",
        remediation: "\
Add the missing tags. The required set is configurable via `required_tags`
for `instance.required_tags` in cloudguard.toml.",
    }
}

fn doc_public_access_block() -> RuleDoc {
    RuleDoc {
        title: "Block Public Access",
        summary: "\
Flags buckets whose public access block configuration is absent or does not
block public ACLs. Public ACL grants are the classic cause of accidental data
exposure.",
        remediation: "Enable the bucket's public access block with public ACLs blocked.",
    }
}

fn doc_encryption_at_rest() -> RuleDoc {
    RuleDoc {
        title: "Encryption At Rest",
        summary: "\
Flags buckets with no server-side encryption configuration. Objects written to
an unencrypted bucket are stored in plaintext.",
        remediation: "\
Configure default server-side encryption (provider-managed or customer-managed
keys) on the bucket.",
    }
}

fn doc_versioning() -> RuleDoc {
    RuleDoc {
        title: "Versioning Enabled",
        summary: "\
Flags buckets without object versioning. Versioning is the primary recovery
path for accidental deletion and overwrite.",
        remediation: "Enable versioning on the bucket.",
    }
}

fn doc_access_logging() -> RuleDoc {
    RuleDoc {
        title: "Access Logging Enabled",
        summary: "\
Flags buckets without server access logging. Without logs there is no audit
trail for object reads and writes.",
        remediation: "Enable access logging with a dedicated log delivery bucket.",
    }
}

fn doc_mfa_delete() -> RuleDoc {
    RuleDoc {
        title: "MFA Delete Enabled",
        summary: "\
Flags buckets where MFA delete is not enabled. MFA delete requires a second
factor to permanently remove object versions, protecting against both
compromised credentials and operator error.",
        remediation: "Enable MFA delete on the bucket's versioning configuration.",
    }
}

fn doc_cross_account_policy() -> RuleDoc {
    RuleDoc {
        title: "No Wildcard Principals",
        summary: "\
Flags bucket policy statements that grant access to a wildcard principal
(`\"Principal\": \"*\"` or equivalent). Such statements open the bucket to any
account. Buckets with no policy attached are not flagged.",
        remediation: "\
Replace wildcard principals with explicit account or role ARNs. If public
read access is intended, document it and exempt the bucket via the rule's
`allow` patterns.",
    }
}

fn doc_retrieval_failed() -> RuleDoc {
    RuleDoc {
        title: "Attribute Retrieval Failed",
        summary: "\
Not a confirmed violation: the provider could not resolve the attribute a rule
needed, so compliance for that check is unverified for this resource.",
        remediation: "\
Check provider-side permissions and availability for the named attribute, then
re-run the scan.",
    }
}
