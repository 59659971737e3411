use assert_cmd::Command;

/// Helper to get a Command for the cloudguard binary.
#[allow(deprecated)]
fn cloudguard_cmd() -> Command {
    Command::cargo_bin("cloudguard").unwrap()
}

#[test]
fn help_works() {
    cloudguard_cmd().arg("--help").assert().success();
}

#[test]
fn explain_known_rule_succeeds() {
    cloudguard_cmd()
        .args(["explain", "bucket.versioning"])
        .assert()
        .success();
}

#[test]
fn explain_unknown_rule_fails_with_alternatives() {
    use predicates::prelude::*;

    cloudguard_cmd()
        .args(["explain", "no.such_rule"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Available rule_ids:"));
}

#[test]
fn rules_lists_the_static_catalog() {
    use predicates::prelude::*;

    cloudguard_cmd()
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("instance.open_ingress"));
}
