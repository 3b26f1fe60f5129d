mod common;

use common::TestProject;
use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn version_flag() {
    let project = TestProject::new();
    project.cmd().arg("--version").assert().success().stdout(contains(asa_core::constants::VERSION));
}

#[test]
fn lint_passing_slice() {
    let project = TestProject::new();
    let slice = project.add_slice("auth", "login_demo");

    project
        .cmd()
        .args(["lint", &slice])
        .assert()
        .success()
        .stdout(contains("✅ Structure: OK"))
        .stdout(contains("Result: PASSED"));
}

#[test]
fn lint_failing_slice_exits_one() {
    let project = TestProject::new();
    let slice = project.add_slice("auth", "login_demo");
    project.remove(&format!("{slice}/slice.contract.json"));

    project
        .cmd()
        .args(["lint", &slice])
        .assert()
        .code(1)
        .stdout(contains("❌ Contract: FAILED"))
        .stdout(contains("  slice.contract.json not found"))
        .stdout(contains("Result: FAILED"));
}

#[test]
fn lint_unauthorized_import() {
    let project = TestProject::new();
    let slice = project.add_slice("auth", "login_demo");
    project.write(&format!("{slice}/service.py"), "import domains.billing.slices.invoice\n");

    project
        .cmd()
        .args(["lint", &slice])
        .assert()
        .code(1)
        .stdout(contains(
            "service.py: Unauthorized import 'domains.billing.slices.invoice' (not in allowed_imports)",
        ));
}

#[test]
fn lint_rejects_file_path() {
    let project = TestProject::new();
    project.write("notes.txt", "x");

    project
        .cmd()
        .args(["lint", "notes.txt"])
        .assert()
        .code(1)
        .stderr(contains("❌ Not a directory: notes.txt"));
}

#[test]
fn lint_missing_path() {
    let project = TestProject::new();
    project
        .cmd()
        .args(["lint", "domains/none"])
        .assert()
        .code(2)
        .stderr(contains("Path does not exist"));
}

#[test]
fn lint_json_format() {
    let project = TestProject::new();
    let slice = project.add_slice("auth", "login_demo");

    let output = project
        .cmd()
        .args(["--format", "json", "lint", &slice])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["overall_status"], "PASSED");
    assert_eq!(value["checks"].as_array().unwrap().len(), 4);
}

#[test]
fn unknown_format_is_an_error() {
    let project = TestProject::new();
    let slice = project.add_slice("auth", "login_demo");

    project
        .cmd()
        .args(["--format", "xml", "lint", &slice])
        .assert()
        .failure()
        .stderr(contains("xml"));
}

#[test]
fn loc_budget_flag_turns_into_warning() {
    let project = TestProject::new();
    let slice = project.add_slice("auth", "login_demo");
    let body: String = (0..12).map(|i| format!("v{i} = {i}\n")).collect();
    project.write(&format!("{slice}/schemas.py"), &body);

    project
        .cmd()
        .args(["--loc-per-file", "10", "lint", &slice])
        .assert()
        .success()
        .stdout(contains("⚠️ Loc Limits: WARNING"))
        .stdout(contains("schemas.py: 12 LOC exceeds limit of 10"))
        .stdout(contains("(with warnings)"));
}

#[test]
fn project_config_is_honoured() {
    let project = TestProject::new();
    let slice = project.add_slice("auth", "login_demo");
    project.write("asa.toml", "[lint]\nloc_per_file = 10\n");
    let body: String = (0..12).map(|i| format!("v{i} = {i}\n")).collect();
    project.write(&format!("{slice}/schemas.py"), &body);

    project
        .cmd()
        .args(["lint", &slice])
        .assert()
        .success()
        .stdout(contains("schemas.py: 12 LOC exceeds limit of 10"));
}

#[test]
fn invalid_project_config_fails() {
    let project = TestProject::new();
    let slice = project.add_slice("auth", "login_demo");
    project.write("asa.toml", "[lint\n");

    project.cmd().args(["lint", &slice]).assert().failure();
}

#[test]
fn lint_all_summary() {
    let project = TestProject::new();
    project.add_slice("auth", "login_demo");
    project.add_slice("billing", "invoice");

    project
        .cmd()
        .arg("lint-all")
        .assert()
        .success()
        .stdout(contains("Linting 2 slice(s)"))
        .stdout(contains("  Total: 2\n  Passed: 2\n  Failed: 0\n  Warnings: 0"))
        .stdout(contains("✅ All slices passed!"));
}

#[test]
fn lint_all_with_failure_exits_one() {
    let project = TestProject::new();
    project.add_slice("auth", "login_demo");
    let broken = project.add_slice("auth", "broken");
    project.remove(&format!("{broken}/handler.py"));

    project
        .cmd()
        .arg("lint-all")
        .assert()
        .code(1)
        .stdout(contains("❌ Failed slices:"))
        .stdout(contains("All slices passed!").not());
}

#[test]
fn lint_all_fail_fast() {
    let project = TestProject::new();
    let broken = project.add_slice("auth", "a_broken");
    project.remove(&format!("{broken}/handler.py"));
    project.add_slice("auth", "b_never");

    project
        .cmd()
        .args(["lint-all", "--fail-fast"])
        .assert()
        .code(1)
        .stdout(contains("Stopping due to --fail-fast"))
        .stdout(contains("b_never").not())
        .stdout(contains("Summary:").not());
}

#[test]
fn lint_all_domain_filter() {
    let project = TestProject::new();
    project.add_slice("auth", "login_demo");
    let broken = project.add_slice("billing", "invoice");
    project.remove(&format!("{broken}/handler.py"));

    project
        .cmd()
        .args(["lint-all", "-d", "auth"])
        .assert()
        .success()
        .stdout(contains("Linting 1 slice(s)"));
}

#[test]
fn lint_all_without_domains() {
    let project = TestProject::new();
    project
        .cmd()
        .arg("lint-all")
        .assert()
        .code(1)
        .stderr(contains("No domains/ directory found"));
}

#[test]
fn list_slices_sorted() {
    let project = TestProject::new();
    project.add_slice("billing", "invoice");
    project.add_slice("auth", "register");
    project.add_slice("auth", "login_demo");

    project
        .cmd()
        .arg("list-slices")
        .assert()
        .success()
        .stdout(contains(
            "Found 3 slice(s):\n\n  • auth/login_demo\n  • auth/register\n  • billing/invoice\n",
        ));
}

#[test]
fn list_slices_filter_and_empty() {
    let project = TestProject::new();
    project.add_slice("auth", "login_demo");

    project
        .cmd()
        .args(["list-slices", "--domain", "users"])
        .assert()
        .success()
        .stdout(contains("No slices found"));
}

#[test]
fn list_slices_without_domains_is_not_fatal() {
    let project = TestProject::new();
    project
        .cmd()
        .arg("list-slices")
        .assert()
        .success()
        .stderr(contains("No domains/ directory found"));
}

#[test]
fn root_flag_points_elsewhere() {
    let project = TestProject::new();
    project.add_slice("auth", "login_demo");
    let root = project.root();

    project
        .cmd()
        .current_dir(root.parent().unwrap())
        .args(["--root", "project", "list-slices"])
        .assert()
        .success()
        .stdout(contains("auth/login_demo"));
}
