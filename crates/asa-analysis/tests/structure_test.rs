//! Structure check: required files and slice naming.

mod common;

use asa_analysis::checks::{CheckStatus, FindingKind, SliceCheck, StructureCheck};
use asa_analysis::SliceLayout;
use common::Project;

#[test]
fn test_complete_slice_is_ok() {
    let project = Project::new();
    let slice = project.slice("auth", "login_demo");

    let result = StructureCheck.evaluate(&SliceLayout::new(&slice.path));
    assert_eq!(result.status, CheckStatus::Ok);
    assert!(result.errors.is_empty());
}

#[test]
fn test_missing_path_is_single_error() {
    let project = Project::new();
    let result = StructureCheck.evaluate(&SliceLayout::new(project.root().join("nope")));

    assert_eq!(result.status, CheckStatus::Failed);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].message.starts_with("Slice path does not exist: "));
}

#[test]
fn test_file_instead_of_directory() {
    let project = Project::new();
    let file = project.root().join("not_a_slice");
    std::fs::write(&file, "x").unwrap();

    let result = StructureCheck.evaluate(&SliceLayout::new(&file));
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].message.starts_with("Slice path is not a directory: "));
}

#[test]
fn test_one_error_per_missing_file_in_list_order() {
    let project = Project::new();
    let slice = project.slice("auth", "login_demo");
    slice.remove("tests/test_slice.py");
    slice.remove("slice.spec.md");
    slice.remove("service.py");

    let result = StructureCheck.evaluate(&SliceLayout::new(&slice.path));
    assert_eq!(
        result.error_messages(),
        [
            "Missing required file: slice.spec.md",
            "Missing required file: service.py",
            "Missing required file: tests/test_slice.py",
        ]
    );
    assert!(result.errors.iter().all(|f| f.kind == FindingKind::MissingResource));
}

#[test]
fn test_naming_violations_are_reported_separately() {
    let project = Project::new();
    let slice = project.slice("auth", "Login Demo");

    let result = StructureCheck.evaluate(&SliceLayout::new(&slice.path));
    assert_eq!(
        result.error_messages(),
        [
            "Slice name must be lowercase: Login Demo",
            "Slice name cannot contain spaces: Login Demo",
        ]
    );
    assert!(result.errors.iter().all(|f| f.kind == FindingKind::NamingViolation));
}

#[test]
fn test_digits_and_underscores_are_neutral() {
    let project = Project::new();
    let slice = project.slice("auth", "v2_login");

    let result = StructureCheck.evaluate(&SliceLayout::new(&slice.path));
    assert!(result.is_ok(), "{:?}", result.errors);
}
