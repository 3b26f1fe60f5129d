#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const CONTRACT: &str = r#"{
  "slice_name": "SLICE",
  "version": "1.0.0",
  "domain": "DOMAIN",
  "allowed_imports": ["shared.*"],
  "public_api": {"exports": ["login"]},
  "dependencies": {}
}"#;

/// Temp project with an isolated HOME so no user config leaks in.
pub struct TestProject {
    tmp: TempDir,
    home: PathBuf,
}

impl TestProject {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        let project = Self { tmp, home };
        fs::create_dir_all(project.root()).expect("create project root");
        project
    }

    pub fn root(&self) -> PathBuf {
        self.tmp.path().join("project")
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("asa");
        cmd.current_dir(self.root())
            .env("HOME", &self.home)
            .env_remove("ASA_LOG")
            .env_remove("ASA_LINT_LOC_PER_FILE")
            .env_remove("ASA_LINT_LOC_TOTAL")
            .env_remove("ASA_REPORT_FORMAT")
            .env_remove("ASA_REPORT_COLOR");
        cmd
    }

    /// Write a compliant slice and return its path relative to the root.
    pub fn add_slice(&self, domain: &str, name: &str) -> String {
        let rel = format!("domains/{domain}/slices/{name}");
        let dir = self.root().join(&rel);
        fs::create_dir_all(dir.join("tests")).expect("create slice dirs");
        let contract = CONTRACT.replace("SLICE", name).replace("DOMAIN", domain);
        write(&dir.join("slice.contract.json"), &contract);
        write(&dir.join("slice.spec.md"), &format!("# {name}\n"));
        write(&dir.join("handler.py"), "from .service import Service\n");
        write(&dir.join("service.py"), "from shared.utils import verify_password\n");
        write(&dir.join("repository.py"), "from shared.entities import User\n");
        write(&dir.join("schemas.py"), "from pydantic import BaseModel\n");
        write(&dir.join("tests/test_slice.py"), "def test_ok():\n    assert True\n");
        rel
    }

    pub fn write(&self, rel: &str, content: &str) {
        let path = self.root().join(rel);
        fs::create_dir_all(path.parent().expect("parent")).expect("create parent");
        write(&path, content);
    }

    pub fn remove(&self, rel: &str) {
        fs::remove_file(self.root().join(rel)).expect("remove file");
    }
}

fn write(path: &Path, content: &str) {
    fs::write(path, content).expect("write fixture file");
}
