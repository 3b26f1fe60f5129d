//! Shared fixtures: a throwaway project tree with fully-formed slices.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{json, Value};
use tempfile::TempDir;

pub const HANDLER_PY: &str = "\
from fastapi import APIRouter
from .service import LoginDemoService
from .schemas import LoginRequest

router = APIRouter()


@router.post(\"/login\")
async def login(request: LoginRequest):
    return await LoginDemoService().authenticate(request)
";

pub const SERVICE_PY: &str = "\
from typing import Optional
from .repository import DemoUserRepository
from shared.utils import verify_password, create_access_token
from shared.entities import User


class LoginDemoService:
    def __init__(self):
        self.repository = DemoUserRepository()
";

pub const REPOSITORY_PY: &str = "\
from shared.entities import User


class DemoUserRepository:
    def get(self, email: str):
        return None
";

pub const SCHEMAS_PY: &str = "\
from pydantic import BaseModel


class LoginRequest(BaseModel):
    email: str
    password: str
";

pub fn contract_for(domain: &str, slice: &str) -> Value {
    json!({
        "slice_name": slice,
        "version": "1.0.0",
        "domain": domain,
        "allowed_imports": ["shared.*"],
        "public_api": {"exports": ["login"]},
        "dependencies": {}
    })
}

/// A temp project root holding `domains/<domain>/slices/<slice>` trees.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Create a compliant slice and return a handle to it.
    pub fn slice(&self, domain: &str, name: &str) -> Slice {
        let path = self.root().join("domains").join(domain).join("slices").join(name);
        let slice = Slice { path };
        slice.write("slice.spec.md", &format!("# {name}\n"));
        slice.set_contract(&contract_for(domain, name));
        slice.write("handler.py", HANDLER_PY);
        slice.write("service.py", SERVICE_PY);
        slice.write("repository.py", REPOSITORY_PY);
        slice.write("schemas.py", SCHEMAS_PY);
        slice.write("tests/test_slice.py", "def test_placeholder():\n    assert True\n");
        slice
    }

    pub fn mkdir(&self, rel: &str) {
        fs::create_dir_all(self.root().join(rel)).unwrap();
    }
}

pub struct Slice {
    pub path: PathBuf,
}

impl Slice {
    pub fn write(&self, rel: &str, content: &str) {
        let target = self.path.join(rel);
        fs::create_dir_all(target.parent().unwrap()).unwrap();
        fs::write(target, content).unwrap();
    }

    pub fn write_bytes(&self, rel: &str, content: &[u8]) {
        fs::write(self.path.join(rel), content).unwrap();
    }

    pub fn remove(&self, rel: &str) {
        fs::remove_file(self.path.join(rel)).unwrap();
    }

    pub fn set_contract(&self, contract: &Value) {
        self.write("slice.contract.json", &serde_json::to_string_pretty(contract).unwrap());
    }

    /// Patch one top-level contract key.
    pub fn contract_field(&self, key: &str, value: Value) {
        let raw = fs::read_to_string(self.path.join("slice.contract.json")).unwrap();
        let mut contract: Value = serde_json::from_str(&raw).unwrap();
        contract[key] = value;
        self.set_contract(&contract);
    }
}

/// `n` significant lines of Python.
pub fn python_lines(n: usize) -> String {
    (0..n).map(|i| format!("x_{i} = {i}\n")).collect()
}
