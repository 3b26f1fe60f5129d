//! Compiled `allowed_imports` patterns.

use std::path::Path;

use globset::{GlobBuilder, GlobMatcher};

enum Matcher {
    Glob(GlobMatcher),
    Literal(String),
}

struct AllowedPattern {
    matcher: Matcher,
    /// `shared.utils` for `shared.utils.*`.
    submodule_root: Option<String>,
}

impl AllowedPattern {
    fn compile(pattern: &str) -> Self {
        let matcher = match GlobBuilder::new(pattern).literal_separator(false).build() {
            Ok(glob) => Matcher::Glob(glob.compile_matcher()),
            Err(e) => {
                tracing::warn!(pattern, error = %e, "allowed_imports entry is not a valid glob; matching literally");
                Matcher::Literal(pattern.to_string())
            }
        };
        let submodule_root = pattern
            .strip_suffix(".*")
            .filter(|root| !root.is_empty())
            .map(str::to_string);
        Self { matcher, submodule_root }
    }

    fn matches(&self, reference: &str) -> bool {
        let direct = match &self.matcher {
            Matcher::Glob(glob) => glob.is_match(Path::new(reference)),
            Matcher::Literal(literal) => literal == reference,
        };
        direct
            || self.submodule_root.as_deref().is_some_and(|root| {
                reference == root
                    || reference
                        .strip_prefix(root)
                        .is_some_and(|rest| rest.starts_with('.'))
            })
    }
}

/// Allow-list compiled once per slice.
pub struct ImportAllowList {
    patterns: Vec<AllowedPattern>,
}

impl ImportAllowList {
    pub fn compile<S: AsRef<str>>(patterns: &[S]) -> Self {
        Self {
            patterns: patterns.iter().map(|p| AllowedPattern::compile(p.as_ref())).collect(),
        }
    }

    pub fn is_allowed(&self, reference: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(reference))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
