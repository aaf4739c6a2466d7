//! Configuration for a single decorator-generation run.
//!
//! A [`GenerationRequest`] carries everything one `wrap` invocation needs:
//! where the trait lives, what to call the generated module, which templates
//! to render and where the output goes. It is built once from caller input,
//! validated, and then consumed read-only by the driver.
//!
//! # Examples
//!
//! ```no_run
//! use servicesmith_core::config::GenerationRequest;
//!
//! let mut request = GenerationRequest::new("src/store.rs", "Store", "store");
//! request.templates = vec!["metrics".to_string()];
//! request.ignored_methods = vec!["close".to_string()];
//! ```

// Internal imports (std, crate)
use std::path::{Path, PathBuf};

// External imports (alphabetized)
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::error::Result;

/// Where rendered output is written
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub enum OutputTarget {
    /// Write all rendered templates to standard output, in resolution order
    #[default]
    Stdout,
    /// Write one file per template into this directory
    Directory(PathBuf),
}

/// Configuration for one decorator-generation invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Path to the Rust source file containing the trait
    pub source_path: PathBuf,

    /// Name of the trait to wrap (exact, case-sensitive)
    pub trait_name: String,

    /// Module the trait lives in, referenced by the generated `use` line
    pub module_name: String,

    /// Built-in template identifiers to render
    #[serde(default)]
    pub templates: Vec<String>,

    /// Path to a single external template, overriding `templates`
    #[serde(default)]
    pub template_path: Option<PathBuf>,

    /// Whether to run rendered output through the source formatter
    #[serde(default = "default_format")]
    pub format_code: bool,

    /// Output destination
    #[serde(default)]
    pub output: OutputTarget,

    /// Method names to skip (exact, case-sensitive match)
    #[serde(default)]
    pub ignored_methods: Vec<String>,

    /// Import paths injected verbatim into generated code
    #[serde(default)]
    pub custom_imports: Vec<String>,
}

impl GenerationRequest {
    /// Create a new request with default options (both built-in templates,
    /// formatting on, output to stdout)
    pub fn new(
        source_path: impl Into<PathBuf>,
        trait_name: impl Into<String>,
        module_name: impl Into<String>,
    ) -> Self {
        Self {
            source_path: source_path.into(),
            trait_name: trait_name.into(),
            module_name: module_name.into(),
            templates: default_templates(),
            template_path: None,
            format_code: default_format(),
            output: OutputTarget::Stdout,
            ignored_methods: Vec::new(),
            custom_imports: Vec::new(),
        }
    }

    /// Check that the required fields are present and the source file is
    /// readable. Called by the driver before any work happens.
    pub async fn validate(&self) -> Result<()> {
        if self.trait_name.is_empty() {
            return Err("trait name not specified".into());
        }
        if self.module_name.is_empty() {
            return Err("module name not specified".into());
        }
        if self.source_path.as_os_str().is_empty() {
            return Err("source file containing trait not specified".into());
        }
        if fs::metadata(&self.source_path).await.is_err() {
            return Err(crate::Error::validation(format!(
                "source file not readable: {}",
                self.source_path.display()
            )));
        }
        Ok(())
    }

    /// The output file name used for one template when writing to a directory
    pub fn output_file_name(&self, template_id: &str) -> String {
        format!(
            "{}_with_{}.rs",
            self.trait_name.to_lowercase(),
            template_id
        )
    }

    /// Resolve the output path for one template inside `dir`
    pub fn output_path(&self, dir: &Path, template_id: &str) -> PathBuf {
        dir.join(self.output_file_name(template_id))
    }
}

fn default_format() -> bool {
    true
}

fn default_templates() -> Vec<String> {
    vec!["tracing".to_string(), "metrics".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_validate_requires_trait_name() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("store.rs");
        tokio::fs::write(&src, "pub trait Store {}").await.unwrap();

        let request = GenerationRequest::new(&src, "", "store");
        let err = request.validate().await.unwrap_err();
        assert!(err.to_string().contains("trait name"));
    }

    #[tokio::test]
    async fn test_validate_requires_readable_source() {
        let request = GenerationRequest::new("/definitely/not/there.rs", "Store", "store");
        let err = request.validate().await.unwrap_err();
        assert!(err.to_string().contains("not readable"));
    }

    #[tokio::test]
    async fn test_defaults() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("store.rs");
        tokio::fs::write(&src, "pub trait Store {}").await.unwrap();

        let request = GenerationRequest::new(&src, "Store", "store");
        request.validate().await.unwrap();
        assert_eq!(request.templates, vec!["tracing", "metrics"]);
        assert!(request.format_code);
        assert_eq!(
            request.output_file_name("metrics"),
            "store_with_metrics.rs"
        );
    }
}
