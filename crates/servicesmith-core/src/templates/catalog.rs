//! Template catalog for decorator generation.
//!
//! The catalog owns an immutable `tera::Tera` instance holding the built-in
//! decorator templates plus the helper functions every template (built-in or
//! user-supplied) can call. It is constructed once and passed explicitly to
//! the render driver; nothing mutates it after construction, so one catalog
//! is safe to reuse across invocations.
//!
//! Helper functions registered for all templates:
//! - `is_last(index=, count=)` - whether an index is the last in a sequence
//! - `returns_error(returns=)` - whether the last return value is a `Result`
//! - `last_return_name(returns=)` - the name of that last return value
//!
//! Lower-casing is Tera's built-in `lower` filter.

// Internal imports (std, crate)
use std::collections::HashMap;
use std::path::Path;

// External imports (alphabetized)
use serde::Serialize;
use serde_json::Value;
use tera::Tera;
use tokio::fs;

use crate::error::{Error, Result};
use crate::model::Method;

/// Built-in metrics decorator template
pub const METRICS_TEMPLATE: &str = include_str!("builtin/metrics.rs.tera");

/// Built-in tracing decorator template
pub const TRACING_TEMPLATE: &str = include_str!("builtin/tracing.rs.tera");

/// The parameter contract every template receives
#[derive(Debug, Serialize)]
pub struct RenderContext<'a> {
    /// Name of the wrapped trait
    pub trait_name: &'a str,
    /// Module the trait lives in
    pub module_name: &'a str,
    /// Method model in declaration order
    pub methods: &'a [Method],
    /// Import paths injected verbatim
    pub custom_imports: &'a [String],
}

/// A fixed set of named decorator templates
#[derive(Debug)]
pub struct TemplateCatalog {
    tera: Tera,
    names: Vec<String>,
}

impl TemplateCatalog {
    /// Create the built-in catalog (`metrics` and `tracing`)
    pub fn builtin() -> Result<Self> {
        let mut tera = Tera::default();
        register_helpers(&mut tera);
        tera.add_raw_template("metrics", METRICS_TEMPLATE)?;
        tera.add_raw_template("tracing", TRACING_TEMPLATE)?;
        Ok(Self {
            tera,
            names: vec!["metrics".to_string(), "tracing".to_string()],
        })
    }

    /// Create a single-template catalog from an external template file.
    /// The template identifier is the file stem with any `.rs` suffix
    /// stripped, so `observer.rs.tera` becomes `observer`.
    pub async fn from_file(path: &Path) -> Result<Self> {
        let body = fs::read_to_string(path).await?;
        let id = template_id(path);
        let mut tera = Tera::default();
        register_helpers(&mut tera);
        tera.add_raw_template(&id, &body)?;
        Ok(Self {
            tera,
            names: vec![id],
        })
    }

    /// Identifiers of the templates in this catalog
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Check whether a template identifier is present
    pub fn has_template(&self, id: &str) -> bool {
        self.names.iter().any(|n| n == id)
    }

    /// Map requested identifiers to catalog identifiers, preserving request
    /// order. Lookup is lower-cased; any absent identifier fails the whole
    /// resolution with [`Error::UnknownTemplate`].
    pub fn resolve(&self, requested: &[String]) -> Result<Vec<String>> {
        requested
            .iter()
            .map(|name| {
                let id = name.to_lowercase();
                if self.has_template(&id) {
                    Ok(id)
                } else {
                    Err(Error::UnknownTemplate(name.clone()))
                }
            })
            .collect()
    }

    /// Render one template against the shared parameter contract
    pub fn render(&self, id: &str, context: &RenderContext<'_>) -> Result<String> {
        let tera_context = tera::Context::from_serialize(context)?;
        self.tera.render(id, &tera_context).map_err(|e| {
            Error::template(format!("failed to render template '{}': {}", id, e))
        })
    }
}

fn template_id(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("custom")
        .replace(".rs", "")
}

fn register_helpers(tera: &mut Tera) {
    tera.register_function("is_last", is_last);
    tera.register_function("returns_error", returns_error);
    tera.register_function("last_return_name", last_return_name);
}

fn is_last(args: &HashMap<String, Value>) -> tera::Result<Value> {
    let index = args
        .get("index")
        .and_then(Value::as_u64)
        .ok_or_else(|| tera::Error::msg("is_last requires an `index` argument"))?;
    let count = args
        .get("count")
        .and_then(Value::as_u64)
        .ok_or_else(|| tera::Error::msg("is_last requires a `count` argument"))?;
    Ok(Value::Bool(index + 1 == count))
}

fn returns_error(args: &HashMap<String, Value>) -> tera::Result<Value> {
    let returns = returns_arg(args)?;
    let is_error = returns
        .last()
        .and_then(|arg| arg.get("ty"))
        .and_then(Value::as_str)
        .map(is_result_type)
        .unwrap_or(false);
    Ok(Value::Bool(is_error))
}

fn last_return_name(args: &HashMap<String, Value>) -> tera::Result<Value> {
    let returns = returns_arg(args)?;
    let name = returns
        .last()
        .and_then(|arg| arg.get("name"))
        .and_then(Value::as_str)
        .unwrap_or("");
    Ok(Value::String(name.to_string()))
}

fn returns_arg(args: &HashMap<String, Value>) -> tera::Result<&Vec<Value>> {
    args.get("returns")
        .and_then(Value::as_array)
        .ok_or_else(|| tera::Error::msg("expected a `returns` argument holding an array"))
}

/// The error-kind check: the type's head path segment is `Result`, covering
/// `Result<..>`, `anyhow::Result<..>` and friends. Purely textual, like the
/// rest of the pipeline.
fn is_result_type(ty: &str) -> bool {
    let head = ty.split('<').next().unwrap_or(ty).trim();
    head.rsplit("::").next() == Some("Result")
}
