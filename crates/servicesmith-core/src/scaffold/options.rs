//! Options for service scaffolding.
//!
//! [`Options`] carries everything the bundled template set needs. Most
//! fields derive from the module name the way callers expect: the service
//! name is the last path segment, the default image name keeps the last two
//! segments, and the resource name defaults to the capitalized service name.

// Internal imports (std, crate)
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

// External imports (alphabetized)
use serde::Serialize;

use crate::error::{Error, Result};

/// Deployment artifact flavor to bundle with the project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentType {
    /// Kustomize-compatible Kubernetes manifests
    #[default]
    K8s,
    /// Helm chart
    Helm,
}

impl FromStr for DeploymentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "k8s" => Ok(DeploymentType::K8s),
            "helm" => Ok(DeploymentType::Helm),
            _ => Err(Error::validation(format!("unknown deployment type: {}", s))),
        }
    }
}

impl DeploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::K8s => "k8s",
            Self::Helm => "helm",
        }
    }
}

impl fmt::Display for DeploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Options consumed by the scaffold template set
#[derive(Debug, Clone, Serialize)]
pub struct Options {
    /// Service name, the last segment of the module name
    pub name: String,
    /// Full module name, e.g. `github.com/kustomers/contacts`
    pub module_name: String,
    /// Capitalized resource name used in proto and handler names
    pub resource_name: String,
    /// Container image name
    pub image_name: String,
    /// Short description of the service
    pub description: String,
    /// Directory the project is generated under
    pub dst_dir: PathBuf,
    /// Deployment artifact flavor
    pub deployment_type: DeploymentType,
    /// Domain name used in gateway and ingress configuration
    pub domain_name: String,
    /// HTTP route prefix exposed by the gateway
    pub http_route_prefix: String,
    /// Version of the tool that generated the project
    pub tool_version: String,
}

impl Options {
    /// Derive options from a module name. The module name is trimmed of
    /// surrounding whitespace and slashes and must not be empty.
    pub fn new(module_name: &str, dst_dir: impl Into<PathBuf>) -> Result<Self> {
        let module_name = module_name.trim().trim_matches('/').to_string();
        if module_name.is_empty() {
            return Err("module-name cannot be empty".into());
        }

        let parts: Vec<&str> = module_name.split('/').collect();
        let name = parts[parts.len() - 1].trim().to_string();

        let image_name = if parts.len() > 2 {
            format!("{}/{}", parts[parts.len() - 2].trim(), name)
        } else {
            name.clone()
        };

        Ok(Self {
            resource_name: capitalize(&name),
            image_name,
            name,
            module_name,
            description: String::new(),
            dst_dir: dst_dir.into(),
            deployment_type: DeploymentType::default(),
            domain_name: "localhost".to_string(),
            http_route_prefix: "/api/v1".to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }

    /// The directory the finished project is moved to
    pub fn target_dir(&self) -> PathBuf {
        self.dst_dir.join(&self.name)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
