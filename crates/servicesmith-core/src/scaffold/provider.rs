//! Bundled template set for the gRPC-with-gateway project layout.
//!
//! Assets are compiled into the binary. Each entry pairs a destination path
//! template with the file body; both run through Tera against [`Options`].
//! Deployment assets are flavor-specific: `helm/` entries only apply to Helm
//! projects and `kustomize/` entries only to K8s projects, and both land
//! under `deployments/` in the generated tree.

// Internal imports (std, crate)
use std::path::PathBuf;

// External imports (alphabetized)
use tera::Tera;

use crate::error::{Error, Result};

use super::options::{DeploymentType, Options};

/// One file of the project template set
#[derive(Debug, Clone)]
pub struct ScaffoldFile {
    /// Destination path relative to the project root, already rendered
    pub dest: PathBuf,
    /// Template body, rendered later against the same options
    pub body: &'static str,
}

const HELM_PREFIX: &str = "helm/";
const KUSTOMIZE_PREFIX: &str = "kustomize/";

/// Destination path template and body for every bundled asset
const ASSETS: &[(&str, &str)] = &[
    ("Cargo.toml", include_str!("assets/grpcwithgw/Cargo.toml.tera")),
    ("README.md", include_str!("assets/grpcwithgw/README.md.tera")),
    ("Makefile", include_str!("assets/grpcwithgw/Makefile.tera")),
    ("Dockerfile", include_str!("assets/grpcwithgw/Dockerfile.tera")),
    (".gitignore", include_str!("assets/grpcwithgw/gitignore.tera")),
    ("build.rs", include_str!("assets/grpcwithgw/build.rs.tera")),
    (
        "proto/{{ name }}.proto",
        include_str!("assets/grpcwithgw/service.proto.tera"),
    ),
    ("src/main.rs", include_str!("assets/grpcwithgw/main.rs.tera")),
    ("src/server.rs", include_str!("assets/grpcwithgw/server.rs.tera")),
    (
        "src/gateway.rs",
        include_str!("assets/grpcwithgw/gateway.rs.tera"),
    ),
    (
        "kustomize/base/deployment.yaml",
        include_str!("assets/grpcwithgw/kustomize/deployment.yaml.tera"),
    ),
    (
        "kustomize/base/service.yaml",
        include_str!("assets/grpcwithgw/kustomize/service.yaml.tera"),
    ),
    (
        "kustomize/base/kustomization.yaml",
        include_str!("assets/grpcwithgw/kustomize/kustomization.yaml.tera"),
    ),
    (
        "helm/Chart.yaml",
        include_str!("assets/grpcwithgw/helm/Chart.yaml.tera"),
    ),
    (
        "helm/values.yaml",
        include_str!("assets/grpcwithgw/helm/values.yaml.tera"),
    ),
    (
        "helm/templates/deployment.yaml",
        include_str!("assets/grpcwithgw/helm/deployment.yaml.tera"),
    ),
    (
        "helm/templates/service.yaml",
        include_str!("assets/grpcwithgw/helm/service.yaml.tera"),
    ),
];

/// Resolve the template set for one project: render destination paths and
/// select the deployment assets matching the requested flavor.
pub fn project_files(options: &Options) -> Result<Vec<ScaffoldFile>> {
    let context = tera::Context::from_serialize(options)?;
    let mut files = Vec::new();

    for (path_template, body) in ASSETS {
        let dest = Tera::one_off(path_template, &context, false).map_err(|e| {
            Error::template(format!(
                "failed to render scaffold path '{}': {}",
                path_template, e
            ))
        })?;

        let dest = if let Some(rest) = dest.strip_prefix(HELM_PREFIX) {
            if options.deployment_type != DeploymentType::Helm {
                continue;
            }
            format!("deployments/{}", rest)
        } else if let Some(rest) = dest.strip_prefix(KUSTOMIZE_PREFIX) {
            if options.deployment_type != DeploymentType::K8s {
                continue;
            }
            format!("deployments/{}", rest)
        } else {
            dest
        };

        files.push(ScaffoldFile {
            dest: PathBuf::from(dest),
            body,
        });
    }

    log::debug!(
        "resolved {} scaffold file(s) for deployment type {}",
        files.len(),
        options.deployment_type
    );
    Ok(files)
}
