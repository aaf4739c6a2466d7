//! Scaffold builder: renders the template set into a staging directory and
//! moves it into place.
//!
//! The staging directory is created next to the destination so the final
//! rename stays on one filesystem. The rename is the commit point: an
//! existing destination is rejected before any file is rendered, and a
//! failed run leaves nothing behind but the temp directory cleanup.

// External imports (alphabetized)
use std::path::PathBuf;

use tera::Tera;
use tokio::fs;

use crate::error::{Error, Result};

use super::options::Options;
use super::provider;

/// Generate a new project from the bundled template set. Returns the path
/// of the generated project directory.
pub async fn generate(options: &Options) -> Result<PathBuf> {
    let target = options.target_dir();
    if fs::try_exists(&target).await? {
        return Err(Error::ExistingDestination(target));
    }

    let files = provider::project_files(options)?;
    let context = tera::Context::from_serialize(options)?;

    fs::create_dir_all(&options.dst_dir).await?;
    let staging = tempfile::Builder::new()
        .prefix(".servicesmith-")
        .tempdir_in(&options.dst_dir)?;
    log::debug!("staging scaffold in {}", staging.path().display());

    for file in &files {
        let dest = staging.path().join(&file.dest);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).await?;
        }

        let rendered = Tera::one_off(file.body, &context, false).map_err(|e| {
            Error::template(format!(
                "failed to render scaffold file '{}': {}",
                file.dest.display(),
                e
            ))
        })?;
        fs::write(&dest, rendered).await?;
    }

    // Same-filesystem rename; the TempDir guard is disarmed only once the
    // staged tree is complete.
    let staged = staging.into_path();
    fs::rename(&staged, &target).await?;
    log::info!("generated project at {}", target.display());

    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaffold::options::DeploymentType;
    use tempfile::tempdir;

    fn options_in(dst: &std::path::Path) -> Options {
        let mut options = Options::new("github.com/kustomers/contacts", dst).unwrap();
        options.description = "contact management".to_string();
        options
    }

    #[tokio::test]
    async fn test_generate_k8s_project() {
        let dst = tempdir().unwrap();
        let options = options_in(dst.path());

        let target = generate(&options).await.unwrap();
        assert_eq!(target, dst.path().join("contacts"));
        assert!(target.join("Cargo.toml").exists());
        assert!(target.join("proto/contacts.proto").exists());
        assert!(target.join("deployments/base/deployment.yaml").exists());

        let manifest = std::fs::read_to_string(target.join("Cargo.toml")).unwrap();
        assert!(manifest.contains("name = \"contacts\""));
        assert!(manifest.contains("contact management"));

        // staging directory is gone after the rename
        let leftovers: Vec<_> = std::fs::read_dir(dst.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().starts_with(".servicesmith-"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[tokio::test]
    async fn test_generate_helm_project_keeps_helm_syntax() {
        let dst = tempdir().unwrap();
        let mut options = options_in(dst.path());
        options.deployment_type = DeploymentType::Helm;

        let target = generate(&options).await.unwrap();
        assert!(target.join("deployments/Chart.yaml").exists());

        // helm's own placeholders survive our rendering pass
        let deployment =
            std::fs::read_to_string(target.join("deployments/templates/deployment.yaml")).unwrap();
        assert!(deployment.contains("{{ .Values.image.repository }}"));
        assert!(deployment.contains("kustomers/contacts"));
    }

    #[tokio::test]
    async fn test_existing_destination_is_rejected_without_writes() {
        let dst = tempdir().unwrap();
        let options = options_in(dst.path());
        std::fs::create_dir_all(dst.path().join("contacts")).unwrap();

        let err = generate(&options).await.unwrap_err();
        assert!(matches!(err, Error::ExistingDestination(_)));

        // the pre-existing directory was left untouched
        let entries: Vec<_> = std::fs::read_dir(dst.path().join("contacts"))
            .unwrap()
            .collect();
        assert!(entries.is_empty());
    }
}
