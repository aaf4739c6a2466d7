//! End-to-end tests for decorator generation against real source files.

use servicesmith_core::{
    config::{GenerationRequest, OutputTarget},
    generate,
    templates::TemplateCatalog,
    Error,
};
use tempfile::tempdir;

const STORE_SOURCE: &str = r#"
pub trait Store {
    /// Fetch a record by key.
    fn get(&self, key: &str) -> Result<String, crate::store::Error>;
    fn close(&mut self) -> Result<(), crate::store::Error>;
}
"#;

async fn write_store_source(dir: &std::path::Path) -> std::path::PathBuf {
    let src = dir.join("store.rs");
    tokio::fs::write(&src, STORE_SOURCE).await.unwrap();
    src
}

#[tokio::test]
async fn test_wrap_writes_one_file_per_template() {
    let dir = tempdir().unwrap();
    let src = write_store_source(dir.path()).await;
    let out = dir.path().join("out");

    let mut request = GenerationRequest::new(&src, "Store", "store");
    request.output = OutputTarget::Directory(out.clone());

    let catalog = TemplateCatalog::builtin().unwrap();
    generate::run(&request, &catalog).await.unwrap();

    let mut names: Vec<String> = std::fs::read_dir(&out)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["store_with_metrics.rs", "store_with_tracing.rs"]);
}

#[tokio::test]
async fn test_wrap_output_parses_as_rust() {
    let dir = tempdir().unwrap();
    let src = write_store_source(dir.path()).await;
    let out = dir.path().join("out");

    let mut request = GenerationRequest::new(&src, "Store", "store");
    request.output = OutputTarget::Directory(out.clone());

    let catalog = TemplateCatalog::builtin().unwrap();
    generate::run(&request, &catalog).await.unwrap();

    for name in ["store_with_metrics.rs", "store_with_tracing.rs"] {
        let body = std::fs::read_to_string(out.join(name)).unwrap();
        syn::parse_file(&body).unwrap_or_else(|e| panic!("{} does not parse: {}", name, e));
        assert!(body.contains("use crate::store::Store;"));
        assert!(body.contains("fn get"));
    }
}

#[tokio::test]
async fn test_unknown_template_fails_before_any_file_is_written() {
    let dir = tempdir().unwrap();
    let src = write_store_source(dir.path()).await;
    let out = dir.path().join("out");

    let mut request = GenerationRequest::new(&src, "Store", "store");
    request.templates = vec!["tracing".to_string(), "bogus".to_string()];
    request.output = OutputTarget::Directory(out.clone());

    let catalog = TemplateCatalog::builtin().unwrap();
    let err = generate::run(&request, &catalog).await.unwrap_err();
    assert!(matches!(err, Error::UnknownTemplate(_)));
    assert!(err.to_string().contains("bogus"));
    assert!(!out.exists());
}

#[tokio::test]
async fn test_ignored_methods_are_not_rendered() {
    let dir = tempdir().unwrap();
    let src = write_store_source(dir.path()).await;
    let out = dir.path().join("out");

    let mut request = GenerationRequest::new(&src, "Store", "store");
    request.templates = vec!["metrics".to_string()];
    request.ignored_methods = vec!["close".to_string()];
    request.format_code = false;
    request.output = OutputTarget::Directory(out.clone());

    let catalog = TemplateCatalog::builtin().unwrap();
    generate::run(&request, &catalog).await.unwrap();

    let body = std::fs::read_to_string(out.join("store_with_metrics.rs")).unwrap();
    assert!(body.contains(r#""method" => "get""#));
    // close is skipped; no metric is recorded for it
    assert!(!body.contains(r#""method" => "close""#));
}

#[tokio::test]
async fn test_external_template_replaces_builtins() {
    let dir = tempdir().unwrap();
    let src = write_store_source(dir.path()).await;
    let out = dir.path().join("out");

    let template = dir.path().join("stub.rs.tera");
    tokio::fs::write(
        &template,
        "//! stub for {{ trait_name }}\npub struct {{ trait_name }}Stub;\n",
    )
    .await
    .unwrap();

    let mut request = GenerationRequest::new(&src, "Store", "store");
    request.template_path = Some(template);
    request.output = OutputTarget::Directory(out.clone());

    let catalog = TemplateCatalog::builtin().unwrap();
    generate::run(&request, &catalog).await.unwrap();

    let names: Vec<String> = std::fs::read_dir(&out)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["store_with_stub.rs"]);

    let body = std::fs::read_to_string(out.join("store_with_stub.rs")).unwrap();
    assert!(body.contains("pub struct StoreStub;"));
}

#[tokio::test]
async fn test_block_doc_comment_survives_the_format_step() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("store.rs");
    tokio::fs::write(
        &src,
        "pub trait Store {\n    /** Fetch a record\n    by key. */\n    fn get(&self, key: &str) -> Result<String, crate::store::Error>;\n}\n",
    )
    .await
    .unwrap();
    let out = dir.path().join("out");

    let mut request = GenerationRequest::new(&src, "Store", "store");
    request.templates = vec!["metrics".to_string()];
    request.output = OutputTarget::Directory(out.clone());

    let catalog = TemplateCatalog::builtin().unwrap();
    generate::run(&request, &catalog).await.unwrap();

    let body = std::fs::read_to_string(out.join("store_with_metrics.rs")).unwrap();
    syn::parse_file(&body).unwrap();
    assert!(body.contains("Fetch a record"));
    assert!(body.contains("by key."));
}

#[tokio::test]
async fn test_missing_trait_renders_empty_decorators() {
    let dir = tempdir().unwrap();
    let src = write_store_source(dir.path()).await;
    let out = dir.path().join("out");

    let mut request = GenerationRequest::new(&src, "Nonexistent", "store");
    request.templates = vec!["tracing".to_string()];
    request.output = OutputTarget::Directory(out.clone());

    let catalog = TemplateCatalog::builtin().unwrap();
    generate::run(&request, &catalog).await.unwrap();

    let body = std::fs::read_to_string(out.join("nonexistent_with_tracing.rs")).unwrap();
    syn::parse_file(&body).unwrap();
    assert!(body.contains("NonexistentWithTracing"));
}
