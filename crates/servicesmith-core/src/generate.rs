//! Decorator generation driver.
//!
//! Orchestrates one `wrap` invocation: validate the request, extract the
//! trait's methods, build the method model, resolve templates, then render,
//! optionally format and write each template in resolution order. The first
//! failure aborts the remaining templates; files already written stay on
//! disk (simplicity over atomicity, by explicit choice).

use tokio::fs;

use crate::{
    config::{GenerationRequest, OutputTarget},
    error::Result,
    model,
    reflect,
    templates::{RenderContext, TemplateCatalog},
};

/// Main entry point for decorator generation
pub async fn run(request: &GenerationRequest, catalog: &TemplateCatalog) -> Result<()> {
    request.validate().await?;

    // A missing trait is a valid-but-empty outcome; only an unreadable or
    // unparsable file aborts here.
    let raw = reflect::trait_methods(&request.source_path, &request.trait_name).await?;
    let methods = model::build_methods(&raw, &request.ignored_methods);

    // An external template replaces the built-in catalog for this run.
    let external;
    let (catalog, ids) = match &request.template_path {
        Some(path) => {
            external = TemplateCatalog::from_file(path).await?;
            let ids = external.names().to_vec();
            (&external, ids)
        }
        None => (catalog, catalog.resolve(&request.templates)?),
    };

    let context = RenderContext {
        trait_name: &request.trait_name,
        module_name: &request.module_name,
        methods: &methods,
        custom_imports: &request.custom_imports,
    };

    for id in &ids {
        let mut rendered = catalog.render(id, &context)?;
        if request.format_code {
            rendered = crate::format::format_source(&rendered)?;
        }

        match &request.output {
            OutputTarget::Stdout => print!("{}", rendered),
            OutputTarget::Directory(dir) => {
                fs::create_dir_all(dir).await?;
                let path = request.output_path(dir, id);
                fs::write(&path, &rendered).await?;
                log::debug!("wrote {}", path.display());
            }
        }
    }

    Ok(())
}
