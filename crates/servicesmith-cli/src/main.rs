//! servicesmith CLI entrypoint
//! Parses command-line arguments and dispatches to the core generator.

// Internal imports (std, crate)
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

// External imports (alphabetized)
use clap::Parser;
use servicesmith_core::scaffold;
use servicesmith_core::{GenerationRequest, OutputTarget, TemplateCatalog};
use tracing_subscriber::EnvFilter;

mod term;

use term::Term;

#[derive(Parser)]
#[command(name = "servicesmith")]
#[command(author, version, about = "Generate trait decorators and service scaffolding", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Only log errors
    #[arg(long, global = true)]
    silent: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate decorator implementations for a trait
    Wrap {
        /// Rust source file containing the trait
        #[arg(long, short = 'f')]
        file: PathBuf,
        /// Name of the trait to wrap
        #[arg(long, short = 't')]
        trait_name: String,
        /// Module the trait lives in, used in the generated `use` line
        #[arg(long, short = 'm')]
        module_name: String,
        /// Path to a custom template file, overriding --templates
        #[arg(long)]
        template_path: Option<PathBuf>,
        /// Built-in templates to render
        #[arg(long, value_delimiter = ',', default_values_t = ["tracing".to_string(), "metrics".to_string()])]
        templates: Vec<String>,
        /// Run generated code through the formatter
        #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
        format: bool,
        /// Output directory, or "-" for stdout
        #[arg(long, short = 'o', default_value = "-")]
        output_dir: String,
        /// Method names to skip
        #[arg(long, value_delimiter = ',')]
        ignore: Vec<String>,
        /// Extra import paths injected into generated code
        #[arg(long, value_delimiter = ',')]
        imports: Vec<String>,
    },
    /// Scaffold a new gRPC service project with an HTTP gateway
    New {
        /// Module name, e.g. github.com/kustomers/contacts
        #[arg(long, short = 'm')]
        module_name: String,
        /// Short description of the service
        #[arg(long, short = 'd', default_value = "")]
        description: String,
        /// Container image name (default: derived from the module name)
        #[arg(long)]
        image_name: Option<String>,
        /// Resource name used in proto and handler names (default: capitalized service name)
        #[arg(long)]
        resource: Option<String>,
        /// Deployment artifacts to bundle: k8s or helm
        #[arg(long, default_value = "k8s")]
        deployment_type: String,
        /// Domain name used in gateway configuration
        #[arg(long, default_value = "localhost")]
        domain_name: String,
        /// HTTP route prefix exposed by the gateway
        #[arg(long, default_value = "/api/v1")]
        http_route_prefix: String,
        /// Directory to generate the project under
        #[arg(long, short = 'p', default_value = ".")]
        path: PathBuf,
    },
    /// Print version and build information
    Version,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "debug"
    } else if cli.silent {
        "error"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with_target(false)
        .init();

    let term = Term::new(std::io::stdout().is_terminal(), cli.silent);
    tracing::debug!("debug logging enabled");

    match run(cli, term).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            term.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, term: Term) -> anyhow::Result<()> {
    match cli.command {
        Commands::Wrap {
            file,
            trait_name,
            module_name,
            template_path,
            templates,
            format,
            output_dir,
            ignore,
            imports,
        } => {
            let mut request = GenerationRequest::new(file, &trait_name, module_name);
            request.templates = templates;
            request.template_path = template_path;
            request.format_code = format;
            request.ignored_methods = ignore;
            request.custom_imports = imports;
            request.output = if output_dir == "-" {
                OutputTarget::Stdout
            } else {
                OutputTarget::Directory(PathBuf::from(&output_dir))
            };

            let catalog = TemplateCatalog::builtin()?;
            servicesmith_core::run(&request, &catalog).await?;

            if !matches!(request.output, OutputTarget::Stdout) {
                term.success(&format!(
                    "generated decorators for {} in {}",
                    trait_name, output_dir
                ));
            }
            Ok(())
        }
        Commands::New {
            module_name,
            description,
            image_name,
            resource,
            deployment_type,
            domain_name,
            http_route_prefix,
            path,
        } => {
            let mut options = scaffold::Options::new(&module_name, path)?;
            options.description = description;
            options.deployment_type = deployment_type.parse()?;
            options.domain_name = domain_name;
            options.http_route_prefix = http_route_prefix;
            if let Some(image_name) = image_name {
                options.image_name = image_name;
            }
            if let Some(resource) = resource {
                options.resource_name = resource;
            }

            let target = scaffold::generate(&options).await?;
            term.success(&format!("created project at {}", target.display()));
            term.note(&format!(
                "next: cd {} && make build",
                target.display()
            ));
            Ok(())
        }
        Commands::Version => {
            term.plain(&format!(
                "servicesmith {} ({}, {})",
                env!("CARGO_PKG_VERSION"),
                option_env!("GIT_COMMIT").unwrap_or("unknown"),
                option_env!("BUILD_TIME").unwrap_or("unknown"),
            ));
            term.plain(&format!(
                "platform: {}/{}",
                std::env::consts::OS,
                std::env::consts::ARCH
            ));
            Ok(())
        }
    }
}
