//! swagger2ts CLI entrypoint
//! Parses command-line arguments and dispatches to the application use cases.
#![deny(unsafe_code)]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

use swagger2ts::application::{
    ExportTemplatesUseCase, GenerateClientRequest, GenerateClientUseCase,
    InspectDescriptionUseCase, ListTemplatesUseCase,
};
use swagger2ts::generation::{BuildOptions, DEFAULT_CLIENT_FILE};
use swagger2ts::infrastructure::openapi::CompositeDescriptionLoader;
use swagger2ts::infrastructure::output::FileSystemOutputService;
use swagger2ts::infrastructure::templates::{
    DEFAULT_TEMPLATE_SET, EmbeddedTemplateRepository, FileSystemTemplateLoader,
};

#[derive(Parser)]
#[command(name = "swagger2ts")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Default log level; RUST_LOG directives still apply on top
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate a TypeScript client from a Swagger 2.0 description
    Generate {
        /// Description file path or HTTP(S) URL
        #[arg(long, short)]
        input: String,
        /// Output directory
        #[arg(long, short)]
        output: PathBuf,
        /// File name of the client class
        #[arg(long, default_value = DEFAULT_CLIENT_FILE)]
        client_file: String,
        /// Embedded template set
        #[arg(long, default_value = DEFAULT_TEMPLATE_SET)]
        template: String,
        /// Directory with custom templates (overrides --template)
        #[arg(long)]
        template_dir: Option<PathBuf>,
        /// Generate a server-side (Node) client
        #[arg(long)]
        node: bool,
    },
    /// Print the intermediate representation as JSON
    Inspect {
        /// Description file path or HTTP(S) URL
        #[arg(long, short)]
        input: String,
        #[arg(long)]
        node: bool,
    },
    /// Manage embedded templates
    Templates {
        #[command(subcommand)]
        action: TemplateCommands,
    },
}

#[derive(clap::Subcommand, Debug)]
pub enum TemplateCommands {
    /// List embedded template sets
    List,
    /// Copy an embedded template set to a directory for customization
    Export {
        /// Destination directory
        output: PathBuf,
        #[arg(long, default_value = DEFAULT_TEMPLATE_SET)]
        template: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_directive: Directive = cli
        .log_level
        .parse()
        .with_context(|| format!("Invalid log level: {}", cli.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(default_directive))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Generate {
            input,
            output,
            client_file,
            template,
            template_dir,
            node,
        } => {
            let request = GenerateClientRequest {
                input,
                output_dir: output,
                client_file,
                template,
                template_dir,
                is_node: node,
            };
            generate(request).await?
        }
        Commands::Inspect { input, node } => inspect(&input, node).await?,
        Commands::Templates { action } => match action {
            TemplateCommands::List => {
                let use_case = ListTemplatesUseCase::new(EmbeddedTemplateRepository::new());
                print!("{}", use_case.execute());
            }
            TemplateCommands::Export { output, template } => {
                let use_case = ExportTemplatesUseCase::new(EmbeddedTemplateRepository::new());
                let count = use_case
                    .execute(&template, &output)
                    .with_context(|| format!("Failed to export template set '{template}'"))?;
                println!("Exported {count} templates to {}", output.display());
            }
        },
    }
    Ok(())
}

async fn generate(request: GenerateClientRequest) -> anyhow::Result<()> {
    info!("Starting swagger2ts");
    let input = request.input.clone();

    let use_case = GenerateClientUseCase::new(
        Arc::new(CompositeDescriptionLoader::new()),
        Arc::new(EmbeddedTemplateRepository::new()),
        Arc::new(FileSystemTemplateLoader::new()),
        Arc::new(FileSystemOutputService::new()),
    );

    let response = use_case
        .execute(request)
        .await
        .with_context(|| format!("Failed to generate client from {input}"))?;

    info!(
        "✅ Generated {} methods, {} models and {} enums ({} files) in {}",
        response.methods,
        response.models,
        response.enums,
        response.artifacts_count,
        response.output_path.display()
    );
    Ok(())
}

async fn inspect(input: &str, node: bool) -> anyhow::Result<()> {
    let use_case = InspectDescriptionUseCase::new(Arc::new(CompositeDescriptionLoader::new()));
    let view_model = use_case
        .execute(input, BuildOptions { is_node: node })
        .await
        .with_context(|| format!("Failed to inspect {input}"))?;

    let json = serde_json::to_string_pretty(&view_model).context("Failed to serialize IR")?;
    println!("{json}");
    Ok(())
}
