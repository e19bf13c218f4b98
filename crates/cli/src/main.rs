//! openapi-n8n CLI
//!
//! Command-line interface for converting OpenAPI / Swagger documents into
//! importable n8n workflows.

mod fetch;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use openapi_n8n_common::HttpMethod;
use openapi_n8n_generator::{
    assemble, select, AuthHeaderValues, ConvertOptions, Converter, Selection,
};
use openapi_n8n_parser::{detect_dialect, parse_spec, resolve_base_url, SpecDocument};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "openapi-n8n")]
#[command(version, about = "Convert OpenAPI specs into n8n HTTP Request workflows", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a spec into an n8n workflow document
    #[command(after_help = "EXAMPLES:\n  \
        # Convert a local spec and print the workflow\n  \
        openapi-n8n convert petstore.yaml\n\n  \
        # Fetch a remote spec and write the workflow to a file\n  \
        openapi-n8n convert https://petstore.swagger.io/v2/swagger.json \\\n    \
        --output petstore-workflow.json\n\n  \
        # Point every node at a local server, GET operations only\n  \
        openapi-n8n convert openapi.json \\\n    \
        --base-url http://localhost:8080 \\\n    \
        --method GET\n\n  \
        # Read the spec from stdin\n  \
        cat openapi.json | openapi-n8n convert -")]
    Convert {
        /// Spec file path, http(s) URL, or "-" for stdin
        source: String,

        /// Base URL prepended to every path (overrides the spec's servers)
        #[arg(long, env = "OPENAPI_N8N_BASE_URL")]
        base_url: Option<String>,

        /// Comma-separated node names to keep (e.g., "listUsers,GET /health")
        #[arg(long, value_delimiter = ',')]
        select: Option<Vec<String>>,

        /// Comma-separated HTTP methods to keep (e.g., "GET,POST")
        #[arg(long, value_delimiter = ',', value_parser = parse_method)]
        method: Option<Vec<HttpMethod>>,

        /// Fill auth headers with credential templates like "Bearer {{token}}"
        #[arg(long)]
        templated_auth: bool,

        /// Write compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Display what a spec would convert into
    #[command(after_help = "EXAMPLES:\n  \
        # Inspect a local spec\n  \
        openapi-n8n inspect openapi.yaml\n\n  \
        # Inspect a remote spec\n  \
        openapi-n8n inspect https://petstore.swagger.io/v2/swagger.json")]
    Inspect {
        /// Spec file path, http(s) URL, or "-" for stdin
        source: String,
    },
}

fn parse_method(s: &str) -> std::result::Result<HttpMethod, String> {
    HttpMethod::parse(s).ok_or_else(|| format!("unknown HTTP method: {}", s))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Convert {
            source,
            base_url,
            select,
            method,
            templated_auth,
            compact,
            output,
        } => {
            convert_command(ConvertConfig {
                source: &source,
                base_url: base_url.as_deref(),
                names: select,
                methods: method,
                templated_auth,
                compact,
                output: output.as_deref(),
            })?;
        }
        Commands::Inspect { source } => {
            inspect_command(&source, cli.verbose)?;
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout stays a clean JSON document
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// A parsed spec plus where it came from
struct LoadedSpec {
    doc: SpecDocument,
    /// Set when the spec was fetched over http(s)
    source_url: Option<String>,
}

impl LoadedSpec {
    fn title(&self) -> &str {
        self.doc.title().unwrap_or("Untitled API")
    }

    /// Explicit override, then the spec's own servers, then the fetch origin
    fn base_url(&self, explicit: Option<&str>) -> String {
        if let Some(url) = explicit {
            return url.to_string();
        }

        let resolved = resolve_base_url(&self.doc);
        if !resolved.is_empty() {
            return resolved;
        }

        let origin = self
            .source_url
            .as_deref()
            .map(fetch::origin_of)
            .unwrap_or_default();
        if origin.is_empty() {
            tracing::warn!("No base URL available; node URLs will be bare paths");
        } else {
            tracing::debug!(%origin, "Using fetch origin as base URL");
        }
        origin
    }
}

fn load_source(source: &str) -> Result<LoadedSpec> {
    let (text, source_url) = if source == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read spec from stdin")?;
        (text, None)
    } else if fetch::is_remote(source) {
        eprintln!("{} Fetching spec: {}", "→".cyan(), source);
        let text = fetch::fetch(source).with_context(|| format!("Failed to fetch {}", source))?;
        (text, Some(source.to_string()))
    } else {
        let text = std::fs::read_to_string(source)
            .with_context(|| format!("Failed to read spec file {}", source))?;
        (text, None)
    };

    let doc = parse_spec(&text).context("Failed to parse spec")?;
    Ok(LoadedSpec { doc, source_url })
}

/// Combine --select and --method into the node filters to apply
fn selections(names: Option<Vec<String>>, methods: Option<Vec<HttpMethod>>) -> Vec<Selection> {
    let mut selections = Vec::new();
    if let Some(names) = names {
        selections.push(Selection::Names(names));
    }
    if let Some(methods) = methods {
        selections.push(Selection::Methods(methods));
    }
    selections
}

struct ConvertConfig<'a> {
    source: &'a str,
    base_url: Option<&'a str>,
    names: Option<Vec<String>>,
    methods: Option<Vec<HttpMethod>>,
    templated_auth: bool,
    compact: bool,
    output: Option<&'a Path>,
}

fn convert_command(config: ConvertConfig) -> Result<()> {
    let spec = load_source(config.source)?;
    let base_url = spec.base_url(config.base_url);

    let header_values = if config.templated_auth {
        AuthHeaderValues::Templated
    } else {
        AuthHeaderValues::Blank
    };
    let options = ConvertOptions::default().with_auth_header_values(header_values);

    let mut nodes = Converter::new(&spec.doc)
        .with_options(options)
        .convert(&base_url);
    let total = nodes.len();

    for selection in selections(config.names, config.methods) {
        nodes = select(nodes, &selection);
    }
    if nodes.is_empty() && total > 0 {
        bail!("No operations matched the selection ({} available)", total);
    }

    let workflow = assemble(nodes);
    let count = workflow.nodes.len();
    let json = if config.compact {
        workflow.to_json()
    } else {
        workflow.to_json_pretty()
    }
    .context("Failed to serialize workflow")?;

    match config.output {
        Some(path) => {
            std::fs::write(path, json + "\n")
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("{} Wrote {}", "✓".green(), path.display());
        }
        None => println!("{}", json),
    }

    eprintln!(
        "{} Converted \"{}\" with {} nodes",
        "✓".green(),
        spec.title(),
        count
    );

    Ok(())
}

fn inspect_command(source: &str, verbose: bool) -> Result<()> {
    let spec = load_source(source)?;
    let doc = &spec.doc;
    let dialect = detect_dialect(doc);
    let base_url = spec.base_url(None);

    println!("\n{}", "API Definition:".bold());
    println!("  Title: {}", spec.title().yellow());
    println!(
        "  Version: {}",
        doc.api_version().unwrap_or_else(|| "-".to_string()).yellow()
    );
    match dialect.version(doc) {
        Some(version) => println!("  Dialect: {} ({})", dialect, version),
        None => println!("  Dialect: {}", dialect),
    }

    let servers = dialect.servers(doc);
    if !servers.is_empty() {
        println!("  Servers:");
        for server in &servers {
            match &server.description {
                Some(description) => println!("    • {} ({})", server.url.cyan(), description),
                None => println!("    • {}", server.url.cyan()),
            }
        }
    }

    if base_url.is_empty() {
        println!("  Base URL: {}", "(none)".dimmed());
    } else {
        println!("  Base URL: {}", base_url.cyan());
    }

    let nodes = Converter::new(doc).convert(&base_url);
    println!("\n{} ({})", "Operations:".bold(), nodes.len());
    for ((path, method, operation), node) in doc.operations().zip(&nodes) {
        let method = format!("{:<7}", method.as_str());
        println!("  {} {}  {}", method.as_str().green(), path, node.name.yellow());
        if verbose {
            if let Some(summary) = operation.summary.as_deref().filter(|s| !s.is_empty()) {
                println!("          {}", summary.dimmed());
            }
        }
    }

    Ok(())
}
