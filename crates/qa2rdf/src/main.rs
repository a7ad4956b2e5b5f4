use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use qa2rdf::convert::{load_dump, write_ontology, DumpConverter};
use qa2rdf::model::{vocab, SiteIris};
use qa2rdf::writer::TurtleWriter;

/// Convert Q&A site data dumps to RDF Turtle.
#[derive(Parser)]
#[command(name = "qa2rdf", version, about)]
struct Cli {
    /// Path to the dump JSON file.
    input: PathBuf,

    /// Output file path [default: stdout].
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Base URI for entity IRIs.
    #[arg(short, long, value_name = "URI", default_value = "http://qa.example/sites")]
    base_uri: String,

    /// Override the site name from the dump.
    #[arg(long, value_name = "NAME")]
    site: Option<String>,

    /// Treat the dump as a meta site regardless of what it says.
    #[arg(long)]
    meta: bool,

    /// Don't write the ontology block.
    #[arg(long)]
    no_ontology: bool,

    /// Verbose output.
    #[arg(short, long)]
    verbose: bool,

    /// Quiet output.
    #[arg(short, long)]
    quiet: bool,
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(input = %cli.input.display(), "loading dump");
    let dump = load_dump(&cli.input)?;

    let site_name = cli.site.as_deref().unwrap_or(&dump.site.name);
    let is_meta = cli.meta || dump.site.is_meta;
    let iris = SiteIris::new(&cli.base_uri, site_name, is_meta);

    let mut namespaces = vocab::default_namespaces();
    iris.declare_namespaces(&mut namespaces);

    let output: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let mut writer = TurtleWriter::new(output, namespaces)?;
    if !cli.no_ontology {
        write_ontology(&mut writer)?;
    }
    let report = DumpConverter::new(&mut writer, &iris).convert(&dump)?;
    tracing::debug!(?report, "conversion finished");
    let stats = writer.finish()?;

    if !cli.quiet {
        eprintln!(
            "Wrote {} triples ({} bytes) for site {site_name}",
            stats.triples, stats.bytes
        );
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let default_filter = if cli.verbose {
        "qa2rdf=debug"
    } else if cli.quiet {
        "qa2rdf=error"
    } else {
        "qa2rdf=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
