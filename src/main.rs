use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use pagesplit::{ChunkDocument, DEFAULT_CHUNK_SIZE, DocumentContext, PageMap};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Chunk or parse page-level text extracted from a document
#[derive(Parser, Debug)]
#[command(name = "pagesplit", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Wrap a page map into a loaded document (one chunk per page)
    Load {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Split pages into retrieval chunks
    Chunk {
        #[command(flatten)]
        input: InputArgs,

        /// by_pages, fixed_size, by_paragraphs or by_sentences
        #[arg(short, long)]
        method: String,

        /// Character budget for fixed_size
        #[arg(long, env = "PAGESPLIT_CHUNK_SIZE", default_value_t = DEFAULT_CHUNK_SIZE)]
        chunk_size: usize,
    },
    /// Parse pages into sections, paragraphs and tables
    Parse {
        #[command(flatten)]
        input: InputArgs,

        /// all_text, by_pages, by_titles or text_and_tables
        #[arg(short, long)]
        method: String,
    },
}

#[derive(Args, Debug)]
struct InputArgs {
    /// JSON page map: [{"page": 1, "text": "..."}, ...]
    input: PathBuf,

    /// Read the input as a previously loaded document instead of a page map
    #[arg(long)]
    loaded: bool,

    /// Filename recorded in the output (page map input only; defaults to the
    /// input file name)
    #[arg(long)]
    filename: Option<String>,

    /// Extraction backend recorded in the output
    #[arg(long, env = "PAGESPLIT_LOADING_METHOD")]
    loading_method: Option<String>,

    /// Write JSON here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        return Err(e);
    }

    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Load { input } => {
            let context = load_context(&input)?;
            write_json(&context.loaded(), input.output.as_deref())
        }
        Command::Chunk {
            input,
            method,
            chunk_size,
        } => {
            let context = load_context(&input)?;
            let document = context
                .chunk(&method, Some(chunk_size))
                .with_context(|| format!("Failed to chunk {}", context.filename()))?;
            write_json(&document, input.output.as_deref())
        }
        Command::Parse { input, method } => {
            let context = load_context(&input)?;
            let document = context
                .parse(&method)
                .with_context(|| format!("Failed to parse {}", context.filename()))?;
            write_json(&document, input.output.as_deref())
        }
    }
}

fn load_context(args: &InputArgs) -> Result<DocumentContext> {
    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read input: {}", args.input.display()))?;

    let context = if args.loaded {
        let document: ChunkDocument =
            serde_json::from_str(&raw).context("Failed to parse loaded document")?;
        DocumentContext::from_loaded(&document)?
    } else {
        let page_map = PageMap::from_json(&raw)
            .with_context(|| format!("Invalid page map: {}", args.input.display()))?;
        let filename = args
            .filename
            .clone()
            .unwrap_or_else(|| default_filename(&args.input));
        DocumentContext::new(filename, page_map)
    };

    let context = match &args.loading_method {
        Some(method) => context.loading_method(method.clone()),
        None => context,
    };

    info!(
        input = %args.input.display(),
        pages = context.page_map().len(),
        "loaded page map"
    );

    Ok(context)
}

fn default_filename(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;

    match output {
        Some(path) => {
            fs::write(path, json.as_bytes())
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            info!(output = %path.display(), "wrote document");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(json.as_bytes())
                .and_then(|_| stdout.write_all(b"\n"))
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}
