use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use sha2::Digest as _;
use tracing_subscriber::EnvFilter;

use photo_annotator::{
    Annotator, BatchOptions, CaptionStyle, InteractiveOptions, NoEmbeddedTimestamps,
    TerminalPrompt,
};

#[derive(Parser, Debug)]
#[command(name = "photo-annotator", version)]
struct Cli {
    /// Caption style JSON (font, colours, shadow offset, signature).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Font file path or system family name; overrides the config and $PHOTO_ANNOTATOR_FONT.
    #[arg(long, global = true)]
    font: Option<String>,

    /// Print the resolved caption font (family name + SHA-256 of font bytes).
    #[arg(long, global = true)]
    dump_font: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prompt for caption fields photo by photo.
    Interactive(InteractiveArgs),
    /// Caption every photo listed in a metadata CSV.
    Batch(BatchArgs),
}

#[derive(Parser, Debug)]
struct InteractiveArgs {
    /// Directory of photos.
    #[arg(long)]
    images: PathBuf,

    /// Output directory. Defaults to `Prints` next to the photo directory.
    #[arg(long)]
    out: Option<PathBuf>,

    /// File name of the first photo to annotate.
    #[arg(long)]
    start: Option<String>,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// Directory the CSV file names are relative to.
    #[arg(long)]
    images: PathBuf,

    /// Metadata CSV with a header row.
    #[arg(long)]
    csv: PathBuf,

    /// Output directory. Defaults to `Prints` next to the photo directory.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut annotator = make_annotator(cli.config.as_deref(), cli.font.as_deref())?;
    if cli.dump_font {
        dump_font_diagnostics(&annotator);
    }

    match cli.cmd {
        Command::Interactive(args) => cmd_interactive(args, &mut annotator),
        Command::Batch(args) => cmd_batch(args, &mut annotator),
    }
}

fn make_annotator(config: Option<&Path>, font: Option<&str>) -> anyhow::Result<Annotator> {
    let style = match config {
        Some(path) => CaptionStyle::load_json(path)?,
        None => CaptionStyle::default(),
    };
    let style = style.with_font_overrides(font);
    Annotator::new(style).context("prepare caption font")
}

fn output_dir(images: &Path, out: Option<PathBuf>) -> PathBuf {
    out.unwrap_or_else(|| photo_annotator::default_output_dir(images))
}

fn cmd_interactive(args: InteractiveArgs, annotator: &mut Annotator) -> anyhow::Result<()> {
    let opts = InteractiveOptions {
        output_dir: output_dir(&args.images, args.out),
        images_dir: args.images,
        start: args.start,
        signature: annotator.style().signature.clone(),
    };

    let stdin = std::io::stdin();
    let mut prompt = TerminalPrompt::new(stdin.lock(), std::io::stderr());
    let report =
        photo_annotator::run_interactive(&opts, annotator, &mut prompt, &mut NoEmbeddedTimestamps)?;

    eprintln!(
        "annotated {} photo(s), deleted {}, failed {} -> {}",
        report.annotated.len(),
        report.deleted.len(),
        report.failed.len(),
        opts.output_dir.display()
    );
    for (photo, reason) in &report.failed {
        eprintln!("  failed: {}: {reason}", photo.display());
    }
    Ok(())
}

fn cmd_batch(args: BatchArgs, annotator: &mut Annotator) -> anyhow::Result<()> {
    let rows = photo_annotator::read_metadata(&args.csv)?;
    let opts = BatchOptions {
        output_dir: output_dir(&args.images, args.out),
        images_dir: args.images,
        signature: annotator.style().signature.clone(),
    };

    let report = photo_annotator::run_batch(&rows, &opts, annotator, &mut NoEmbeddedTimestamps)?;

    eprintln!(
        "annotated {} of {} row(s) -> {}",
        report.annotated.len(),
        rows.len(),
        opts.output_dir.display()
    );
    for source in &report.missing {
        eprintln!("  missing: {}", source.display());
    }
    for (source, reason) in &report.failed {
        eprintln!("  failed: {}: {reason}", source.display());
    }
    for line in &report.skipped_lines {
        eprintln!("  skipped: line {line} has no file name");
    }
    Ok(())
}

fn dump_font_diagnostics(annotator: &Annotator) {
    let font = annotator.font();
    eprintln!("caption font diagnostics:");
    eprintln!("  font_source: {}", font.source);
    eprintln!("  family:      {}", annotator.family_name());
    eprintln!("  face_index:  {}", font.index);
    eprintln!("  sha256:      {}", sha256_hex(&font.bytes));
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
