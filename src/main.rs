use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use headword::input::DocumentReader;
use headword::pipeline::{build_lexicon, export_lexicon, PipelineConfig};

#[derive(Parser, Debug)]
#[command(name = "headword")]
#[command(version, about = "Dictionary entry extraction from block-level document dumps", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract headword entries from a document dump
    Extract {
        /// Input document dump (JSON)
        input: PathBuf,

        /// Output directory (default: ./<input_name>_entries)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Source label recorded in the output metadata (default: input stem)
        #[arg(short, long)]
        source: Option<String>,

        /// First page to visit, 0-indexed
        #[arg(long, default_value_t = 0)]
        start_page: usize,

        /// End-exclusive page bound (default: run to the last page)
        #[arg(long)]
        end_page: Option<usize>,

        /// Disable progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Extract entries from multiple document dumps
    Batch {
        /// Input document dumps
        inputs: Vec<PathBuf>,

        /// Output directory for all results
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// First page to visit, 0-indexed
        #[arg(long, default_value_t = 0)]
        start_page: usize,

        /// End-exclusive page bound
        #[arg(long)]
        end_page: Option<usize>,
    },

    /// Show information about a document dump
    Info {
        /// Input document dump (JSON)
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            input,
            output,
            source,
            start_page,
            end_page,
            quiet,
        } => extract_single(input, output, source, start_page, end_page, quiet),
        Commands::Batch {
            inputs,
            output,
            start_page,
            end_page,
        } => extract_batch(inputs, output, start_page, end_page),
        Commands::Info { input } => show_info(input),
    }
}

fn extract_single(
    input: PathBuf,
    output: Option<PathBuf>,
    source: Option<String>,
    start_page: usize,
    end_page: Option<usize>,
    quiet: bool,
) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }
    if !input.is_file() {
        anyhow::bail!("Input is not a file: {}", input.display());
    }

    let stem = input.file_stem().unwrap().to_string_lossy().to_string();
    let output_dir = output.unwrap_or_else(|| PathBuf::from(format!("{stem}_entries")));
    let source = source.unwrap_or(stem);

    if !quiet {
        println!("[*] Processing: {}", input.display());
        println!("[*] Output: {}", output_dir.display());
    }

    let config = PipelineConfig::new(input.clone(), output_dir.clone(), source)
        .with_page_range(start_page, end_page);

    if !quiet {
        println!("\n[+] Extracting entries...");
    }

    let outcome = build_lexicon(&config)
        .with_context(|| format!("Failed to process dump: {}", input.display()))?;

    if !quiet {
        let meta = &outcome.lexicon.metadata;
        println!("[+] Raw entries: {}", outcome.raw_entry_count);
        println!("[+] After cleanup: {}", meta.total_entries);
        println!("    Definitions: {}", meta.entries_with_definitions);
        println!("    Cross-references: {}", meta.cross_references);

        if !outcome.lexicon.entries.is_empty() {
            println!("\nFirst entries:");
            for entry in outcome.lexicon.entries.iter().take(5) {
                let marker = if entry.is_cross_ref { " [XREF]" } else { "" };
                let preview: String = entry.definition.chars().take(60).collect();
                println!("  p.{:<4} {}{}  {}...", entry.page, entry.term, marker, preview);
            }
        }

        println!("\n[+] Exporting results...");
    }

    export_lexicon(&outcome.lexicon, &output_dir)?;

    if !quiet {
        println!("[+] Done: {}", output_dir.join("entries.json").display());
    }

    Ok(())
}

fn extract_batch(
    inputs: Vec<PathBuf>,
    output: Option<PathBuf>,
    start_page: usize,
    end_page: Option<usize>,
) -> Result<()> {
    if inputs.is_empty() {
        anyhow::bail!("No input files specified");
    }

    let base_output = output.unwrap_or_else(|| PathBuf::from("batch_entries"));

    println!("[*] Batch processing {} file(s)", inputs.len());
    println!("[*] Base output: {}\n", base_output.display());

    let mut success = 0;
    let mut failed = 0;

    for (i, input) in inputs.iter().enumerate() {
        println!("[{}/{}] Processing: {}", i + 1, inputs.len(), input.display());

        if !input.exists() {
            eprintln!("  [!] Skipped: file does not exist");
            failed += 1;
            continue;
        }

        let stem = input.file_stem().unwrap().to_string_lossy();
        let output_dir = base_output.join(&*stem);

        match extract_single(
            input.clone(),
            Some(output_dir),
            None,
            start_page,
            end_page,
            true,
        ) {
            Ok(_) => {
                println!("  [✓] Success");
                success += 1;
            }
            Err(e) => {
                eprintln!("  [✗] Failed: {}", e);
                failed += 1;
            }
        }
        println!();
    }

    println!("\n[*] Summary: {} succeeded, {} failed", success, failed);

    if failed > 0 {
        anyhow::bail!("{} file(s) failed to process", failed);
    }

    Ok(())
}

fn show_info(input: PathBuf) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }

    let reader = DocumentReader::new(input.clone());
    let document = reader
        .read()
        .with_context(|| format!("Failed to read dump: {}", input.display()))?;

    println!("Document Information");
    println!("====================");
    println!("File: {}", input.display());
    println!("Pages: {}", document.page_count());
    println!("Blocks: {}", document.block_count());
    println!("Text blocks: {}", document.text_block_count());

    Ok(())
}
