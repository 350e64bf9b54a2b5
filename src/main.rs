// src/main.rs
mod extractors;
mod intake;
mod resume;
mod scoring;
mod storage;
mod utils;

use std::path::PathBuf;

use clap::Parser;

use intake::RawDocument;
use resume::ExtractedResume;
use storage::StorageManager;
use utils::AppError;

/// Command Line Interface for the resume text-extraction engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the decoded resume text file (or a previously extracted
    /// resume JSON file when --rescore is set)
    input: PathBuf,

    /// Output directory for extraction results
    #[arg(short, long, default_value = "./output")]
    output_dir: String,

    /// Pretty-print the extracted resume JSON
    #[arg(short, long)]
    pretty: bool,

    /// Debug mode - save an annotated copy of the document with recognized
    /// section headings marked
    #[arg(short, long)]
    debug: bool,

    /// Treat the input as an extracted resume JSON document and recompute
    /// its completeness score only
    #[arg(long)]
    rescore: bool,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting processing for args: {:?}", args);

    // 3. Score-only mode: the scorer consumes the same shape whether the
    // resume was typed by hand or auto-extracted.
    if args.rescore {
        let json = tokio::fs::read_to_string(&args.input).await?;
        let resume: ExtractedResume = serde_json::from_str(&json)
            .map_err(|e| AppError::Processing(format!("Invalid resume JSON: {e}")))?;
        let score = scoring::completeness_score(&resume);
        tracing::info!("Completeness score for {}: {}", args.input.display(), score);
        println!("{score}");
        return Ok(());
    }

    // 4. Read the decoded document text
    let document = RawDocument::from_file(&args.input).await?;
    tracing::info!("Read document ({} bytes)", document.len());

    let stem = args
        .input
        .file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .ok_or_else(|| AppError::Config(format!("Cannot derive a name from {}", args.input.display())))?;

    // 5. Initialize storage
    let storage = StorageManager::new(&args.output_dir)?;

    // 6. Save the annotated document for debugging if requested
    if args.debug {
        let debug_dir = storage.document_dir(&stem).join("debug");
        std::fs::create_dir_all(&debug_dir)?;
        let annotated_path = debug_dir.join("document_annotated.txt");
        if let Err(e) = utils::text_debug::save_annotated_text(document.text(), &annotated_path) {
            tracing::warn!("Failed to create annotated document: {}", e);
        } else {
            tracing::info!("Created annotated document: {}", annotated_path.display());
        }
    }

    // 7. Run the extraction pipeline and score the result
    let extracted = extractors::extract(document.text());
    let score = scoring::completeness_score(&extracted);

    tracing::info!(
        "Extracted {} work, {} education, {} skill, {} achievement item(s); completeness score {}",
        extracted.work_experience.len(),
        extracted.education.len(),
        extracted.skills.len(),
        extracted.achievements.len(),
        score,
    );
    if extracted.is_empty() {
        tracing::warn!("No fields were recognized; the document may not be decoded text");
    }

    // 8. Persist the result and its metadata
    match storage.save_resume(&stem, &extracted, args.pretty) {
        Ok(path) => tracing::info!("Saved extraction result to: {}", path.display()),
        Err(e) => tracing::error!("Failed to save extraction result: {}", e),
    }
    match storage.save_metadata(&stem, &args.input, &extracted, score) {
        Ok(path) => tracing::info!("Saved metadata to: {}", path.display()),
        Err(e) => tracing::error!("Failed to save metadata: {}", e),
    }

    tracing::info!("Processing finished for {}", args.input.display());

    Ok(())
}
