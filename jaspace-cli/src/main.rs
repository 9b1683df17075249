use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use jaspace::hook::HookPayload;
use jaspace_core::{DocumentFormatter, ExclusionConfig, FormatOutcome, SkipReason};

#[derive(Parser)]
#[command(name = "jaspace")]
#[command(about = "Insert spaces between Japanese and Latin text, honoring an exclusion list")]
struct Args {
    /// Path to the file to format. If omitted, the path is read from a
    /// JSON hook payload on standard input (tool_input.file_path).
    file: Option<String>,

    /// Path to custom exclusion config file (JSON format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print status output even in hook mode
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Direct invocations get status output; stdin hook payloads stay
    // quiet so the editing flow is not cluttered.
    let hook_mode = args.file.is_none();
    let verbose = args.verbose || !hook_mode;

    let path = match args.file {
        Some(path) => path,
        None => HookPayload::from_stdin().file_path().to_string(),
    };

    if verbose {
        println!("🈁 Jaspace Japanese/Latin spacing formatter");
    }

    let config = ExclusionConfig::load_with_fallback(args.config.as_deref());
    if verbose {
        if config.is_empty() {
            println!("📋 No exclusion list loaded");
        } else {
            println!("📋 {} exclusion entries", config.exclusions.len());
        }
    }

    let formatter = DocumentFormatter::new(&config)?;

    match formatter.format_file(&path)? {
        FormatOutcome::Updated => {
            if verbose {
                println!("✅ Formatted: {path}");
            }
        }
        FormatOutcome::Unchanged => {
            if verbose {
                println!("✨ Already formatted: {path}");
            }
        }
        FormatOutcome::Skipped(reason) => {
            if verbose {
                match reason {
                    SkipReason::EmptyPath => println!("⏭️  No target path in invocation"),
                    SkipReason::NotAFile => println!("⏭️  Not a regular file: {path}"),
                    SkipReason::NotAccessible => {
                        println!("⏭️  Not readable and writable: {path}")
                    }
                }
            }
        }
    }

    Ok(())
}
