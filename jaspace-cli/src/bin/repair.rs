// Standalone mojibake repair tool.
//
// Re-encodes garbled UTF-8 with a list of legacy encodings to reverse
// wrong-encoding round trips. Runs over any number of files; per-file
// failures are reported and do not stop the batch.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use jaspace_core::{repair_file, RepairOutcome};

#[derive(Parser)]
#[command(name = "jaspace-repair")]
#[command(about = "Repair mojibake in UTF-8 text files")]
struct Args {
    /// Files to repair. Without any, this is a silent no-op.
    files: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    for path in &args.files {
        match repair_file(path) {
            Ok(RepairOutcome::Repaired { iterations }) => {
                println!(
                    "✅ Repaired {} in {} iteration(s)",
                    path.display(),
                    iterations
                );
            }
            Ok(RepairOutcome::Clean) => {
                println!("✨ No repair needed for {}", path.display());
            }
            Ok(RepairOutcome::NotUtf8) => {
                println!("⏭️  Skipping non-UTF-8 file: {}", path.display());
            }
            Err(e) => {
                eprintln!("❌ {}: {e:#}", path.display());
            }
        }
    }

    Ok(())
}
