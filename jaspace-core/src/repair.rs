// Mojibake repair: reverses wrong-encoding round trips.
//
// A file that was read with the wrong encoding and saved back as UTF-8
// can be repaired by re-encoding the garbled text with the suspected
// wrong encoding and decoding the resulting bytes as UTF-8 again.
// Strategies are tried in order until one produces different, valid
// UTF-8 bytes; the loop repeats for nested corruption.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use encoding_rs::{Encoding, EUC_JP, MACINTOSH, SHIFT_JIS, WINDOWS_1252};

/// Encoding strategies to try, in order.
fn repair_strategies() -> [&'static Encoding; 4] {
    [WINDOWS_1252, MACINTOSH, SHIFT_JIS, EUC_JP]
}

/// Iteration cap for nested corruption.
const MAX_ITERATIONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepairOutcome {
    /// Valid UTF-8 and no strategy produced a repair.
    Clean,
    /// Repaired and rewritten in this many iterations.
    Repaired { iterations: usize },
    /// Not UTF-8 to begin with; left untouched.
    NotUtf8,
}

/// Repair one file in place. Unfixable files are left untouched; only
/// filesystem failures are errors.
pub fn repair_file(path: &Path) -> Result<RepairOutcome> {
    let mut iterations = 0;
    while iterations < MAX_ITERATIONS {
        let current = fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
        let Ok(garbled) = std::str::from_utf8(&current) else {
            if iterations == 0 {
                return Ok(RepairOutcome::NotUtf8);
            }
            // A repair pass can land on true binary content; stop there
            break;
        };
        let Some(repaired) = reverse_garbling(garbled, &current) else {
            break;
        };
        fs::write(path, &repaired)
            .with_context(|| format!("cannot write {}", path.display()))?;
        iterations += 1;
    }

    if iterations == 0 {
        Ok(RepairOutcome::Clean)
    } else {
        Ok(RepairOutcome::Repaired { iterations })
    }
}

/// One repair step: the first strategy whose re-encoding changes the
/// bytes and still decodes as UTF-8 wins.
fn reverse_garbling(garbled: &str, current: &[u8]) -> Option<String> {
    for strategy in repair_strategies() {
        let (bytes, _, had_errors) = strategy.encode(garbled);
        if had_errors || bytes.as_ref() == current {
            continue;
        }
        if let Ok(text) = std::str::from_utf8(&bytes) {
            return Some(text.to_owned());
        }
    }
    None
}
