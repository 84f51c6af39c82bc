// File: src/protocol.rs
//! Line protocol spoken by `tajweed_pipe`. One command per input line:
//!
//! - `START` → `TEXT <greeting>`
//! - `ANALYZE <text>` → `RESULT <json>`
//! - `REPORT <text>` → one `LINE <report line>` per report line, then `END`
//! - `TRANSLITERATE <text>` → `TEXT <latin>`
//! - `EXIT` → no reply, stop reading
//!
//! Non-Arabic text gets `ERROR not arabic`, anything else `ERROR unknown command`.
use crate::core::engine::TajweedEngine;
use crate::core::normalizer::{contains_arabic, normalize};
use log::{debug, error, info, warn};
use std::io::{self, Write};

pub const GREETING: &str =
    "As-salamu alaykum! Send Arabic text to get its transliteration and Tajweed rules.";

/// Handles one input line. Returns `false` once the peer asked to stop.
pub fn handle_line<W: Write>(engine: &TajweedEngine, line: &str, out: &mut W) -> io::Result<bool> {
    debug!("<- {:?}", line);
    let (command, rest) = match line.split_once(' ') {
        Some((c, r)) => (c, r.trim()),
        None => (line.trim(), ""),
    };

    match command {
        "START" => writeln!(out, "TEXT {}", GREETING)?,
        "EXIT" => {
            info!("Received EXIT");
            return Ok(false);
        }
        "ANALYZE" | "REPORT" | "TRANSLITERATE" if !contains_arabic(rest) => {
            writeln!(out, "ERROR not arabic")?;
        }
        "ANALYZE" => match serde_json::to_string(&engine.analyze_text(rest)) {
            Ok(json) => writeln!(out, "RESULT {}", json)?,
            Err(e) => {
                error!("Could not encode result: {}", e);
                writeln!(out, "ERROR internal")?;
            }
        },
        "REPORT" => {
            for report_line in engine.report(rest).lines() {
                writeln!(out, "LINE {}", report_line)?;
            }
            writeln!(out, "END")?;
        }
        "TRANSLITERATE" => {
            let text = normalize(rest);
            writeln!(out, "TEXT {}", engine.transliterator.transliterate(&text))?;
        }
        _ => {
            warn!("Unknown command {:?}", command);
            writeln!(out, "ERROR unknown command")?;
        }
    }
    Ok(true)
}
