//! Text rendering of a finished batch

use crate::batch::orchestrator::{BatchReport, FileFailure};
use crate::io::error::Result;
use std::io::Write;

/// Write the JSON record array, one `filename coverage` line per record and, if requested,
/// the statistics block
///
/// # Errors
///
/// Returns an error if serialization or writing fails
pub fn write_report<W: Write>(out: &mut W, report: &BatchReport, show_stats: bool) -> Result<()> {
    serde_json::to_writer(&mut *out, &report.records)?;
    writeln!(out)?;

    for info in &report.records {
        writeln!(out, "{} {}", info.filename, info.coverage)?;
    }

    if show_stats {
        write_statistics(out, report)?;
    }

    out.flush()?;
    Ok(())
}

/// Write memory figures, when available, followed by the batch runtime
///
/// # Errors
///
/// Returns an error if writing fails
pub fn write_statistics<W: Write>(out: &mut W, report: &BatchReport) -> Result<()> {
    if let Some(memory) = report.memory {
        writeln!(out, "Alloc :  {} KB", memory.resident_kib)?;
        writeln!(out, "Total Alloc :  {} KB", memory.peak_resident_kib)?;
        writeln!(out, "Sys :  {} KB", memory.virtual_kib)?;
        // Pointer lookups are not tracked by the Rust runtime
        writeln!(out, "Lookups :  0")?;
    }
    writeln!(out, "Runtime: {} ms", report.elapsed.as_millis())?;
    Ok(())
}

/// Write one `failed: <path>: <error>` line per failed file
///
/// # Errors
///
/// Returns an error if writing fails
pub fn write_failures<W: Write>(out: &mut W, failures: &[FileFailure]) -> Result<()> {
    for failure in failures {
        writeln!(out, "failed: {}: {}", failure.path.display(), failure.error)?;
    }
    out.flush()?;
    Ok(())
}
