//! Streaming report writers.

use std::io::Write;

use anyhow::Result;

use crate::driver::RegistrationReport;

/// Write reports as a prettified JSON array.
pub fn write_json_pretty(reports: &[RegistrationReport], mut w: impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(reports)?;
    w.write_all(json.as_bytes())?;
    Ok(())
}

/// Write reports as newline-delimited JSON (NDJSON).
pub fn write_ndjson(reports: &[RegistrationReport], mut w: impl Write) -> Result<()> {
    for report in reports {
        let line = serde_json::to_string(report)?;
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
    }
    Ok(())
}
