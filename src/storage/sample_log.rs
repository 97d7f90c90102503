//! Line format of the daily sample log: one compact JSON object per line.

use crate::monitor::types::Sample;

/// Encode a sample as a newline-terminated JSON line.
pub fn encode_line(sample: &Sample) -> Result<String, serde_json::Error> {
    let mut line = serde_json::to_string(sample)?;
    line.push('\n');
    Ok(line)
}

pub fn decode_line(line: &str) -> Result<Sample, serde_json::Error> {
    serde_json::from_str(line.trim_end())
}
