use crate::domain::model::ScanResult;
use crate::error::Result;
use std::io::Read;

/// Parses the vision collaborator's JSON output into a [`ScanResult`].
///
/// LLM responses frequently arrive wrapped in a Markdown code fence even when
/// asked for raw JSON, so the fence is stripped before deserialization.
/// Anything else malformed is surfaced as a JSON error.
pub fn parse_scan(raw: &str) -> Result<ScanResult> {
    let body = strip_code_fence(raw);
    Ok(serde_json::from_str(body)?)
}

/// Reads and parses a scan from any `Read` source (e.g., File, Stdin).
pub fn read_scan<R: Read>(mut source: R) -> Result<ScanResult> {
    let mut raw = String::new();
    source.read_to_string(&mut raw)?;
    parse_scan(&raw)
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Opening fence may carry a language tag ("```json").
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
