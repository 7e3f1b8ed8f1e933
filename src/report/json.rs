use anyhow::Result;

use crate::models::ScanResult;

pub fn render(results: &[ScanResult]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}
