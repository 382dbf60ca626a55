use blanda_core::error::BlandaError;
use blanda_core::MixSummary;

/// Prints the summary as JSON, or `null` when the blend has no result.
pub fn print(summary: &Option<MixSummary>) -> Result<(), BlandaError> {
    let json = serde_json::to_string_pretty(summary)?;
    println!("{json}");
    Ok(())
}
