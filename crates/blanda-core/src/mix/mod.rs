pub mod engine;
pub mod entry;
pub mod summary;

pub use engine::summarize;
pub use entry::{BlendSheet, MixEntry};
pub use summary::MixSummary;

use crate::error::BlandaError;
use std::path::Path;

/// Load a blend (entry list) from a JSON file.
pub fn load_blend(path: &Path) -> Result<Vec<MixEntry>, BlandaError> {
    let content = std::fs::read_to_string(path).map_err(|e| BlandaError::BlendLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| BlandaError::BlendLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Parse a blend from a JSON string (no file path context).
pub fn parse_blend_str(json: &str) -> Result<Vec<MixEntry>, BlandaError> {
    serde_json::from_str(json).map_err(BlandaError::Json)
}
