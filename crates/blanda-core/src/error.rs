use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum BlandaError {
    #[error("failed to load catalog from {path}: {reason}")]
    CatalogLoad { path: PathBuf, reason: String },

    #[error("invalid catalog: {0}")]
    CatalogInvalid(String),

    #[error("failed to load blend from {path}: {reason}")]
    BlendLoad { path: PathBuf, reason: String },

    #[error("unknown preset '{0}'. Available: demo")]
    UnknownPreset(String),

    #[error("invalid entry '{0}': expected PRODUCT_ID:GRAMS (e.g. p1:100)")]
    EntrySpec(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
