use serde::Serialize;

/// Outcome of probing the document store. A tagged enum rather than free
/// text so callers can branch on `status` instead of matching substrings.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StoreProbe {
    /// No store handle exists (DATABASE_URL unset or client init failed).
    Unconfigured,
    /// A handle exists but listing collections failed.
    Unreachable { error: String },
    /// Listing succeeded; up to 10 collection names included.
    Connected { collections: Vec<String> },
}

#[derive(Debug, Serialize)]
pub struct DiagnosticsResponse {
    pub backend: &'static str,
    pub database_url_set: bool,
    pub database_name: String,
    pub store: StoreProbe,
}
