use thiserror::Error;

/// Failure reaching or decoding one of the upstream feeds. Callers catch
/// these at the pipeline boundary and degrade the dataset to empty.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Request failed: {0}")]
    Fetch(String),

    #[error("Malformed response body: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure rendering a single feature's geometry. Never fatal: the feature
/// is skipped and processing continues.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Unsupported geometry type: {0}")]
    UnsupportedGeometry(String),

    #[error("Geometry has no coordinate rings")]
    EmptyGeometry,
}
