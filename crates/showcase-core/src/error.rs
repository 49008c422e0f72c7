/// Reasons a model could not be made available. Never fatal: the showcase
/// falls back to the placeholder.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to parse glTF: {0}")]
    Parse(#[from] gltf::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("model contains no meshes")]
    NoMeshes,

    #[error("model bounds are degenerate")]
    DegenerateBounds,
}
