//! Error types for kit-core

/// Result type for kit-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while planning a scaffold
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The manifest names a module no registry entry provides
    #[error("Unknown module: {id}")]
    UnknownModule { id: String },

    /// A module rejected its input or failed to render
    #[error(transparent)]
    Module(#[from] kit_modules::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
}
