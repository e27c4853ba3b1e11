//! Error types for kit-modules

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The partial input does not fit the module's input type
    #[error("Invalid input for module {module}: {source}")]
    InvalidInput {
        module: String,
        source: serde_json::Error,
    },

    /// `get_template_string` was called on a module that renders as data
    #[error("Module {module} has no source template")]
    NoTemplate { module: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display_names_module() {
        let source = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let err = Error::InvalidInput {
            module: "prettier".to_string(),
            source,
        };
        assert!(err.to_string().contains("prettier"));
    }

    #[test]
    fn test_no_template_display() {
        let err = Error::NoTemplate {
            module: "tsconfig".to_string(),
        };
        assert_eq!(err.to_string(), "Module tsconfig has no source template");
    }
}
