//! Error types for stem and declaration parsing.

use thiserror::Error;

/// Errors produced while turning file names and declaration documents into
/// graph inputs.
///
/// Both kinds are terminal for the batch that hit them: the caller surfaces
/// the error and emits nothing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A file-name stem that does not follow BEM naming.
    #[error("Invalid bem naming used: {0}")]
    InvalidNaming(String),

    /// A declaration document whose YAML does not fit any recognized shape.
    #[error("invalid dependency declaration for `{owner}`: {source}")]
    Declaration {
        /// Canonical stem of the entity the declaration belongs to.
        owner: String,
        #[source]
        source: serde_yaml::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_naming_message() {
        let err = ParseError::InvalidNaming("block__".to_string());
        assert_eq!(err.to_string(), "Invalid bem naming used: block__");
    }

    #[test]
    fn test_declaration_message_names_owner() {
        let source = serde_yaml::from_str::<Vec<String>>("{ not: a list }").unwrap_err();
        let err = ParseError::Declaration {
            owner: "menu__item".to_string(),
            source,
        };

        assert!(err.to_string().starts_with("invalid dependency declaration for `menu__item`"));
    }
}
