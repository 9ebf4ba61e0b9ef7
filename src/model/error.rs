//! Workflow model validation errors.

use std::fmt;

use thiserror::Error;

/// Collections whose identifiers must be unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Tools,
    Modules,
    Steps,
    Assets,
    HashtagGroups,
    CodeArtifacts,
}

impl Collection {
    /// Get the name used in error messages.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Tools => "tool",
            Self::Modules => "module",
            Self::Steps => "step",
            Self::Assets => "asset",
            Self::HashtagGroups => "hashtag category",
            Self::CodeArtifacts => "code artifact",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while constructing the workflow model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// An identifier appears twice in one collection.
    #[error("Duplicate {collection} identifier '{id}'")]
    Duplicate { collection: Collection, id: String },

    /// A field label appears twice within one step.
    #[error("Duplicate field label '{label}' in step '{step}'")]
    DuplicateField { step: String, label: String },

    /// A code artifact sits in a slot reserved for another name.
    #[error("Code artifact '{found}' must be named '{expected}'")]
    ArtifactName { expected: &'static str, found: String },
}

impl ValidationError {
    /// Get the duplicated identifier.
    pub fn identifier(&self) -> &str {
        match self {
            Self::Duplicate { id, .. } => id,
            Self::DuplicateField { label, .. } => label,
            Self::ArtifactName { found, .. } => found,
        }
    }

    /// Get the collection the error was found in, if it is a top-level one.
    pub fn collection(&self) -> Option<Collection> {
        match self {
            Self::Duplicate { collection, .. } => Some(*collection),
            Self::DuplicateField { .. } => None,
            Self::ArtifactName { .. } => Some(Collection::CodeArtifacts),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_message_names_collection_and_id() {
        let err = ValidationError::Duplicate { collection: Collection::Steps, id: "fetch".into() };
        assert_eq!(err.to_string(), "Duplicate step identifier 'fetch'");
        assert_eq!(err.identifier(), "fetch");
        assert_eq!(err.collection(), Some(Collection::Steps));
    }

    #[test]
    fn test_duplicate_field_message() {
        let err = ValidationError::DuplicateField { step: "search".into(), label: "URL".into() };
        assert_eq!(err.to_string(), "Duplicate field label 'URL' in step 'search'");
        assert!(err.collection().is_none());
    }

    #[test]
    fn test_artifact_name_message() {
        let err = ValidationError::ArtifactName { expected: "scoring", found: "foo".into() };
        assert_eq!(err.to_string(), "Code artifact 'foo' must be named 'scoring'");
        assert_eq!(err.identifier(), "foo");
    }
}
