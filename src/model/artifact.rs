//! Embedded code artifacts.
//!
//! Artifacts are opaque blocks of source text that accompany the workflow.
//! Nothing in this crate parses, validates or escapes them.

use serde::{Deserialize, Serialize};

use super::error::{Collection, ValidationError};
use super::workflow::ensure_unique;

/// Name of the scoring and caption builder artifact.
pub const SCORING: &str = "scoring";

/// Name of the digest formatter artifact.
pub const DIGEST: &str = "digest";

/// A named block of source code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeArtifact {
    /// Stable name (key in the structured export)
    pub name: String,

    /// Display title
    pub title: String,

    /// Language tag for code fences
    pub language: String,

    /// Literal source text
    pub source: String,
}

impl CodeArtifact {
    /// Create a new artifact.
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        language: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            language: language.into(),
            source: source.into(),
        }
    }

    /// Replace the source text, keeping name, title and language.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }
}

/// The two artifacts referenced by the renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeArtifacts {
    scoring: CodeArtifact,
    digest: CodeArtifact,
}

impl CodeArtifacts {
    /// Pair the scoring and digest artifacts.
    ///
    /// The names key the structured export, so they must be exactly
    /// [`SCORING`] and [`DIGEST`].
    pub fn new(scoring: CodeArtifact, digest: CodeArtifact) -> Result<Self, ValidationError> {
        ensure_unique(Collection::CodeArtifacts, [scoring.name.as_str(), digest.name.as_str()])?;
        expect_name(&scoring, SCORING)?;
        expect_name(&digest, DIGEST)?;
        Ok(Self { scoring, digest })
    }

    /// Scoring and caption builder.
    pub fn scoring(&self) -> &CodeArtifact {
        &self.scoring
    }

    /// Digest formatter.
    pub fn digest(&self) -> &CodeArtifact {
        &self.digest
    }

    /// Iterate in presentation order: scoring, then digest.
    pub fn iter(&self) -> impl Iterator<Item = &CodeArtifact> {
        [&self.scoring, &self.digest].into_iter()
    }

    /// Look up an artifact by name.
    pub fn get(&self, name: &str) -> Option<&CodeArtifact> {
        self.iter().find(|a| a.name == name)
    }

    /// Replace the scoring source.
    pub fn with_scoring_source(mut self, source: impl Into<String>) -> Self {
        self.scoring = self.scoring.with_source(source);
        self
    }

    /// Replace the digest source.
    pub fn with_digest_source(mut self, source: impl Into<String>) -> Self {
        self.digest = self.digest.with_source(source);
        self
    }
}

fn expect_name(artifact: &CodeArtifact, expected: &'static str) -> Result<(), ValidationError> {
    if artifact.name == expected {
        Ok(())
    } else {
        Err(ValidationError::ArtifactName { expected, found: artifact.name.clone() })
    }
}
