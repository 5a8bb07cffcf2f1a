//! TOML knowledge base loader
//!
//! Schema:
//!
//! ```toml
//! [[entries]]
//! id = "education"
//! keywords = ["egitim", "education"]
//! variations = ["hangi okulda"]     # optional
//!
//! [entries.answer]
//! tr = "..."                        # a single answer
//! en = ["...", "..."]               # or alternatives
//!
//! [fallback]
//! tr = "..."
//! en = "..."
//! ```

use folio_domain::{KnowledgeBase, KnowledgeEntry, KnowledgeError, Language, Response};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

const BUILTIN: &str = include_str!("../../assets/knowledge_base.toml");

/// Errors raised while loading a knowledge base
#[derive(Error, Debug)]
pub enum KnowledgeLoadError {
    #[error("failed to read knowledge base {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse knowledge base: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown language '{language}' in {context}")]
    UnknownLanguage { language: String, context: String },

    #[error("language '{language}' given twice in {context}")]
    DuplicateLanguage { language: Language, context: String },

    #[error("invalid knowledge base: {0}")]
    Invalid(#[from] KnowledgeError),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawKnowledgeBase {
    entries: Vec<RawEntry>,
    #[serde(default)]
    fallback: BTreeMap<String, Response>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEntry {
    id: String,
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    variations: Vec<String>,
    #[serde(default)]
    answer: BTreeMap<String, Response>,
}

/// Loads and validates knowledge bases
pub struct KnowledgeLoader;

impl KnowledgeLoader {
    /// Load `path` if given, otherwise the built-in knowledge base.
    pub fn load(path: Option<&Path>) -> Result<KnowledgeBase, KnowledgeLoadError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::builtin(),
        }
    }

    /// The knowledge base compiled into the binary
    pub fn builtin() -> Result<KnowledgeBase, KnowledgeLoadError> {
        Self::parse(BUILTIN)
    }

    /// Read a knowledge base from a TOML file
    pub fn from_path(path: &Path) -> Result<KnowledgeBase, KnowledgeLoadError> {
        let raw = std::fs::read_to_string(path).map_err(|source| KnowledgeLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let knowledge = Self::parse(&raw)?;
        info!(
            "Loaded {} knowledge entries from {}",
            knowledge.len(),
            path.display()
        );
        Ok(knowledge)
    }

    /// Parse and validate a TOML document
    pub fn parse(document: &str) -> Result<KnowledgeBase, KnowledgeLoadError> {
        let raw: RawKnowledgeBase = toml::from_str(document)?;

        let entries = raw
            .entries
            .into_iter()
            .map(|entry| {
                let context = format!("entry '{}'", entry.id);
                Ok(KnowledgeEntry {
                    id: entry.id,
                    keywords: entry.keywords,
                    variations: entry.variations,
                    answer: by_language(entry.answer, &context)?,
                })
            })
            .collect::<Result<Vec<_>, KnowledgeLoadError>>()?;
        let fallback = by_language(raw.fallback, "fallback")?;

        Ok(KnowledgeBase::new(entries, fallback)?)
    }
}

fn by_language(
    answers: BTreeMap<String, Response>,
    context: &str,
) -> Result<BTreeMap<Language, Response>, KnowledgeLoadError> {
    let mut by_language = BTreeMap::new();
    for (code, response) in answers {
        let Ok(language) = code.parse::<Language>() else {
            return Err(KnowledgeLoadError::UnknownLanguage {
                language: code,
                context: context.to_string(),
            });
        };
        // "tr", "TR" and "turkish" all name the same language
        if by_language.insert(language, response).is_some() {
            return Err(KnowledgeLoadError::DuplicateLanguage {
                language,
                context: context.to_string(),
            });
        }
    }
    Ok(by_language)
}
