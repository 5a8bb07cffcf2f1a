//! Knowledge base entities

use super::error::KnowledgeError;
use crate::language::code::Language;
use crate::text::normalize::normalize;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// A canned answer (Value Object)
///
/// Either one fixed text or several equally valid alternatives, one of which
/// is picked at random each time for variety.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    Single(String),
    Alternatives(Vec<String>),
}

impl Response {
    /// Pick the text to show.
    ///
    /// A `Single` response never touches `rng`.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        match self {
            Response::Single(text) => text,
            Response::Alternatives(texts) => texts.choose(rng).map(String::as_str).unwrap_or(""),
        }
    }

    /// All texts this response can produce
    pub fn texts(&self) -> Vec<&str> {
        match self {
            Response::Single(text) => vec![text.as_str()],
            Response::Alternatives(texts) => texts.iter().map(String::as_str).collect(),
        }
    }

    fn is_blank(&self) -> bool {
        match self {
            Response::Single(text) => text.trim().is_empty(),
            Response::Alternatives(texts) => {
                texts.is_empty() || texts.iter().any(|t| t.trim().is_empty())
            }
        }
    }
}

impl From<&str> for Response {
    fn from(text: &str) -> Self {
        Response::Single(text.to_string())
    }
}

/// One topic of the knowledge base (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    /// Stable identifier, only used for diagnostics
    pub id: String,
    /// Primary triggers, weighted by length
    pub keywords: Vec<String>,
    /// Secondary triggers, weighted at half a keyword
    #[serde(default)]
    pub variations: Vec<String>,
    /// Answer per language
    pub answer: BTreeMap<Language, Response>,
}

impl KnowledgeEntry {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            keywords: Vec::new(),
            variations: Vec::new(),
            answer: BTreeMap::new(),
        }
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_variations<I, S>(mut self, variations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variations = variations.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_answer(mut self, language: Language, response: impl Into<Response>) -> Self {
        self.answer.insert(language, response.into());
        self
    }
}

/// A trigger phrase already folded by [`normalize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    pub text: String,
    /// Length in characters of `text`
    pub chars: usize,
}

impl Trigger {
    fn new(raw: &str) -> Self {
        let text = normalize(raw);
        let chars = text.chars().count();
        Self { text, chars }
    }
}

/// Entry triggers normalized once at construction, so scoring a query does
/// not normalize every keyword again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedEntry {
    pub keywords: Vec<Trigger>,
    pub variations: Vec<Trigger>,
}

/// Validated, ordered knowledge base (Aggregate)
///
/// Order matters: when two entries score the same, the earlier one wins.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
    prepared: Vec<PreparedEntry>,
    fallback: BTreeMap<Language, Response>,
}

impl KnowledgeBase {
    /// Build a knowledge base, validating every invariant.
    pub fn new(
        entries: Vec<KnowledgeEntry>,
        fallback: BTreeMap<Language, Response>,
    ) -> Result<Self, KnowledgeError> {
        validate(&entries, &fallback)?;

        let prepared = entries
            .iter()
            .map(|entry| PreparedEntry {
                keywords: entry.keywords.iter().map(|k| Trigger::new(k)).collect(),
                variations: entry.variations.iter().map(|v| Trigger::new(v)).collect(),
            })
            .collect();

        Ok(Self {
            entries,
            prepared,
            fallback,
        })
    }

    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    /// Entries paired with their normalized triggers, in order
    pub fn prepared(&self) -> impl Iterator<Item = (&KnowledgeEntry, &PreparedEntry)> {
        self.entries.iter().zip(self.prepared.iter())
    }

    /// Look up an entry by id
    pub fn entry(&self, id: &str) -> Option<&KnowledgeEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Clarification response used when nothing matches.
    pub fn fallback(&self, language: Language) -> &Response {
        // validate() guarantees every language is present
        &self.fallback[&language]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate(
    entries: &[KnowledgeEntry],
    fallback: &BTreeMap<Language, Response>,
) -> Result<(), KnowledgeError> {
    if entries.is_empty() {
        return Err(KnowledgeError::Empty);
    }

    let mut seen = HashSet::new();
    for (index, entry) in entries.iter().enumerate() {
        if entry.id.trim().is_empty() {
            return Err(KnowledgeError::EmptyId { index });
        }
        if !seen.insert(entry.id.as_str()) {
            return Err(KnowledgeError::DuplicateId(entry.id.clone()));
        }
        if entry.keywords.is_empty() {
            return Err(KnowledgeError::NoKeywords(entry.id.clone()));
        }

        let triggers = entry
            .keywords
            .iter()
            .enumerate()
            .map(|(i, k)| ("keyword", i, k))
            .chain(
                entry
                    .variations
                    .iter()
                    .enumerate()
                    .map(|(i, v)| ("variation", i, v)),
            );
        for (kind, position, trigger) in triggers {
            if normalize(trigger).trim().is_empty() {
                return Err(KnowledgeError::BlankTrigger {
                    id: entry.id.clone(),
                    kind,
                    position,
                });
            }
        }

        for language in Language::ALL {
            match entry.answer.get(&language) {
                None => {
                    return Err(KnowledgeError::MissingAnswer {
                        id: entry.id.clone(),
                        language,
                    });
                }
                Some(response) if response.is_blank() => {
                    return Err(KnowledgeError::EmptyAnswer {
                        id: entry.id.clone(),
                        language,
                    });
                }
                Some(_) => {}
            }
        }
    }

    for language in Language::ALL {
        match fallback.get(&language) {
            None => return Err(KnowledgeError::MissingFallback(language)),
            Some(response) if response.is_blank() => {
                return Err(KnowledgeError::EmptyFallback(language));
            }
            Some(_) => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn entry(id: &str) -> KnowledgeEntry {
        KnowledgeEntry::new(id)
            .with_keywords(["egitim"])
            .with_answer(Language::Tr, "Eğitim")
            .with_answer(Language::En, "Education")
    }

    fn fallback() -> BTreeMap<Language, Response> {
        BTreeMap::from([
            (Language::Tr, Response::from("Anlamadım")),
            (Language::En, Response::from("Sorry?")),
        ])
    }

    #[test]
    fn test_valid_knowledge_base() {
        let kb = KnowledgeBase::new(vec![entry("a"), entry("b")], fallback()).unwrap();
        assert_eq!(kb.len(), 2);
        assert!(kb.entry("b").is_some());
        assert_eq!(kb.fallback(Language::En), &Response::from("Sorry?"));
    }

    #[test]
    fn test_triggers_are_prepared_normalized() {
        let e = KnowledgeEntry::new("deneyim")
            .with_keywords(["İş Deneyimi"])
            .with_variations(["Çalışıyor"])
            .with_answer(Language::Tr, "x")
            .with_answer(Language::En, "y");
        let kb = KnowledgeBase::new(vec![e], fallback()).unwrap();
        let (_, prepared) = kb.prepared().next().unwrap();
        assert_eq!(prepared.keywords[0].text, "is deneyimi");
        assert_eq!(prepared.keywords[0].chars, 11);
        assert_eq!(prepared.variations[0].text, "calisiyor");
    }

    #[test]
    fn test_empty_rejected() {
        let err = KnowledgeBase::new(vec![], fallback()).unwrap_err();
        assert_eq!(err, KnowledgeError::Empty);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = KnowledgeBase::new(vec![entry("a"), entry("a")], fallback()).unwrap_err();
        assert_eq!(err, KnowledgeError::DuplicateId("a".to_string()));
    }

    #[test]
    fn test_blank_trigger_rejected() {
        let e = entry("a").with_variations(["ok", "   "]);
        let err = KnowledgeBase::new(vec![e], fallback()).unwrap_err();
        assert_eq!(
            err,
            KnowledgeError::BlankTrigger {
                id: "a".to_string(),
                kind: "variation",
                position: 1
            }
        );
    }

    #[test]
    fn test_missing_keywords_rejected() {
        let e = entry("a").with_keywords(Vec::<String>::new());
        let err = KnowledgeBase::new(vec![e], fallback()).unwrap_err();
        assert_eq!(err, KnowledgeError::NoKeywords("a".to_string()));
    }

    #[test]
    fn test_missing_language_rejected() {
        let e = KnowledgeEntry::new("a")
            .with_keywords(["x"])
            .with_answer(Language::Tr, "only turkish");
        let err = KnowledgeBase::new(vec![e], fallback()).unwrap_err();
        assert_eq!(
            err,
            KnowledgeError::MissingAnswer {
                id: "a".to_string(),
                language: Language::En
            }
        );
    }

    #[test]
    fn test_empty_alternatives_rejected() {
        let e = entry("a").with_answer(Language::En, Response::Alternatives(vec![]));
        assert!(matches!(
            KnowledgeBase::new(vec![e], fallback()),
            Err(KnowledgeError::EmptyAnswer { .. })
        ));
    }

    #[test]
    fn test_missing_fallback_rejected() {
        let mut fb = fallback();
        fb.remove(&Language::Tr);
        let err = KnowledgeBase::new(vec![entry("a")], fb).unwrap_err();
        assert_eq!(err, KnowledgeError::MissingFallback(Language::Tr));
    }

    #[test]
    fn test_pick_single_and_alternatives() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(Response::from("only").pick(&mut rng), "only");

        let alts = Response::Alternatives(vec!["a".into(), "b".into(), "c".into()]);
        for _ in 0..20 {
            assert!(alts.texts().contains(&alts.pick(&mut rng)));
        }
    }

    #[test]
    fn test_pick_is_reproducible_with_seed() {
        let alts = Response::Alternatives((0..10).map(|i| i.to_string()).collect());
        let first: Vec<String> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..5).map(|_| alts.pick(&mut rng).to_string()).collect()
        };
        let second: Vec<String> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..5).map(|_| alts.pick(&mut rng).to_string()).collect()
        };
        assert_eq!(first, second);
    }

    #[test]
    fn test_response_deserializes_untagged() {
        let single: Response = serde_json::from_str("\"hi\"").unwrap();
        assert_eq!(single, Response::from("hi"));
        let many: Response = serde_json::from_str("[\"a\", \"b\"]").unwrap();
        assert_eq!(many.texts(), vec!["a", "b"]);
    }
}
