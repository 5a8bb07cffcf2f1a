//! Best-match selection over the knowledge base

use super::scorer::{MIN_CONFIDENCE, score_entry};
use crate::knowledge::KnowledgeBase;
use crate::language::code::Language;
use crate::language::detector::detect_language;
use crate::text::normalize::{normalize, tokens};
use rand::Rng;

/// Score of one entry for a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub id: String,
    pub score: u32,
}

/// What the matcher decided for one query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Winning entry, `None` when the fallback was used
    pub entry_id: Option<String>,
    /// Best score seen (0 when nothing overlapped)
    pub score: u32,
    /// Language the response is written in
    pub language: Language,
    /// The resolved response text
    pub response: String,
}

impl MatchOutcome {
    pub fn is_fallback(&self) -> bool {
        self.entry_id.is_none()
    }
}

/// Rule-based matcher turning free text into one canned answer.
///
/// Stateless apart from the knowledge base it owns; the only randomness is
/// the choice among an answer's alternatives, drawn from the caller's `rng`.
///
/// # Example
///
/// ```
/// use folio_domain::knowledge::{KnowledgeBase, KnowledgeEntry, Response};
/// use folio_domain::language::code::Language;
/// use folio_domain::matching::Matcher;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use std::collections::BTreeMap;
///
/// let entry = KnowledgeEntry::new("education")
///     .with_keywords(["egitim", "education"])
///     .with_answer(Language::Tr, "KSÜ Bilgisayar Mühendisliği")
///     .with_answer(Language::En, "Computer Engineering at KSU");
/// let fallback = BTreeMap::from([
///     (Language::Tr, Response::from("Bu konuda bilgim yok.")),
///     (Language::En, Response::from("I don't know about that.")),
/// ]);
/// let matcher = Matcher::new(KnowledgeBase::new(vec![entry], fallback).unwrap());
///
/// let mut rng = StdRng::seed_from_u64(1);
/// assert_eq!(
///     matcher.find_best_match("Eğitim bilgin nedir", &mut rng),
///     "KSÜ Bilgisayar Mühendisliği"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Matcher {
    knowledge: KnowledgeBase,
}

impl Matcher {
    pub fn new(knowledge: KnowledgeBase) -> Self {
        Self { knowledge }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Resolve a raw message to the response text to display.
    pub fn find_best_match<R: Rng + ?Sized>(&self, raw: &str, rng: &mut R) -> String {
        self.resolve(raw, rng).response
    }

    /// Resolve a raw message, keeping the decision details.
    pub fn resolve<R: Rng + ?Sized>(&self, raw: &str, rng: &mut R) -> MatchOutcome {
        let language = detect_language(raw);
        let (best, score) = self.best_entry(raw);

        match best {
            Some(index) if score >= MIN_CONFIDENCE => {
                let entry = &self.knowledge.entries()[index];
                let response = entry
                    .answer
                    .get(&language)
                    .map(|r| r.pick(rng).to_string())
                    .unwrap_or_default();
                MatchOutcome {
                    entry_id: Some(entry.id.clone()),
                    score,
                    language,
                    response,
                }
            }
            _ => MatchOutcome {
                entry_id: None,
                score,
                language,
                response: self.knowledge.fallback(language).pick(rng).to_string(),
            },
        }
    }

    /// Score every entry, in knowledge-base order.
    pub fn rank(&self, raw: &str) -> Vec<RankedEntry> {
        let normalized = normalize(raw);
        let tokens = tokens(&normalized);
        self.knowledge
            .prepared()
            .map(|(entry, prepared)| RankedEntry {
                id: entry.id.clone(),
                score: score_entry(prepared, &normalized, &tokens),
            })
            .collect()
    }

    /// Index and score of the winning entry.
    ///
    /// Later entries replace the current best only on a strictly higher
    /// score, so the first of equally scored entries wins.
    fn best_entry(&self, raw: &str) -> (Option<usize>, u32) {
        let normalized = normalize(raw);
        let tokens = tokens(&normalized);

        let mut best = None;
        let mut best_score = 0;
        for (index, (_, prepared)) in self.knowledge.prepared().enumerate() {
            let score = score_entry(prepared, &normalized, &tokens);
            if score > best_score {
                best = Some(index);
                best_score = score;
            }
        }
        (best, best_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::{KnowledgeEntry, Response};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::BTreeMap;

    fn matcher() -> Matcher {
        let entries = vec![
            KnowledgeEntry::new("education")
                .with_keywords(["egitim", "okul", "education", "university"])
                .with_variations(["okuyor", "nerede okuyor"])
                .with_answer(Language::Tr, "Eğitim cevabı")
                .with_answer(Language::En, "Education answer"),
            KnowledgeEntry::new("projects")
                .with_keywords(["proje", "projects", "project", "github"])
                .with_answer(Language::Tr, "Proje cevabı")
                .with_answer(
                    Language::En,
                    Response::Alternatives(vec!["Projects A".into(), "Projects B".into()]),
                ),
            KnowledgeEntry::new("greeting")
                .with_keywords(["merhaba", "selam", "hello", "hey"])
                .with_answer(Language::Tr, "Merhaba!")
                .with_answer(Language::En, "Hello!"),
            KnowledgeEntry::new("github-twin")
                .with_keywords(["github"])
                .with_answer(Language::Tr, "ikiz")
                .with_answer(Language::En, "twin"),
        ];
        let fallback = BTreeMap::from([
            (Language::Tr, Response::from("Anlayamadım.")),
            (
                Language::En,
                Response::Alternatives(vec!["Sorry?".into(), "Could you rephrase?".into()]),
            ),
        ]);
        Matcher::new(KnowledgeBase::new(entries, fallback).unwrap())
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(1234)
    }

    #[test]
    fn test_turkish_query_matches_education() {
        let outcome = matcher().resolve("egitim bilgin nedir", &mut rng());
        assert_eq!(outcome.entry_id.as_deref(), Some("education"));
        assert_eq!(outcome.language, Language::Tr);
        assert_eq!(outcome.response, "Eğitim cevabı");
        assert_eq!(outcome.score, 10);
    }

    #[test]
    fn test_english_query_matches_projects() {
        let m = matcher();
        let outcome = m.resolve("hello, what projects have you built?", &mut rng());
        assert_eq!(outcome.entry_id.as_deref(), Some("projects"));
        assert_eq!(outcome.language, Language::En);
        assert!(["Projects A", "Projects B"].contains(&outcome.response.as_str()));
    }

    #[test]
    fn test_gibberish_falls_back() {
        let outcome = matcher().resolve("asdkjaslkdj", &mut rng());
        assert!(outcome.is_fallback());
        assert_eq!(outcome.score, 0);
        assert!(["Sorry?", "Could you rephrase?"].contains(&outcome.response.as_str()));
    }

    #[test]
    fn test_whitespace_only_falls_back() {
        for input in ["", "   ", "\n\t"] {
            assert!(matcher().resolve(input, &mut rng()).is_fallback());
        }
    }

    #[test]
    fn test_below_threshold_falls_back() {
        // a lone 4-char variation hit is worth 2 points
        let entries = vec![
            KnowledgeEntry::new("weak")
                .with_keywords(["zzzz"])
                .with_variations(["abcd"])
                .with_answer(Language::Tr, "zayıf")
                .with_answer(Language::En, "weak"),
        ];
        let fallback = BTreeMap::from([
            (Language::Tr, Response::from("yedek")),
            (Language::En, Response::from("fallback")),
        ]);
        let m = Matcher::new(KnowledgeBase::new(entries, fallback).unwrap());
        let outcome = m.resolve("xabcdx", &mut rng());
        assert_eq!(outcome.score, 2);
        assert!(outcome.is_fallback());
        assert_eq!(outcome.response, "fallback");
    }

    #[test]
    fn test_first_entry_wins_ties() {
        // "github" scores 6 + 4 in both "projects" and "github-twin"
        let outcome = matcher().resolve("github", &mut rng());
        assert_eq!(outcome.entry_id.as_deref(), Some("projects"));
    }

    #[test]
    fn test_same_input_selects_same_entry() {
        let m = matcher();
        let mut rng = StdRng::seed_from_u64(99);
        let first = m.resolve("what projects are on github", &mut rng).entry_id;
        for _ in 0..10 {
            assert_eq!(m.resolve("what projects are on github", &mut rng).entry_id, first);
        }
    }

    #[test]
    fn test_fixed_seed_fixes_alternative() {
        let m = matcher();
        let a = m.find_best_match("show me your projects", &mut StdRng::seed_from_u64(5));
        let b = m.find_best_match("show me your projects", &mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_appending_keyword_never_lowers_score() {
        let m = matcher();
        let base = "i was wondering about the weather today";
        let with_keyword = format!("{base} okul");
        let before = m.rank(base);
        let after = m.rank(&with_keyword);
        for (b, a) in before.iter().zip(after.iter()) {
            assert!(a.score >= b.score, "{} decreased", a.id);
        }
        let outcome = m.resolve(&with_keyword, &mut rng());
        assert_eq!(outcome.entry_id.as_deref(), Some("education"));
    }

    #[test]
    fn test_rank_lists_every_entry_in_order() {
        let ranked = matcher().rank("merhaba");
        let ids: Vec<_> = ranked.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["education", "projects", "greeting", "github-twin"]);
        assert_eq!(ranked[2].score, 11);
    }
}
