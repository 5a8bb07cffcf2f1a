//! End-to-end scenarios over the built-in knowledge base.

use folio_application::{
    ChatSession, NoConversationLogger, ResponseDelay, SessionConfig,
};
use folio_domain::{Language, Matcher, Role};
use folio_infrastructure::{FileHistoryStore, KnowledgeLoader};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;
use std::sync::Arc;

fn matcher() -> Matcher {
    Matcher::new(KnowledgeLoader::builtin().unwrap())
}

fn answers(matcher: &Matcher, id: &str, language: Language) -> Vec<String> {
    matcher.knowledge().entry(id).unwrap().answer[&language]
        .texts()
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn fallbacks(matcher: &Matcher, language: Language) -> Vec<String> {
    matcher
        .knowledge()
        .fallback(language)
        .texts()
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn session(dir: &Path) -> ChatSession {
    ChatSession::restore(
        Arc::new(matcher()),
        Arc::new(FileHistoryStore::new(dir, "md_chat_history")),
        Arc::new(NoConversationLogger),
        SessionConfig::default()
            .with_seed(5)
            .with_response_delay(ResponseDelay::none()),
    )
}

// ==================== Matching ====================

#[test]
fn education_question_in_turkish() {
    let matcher = matcher();
    let mut rng = StdRng::seed_from_u64(1);

    let outcome = matcher.resolve("egitim bilgin nedir", &mut rng);
    assert_eq!(outcome.entry_id.as_deref(), Some("education"));
    assert_eq!(outcome.language, Language::Tr);
    assert!(answers(&matcher, "education", Language::Tr).contains(&outcome.response));
}

#[test]
fn turkish_letters_match_the_same_entry() {
    let matcher = matcher();
    let mut rng = StdRng::seed_from_u64(1);

    let plain = matcher.resolve("egitim bilgin nedir", &mut rng);
    let accented = matcher.resolve("EĞİTİM BİLGİN NEDİR?", &mut rng);
    assert_eq!(accented.entry_id, plain.entry_id);
    assert_eq!(accented.response, plain.response);
}

#[test]
fn gibberish_falls_back() {
    let matcher = matcher();
    let mut rng = StdRng::seed_from_u64(1);

    let outcome = matcher.resolve("asdkjaslkdj", &mut rng);
    assert!(outcome.is_fallback());
    // No hint words at all: English is the default
    assert_eq!(outcome.language, Language::En);
    assert!(fallbacks(&matcher, Language::En).contains(&outcome.response));
}

#[test]
fn projects_question_in_english() {
    let matcher = matcher();
    let mut rng = StdRng::seed_from_u64(1);

    let outcome = matcher.resolve("hello, what projects have you built?", &mut rng);
    assert_eq!(outcome.entry_id.as_deref(), Some("projects"));
    assert_eq!(outcome.language, Language::En);
    assert_eq!(
        outcome.response,
        answers(&matcher, "projects", Language::En)[0]
    );
}

#[test]
fn explicit_prefix_selects_answer_language() {
    let matcher = matcher();
    let mut rng = StdRng::seed_from_u64(1);

    let outcome = matcher.resolve("en: iletisim bilgilerin", &mut rng);
    assert_eq!(outcome.entry_id.as_deref(), Some("contact"));
    assert_eq!(outcome.language, Language::En);
}

#[test]
fn keyword_appended_to_unrelated_sentence_wins() {
    let matcher = matcher();
    let mut rng = StdRng::seed_from_u64(1);

    assert!(matcher.resolve("what is the weather like", &mut rng).is_fallback());
    let outcome = matcher.resolve("what is the weather like teknofest", &mut rng);
    assert_eq!(outcome.entry_id.as_deref(), Some("teknofest"));
}

#[test]
fn same_seed_same_alternative() {
    let matcher = matcher();
    let pick = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        matcher.find_best_match("merhaba", &mut rng)
    };
    assert_eq!(pick(9), pick(9));
    assert!(answers(&matcher, "greeting", Language::Tr).contains(&pick(9)));
}

#[test]
fn every_entry_is_reachable_by_its_first_keyword() {
    let matcher = matcher();
    for entry in matcher.knowledge().entries() {
        let ranked = matcher.rank(&entry.keywords[0]);
        let own = ranked.iter().find(|r| r.id == entry.id).unwrap();
        assert!(own.score >= 3, "{} scores {}", entry.id, own.score);
    }
}

// ==================== Session persistence ====================

#[tokio::test(start_paused = true)]
async fn restored_history_keeps_most_recent_fifty() {
    let dir = tempfile::tempdir().unwrap();
    let chat = session(dir.path());

    for i in 0..51 {
        let question = if i % 2 == 0 { "egitim" } else { "projects" };
        chat.submit(question).into_pending().unwrap().wait().await.unwrap();
    }
    let all = chat.messages();
    assert_eq!(all.len(), 102);

    let reloaded = session(dir.path()).messages();
    assert_eq!(reloaded.len(), 50);
    assert_eq!(reloaded[..], all[all.len() - 50..]);
    assert_eq!(reloaded[49].role, Role::Assistant);
}

#[tokio::test(start_paused = true)]
async fn cleared_history_stays_cleared() {
    let dir = tempfile::tempdir().unwrap();
    let chat = session(dir.path());
    chat.submit("merhaba").into_pending().unwrap().wait().await;
    assert_eq!(session(dir.path()).messages().len(), 2);

    chat.clear_history();
    assert!(session(dir.path()).messages().is_empty());
}

#[tokio::test]
async fn corrupt_record_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("md_chat_history.json"), "{not json").unwrap();
    assert!(session(dir.path()).messages().is_empty());
}
