//! Integration tests for placement prep

use placement_prep::config::{OutputFormat, ScoringConfig};
use placement_prep::input::InputManager;
use placement_prep::output::{PrepReport, ReportGenerator};
use placement_prep::processing::readiness::SkillConfidence;
use placement_prep::processing::taxonomy::{CLOUD_DEVOPS, CORE_CS, DATA, LANGUAGES, TESTING, WEB};
use placement_prep::{AnalysisRequest, HistoryStore, PrepAnalyzer};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use tempfile::tempdir;

fn analyzer() -> PrepAnalyzer {
    PrepAnalyzer::new(ScoringConfig::default()).unwrap()
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_jd.txt");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("Backend Engineer"));
    assert!(text.contains("PostgreSQL"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_jd.md");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("Frontend Developer"));
    assert!(text.contains("React"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
    assert!(!text.contains('`'));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_jd.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_cache_can_be_disabled() {
    let mut manager = InputManager::new().with_cache(false);
    let path = Path::new("tests/fixtures/sample_jd.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let result = manager.extract_text(Path::new("tests/fixtures/unsupported.xyz")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let result = manager.extract_text(Path::new("tests/fixtures/nonexistent.txt")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_load_request_with_loose_fields() {
    let manager = InputManager::new();
    let request = manager
        .load_request(Path::new("tests/fixtures/request.json"))
        .await
        .unwrap();

    assert_eq!(request.company, "Acme");
    assert_eq!(request.role, "");

    let analysis = analyzer().analyze(&request);
    let categories: Vec<&str> = analysis.extracted_skills.categories().collect();
    assert_eq!(categories, vec![LANGUAGES, DATA]);
    // 35 + 10 + company 10
    assert_eq!(analysis.readiness_score, 55);
}

#[tokio::test]
async fn test_load_request_rejects_non_json() {
    let manager = InputManager::new();
    let result = manager.load_request(Path::new("tests/fixtures/sample_jd.txt")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_backend_file_pipeline() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_jd.txt"))
        .await
        .unwrap();

    let request = AnalysisRequest::new(text, "Acme Pay", "Backend Engineer");
    let analysis = analyzer().analyze(&request);

    let categories: Vec<&str> = analysis.extracted_skills.categories().collect();
    assert_eq!(categories, vec![CORE_CS, LANGUAGES, DATA, CLOUD_DEVOPS]);
    assert_eq!(
        analysis.extracted_skills.skills(LANGUAGES).unwrap(),
        ["Java".to_string(), "Kotlin".to_string()]
    );
    // 35 + 20 + 10 + 10, short description
    assert_eq!(analysis.readiness_score, 75);

    let technical = &analysis.checklist[2].items;
    assert_eq!(technical[0], "- Frontend basics");
    assert_eq!(technical[1], "✓ Backend development & APIs");
    assert_eq!(technical[2], "✓ SQL proficiency");
    assert_eq!(technical[3], "✓ Cloud deployment & DevOps");

    assert_eq!(analysis.plan[1].topics[3], "Practice with your strongest language (Java)");
    assert_eq!(analysis.questions.len(), 10);
    assert_eq!(
        analysis.questions[5],
        "Explain the difference between checked and unchecked exceptions in Java."
    );
}

#[tokio::test]
async fn test_markdown_file_pipeline() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_jd.md"))
        .await
        .unwrap();

    let analysis = analyzer().analyze(&AnalysisRequest::new(text, "", "Frontend Developer"));
    let categories: Vec<&str> = analysis.extracted_skills.categories().collect();
    assert_eq!(categories, vec![LANGUAGES, WEB, TESTING]);
    assert_eq!(
        analysis.extracted_skills.skills(TESTING).unwrap(),
        ["Cypress".to_string(), "Jest".to_string()]
    );
}

#[test]
fn test_history_round_trip_with_confidence_overlay() {
    let dir = tempdir().unwrap();
    let store = HistoryStore::new(dir.path().join("history.json"));
    let scoring = ScoringConfig::default();

    let request = AnalysisRequest::new("Python, React and Docker", "Acme", "SDE");
    let analysis = analyzer().analyze_with_rng(&request, &mut StdRng::seed_from_u64(11));
    let saved = store.save(&analysis, &request).unwrap();
    assert_eq!(saved.readiness_score, 70);

    store
        .set_confidence(&saved.id, "python", Some(SkillConfidence::Know))
        .unwrap();
    store
        .set_confidence(&saved.id, "Docker", Some(SkillConfidence::Know))
        .unwrap();

    let loaded = store.require(&saved.id).unwrap();
    assert_eq!(loaded.readiness_score, 70);
    assert_eq!(loaded.displayed_score(&scoring), 74);
    assert_eq!(loaded.questions, analysis.questions);

    let report = PrepReport::new(loaded, &scoring, true);
    let generator = ReportGenerator::with_options(false, true, false, false);
    let markdown = generator.generate_report(&report, &OutputFormat::Markdown).unwrap();
    assert!(markdown.contains("**74/100**"));
    assert!(markdown.contains("Python (know)"));
    assert!(markdown.contains("_Base score 70 adjusted by skill confidence._"));
}

#[test]
fn test_empty_analysis_end_to_end() {
    let analysis = analyzer().analyze(&AnalysisRequest::default());

    assert_eq!(analysis.readiness_score, 35);
    assert_eq!(analysis.total_categories, 0);
    assert_eq!(analysis.checklist[1].items[2], "- OOP basics");
    assert_eq!(analysis.plan[2].topics[0], "Web development basics");
    assert_eq!(analysis.questions.len(), 10);
}
