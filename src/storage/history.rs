//! Persisted analysis history, most recent first, in a single JSON file

use crate::config::ScoringConfig;
use crate::error::{PrepError, Result};
use crate::processing::analyzer::{Analysis, AnalysisRequest};
use crate::processing::checklist::ChecklistRound;
use crate::processing::readiness::{adjusted_score, ConfidenceMap, SkillConfidence, MAX_SCORE};
use crate::processing::skill_matcher::DetectedSkills;
use crate::processing::study_plan::PlanDay;
use chrono::{DateTime, SecondsFormat, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use strsim::jaro_winkler;

const DEFAULT_COMPANY: &str = "Untitled";
const DEFAULT_ROLE: &str = "General";
const SUGGESTION_THRESHOLD: f64 = 0.8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub created_at: String,
    pub company: String,
    pub role: String,
    pub jd_text: String,
    pub extracted_skills: DetectedSkills,
    pub readiness_score: u8,
    pub checklist: Vec<ChecklistRound>,
    pub plan: Vec<PlanDay>,
    pub questions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_confidence_map: Option<ConfidenceMap>,
}

impl HistoryEntry {
    /// Record for an analysis; blank company and role get placeholder names
    pub fn from_analysis(
        id: String,
        created_at: DateTime<Utc>,
        analysis: &Analysis,
        request: &AnalysisRequest,
    ) -> Self {
        Self {
            id,
            created_at: created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            company: non_empty_or(&request.company, DEFAULT_COMPANY),
            role: non_empty_or(&request.role, DEFAULT_ROLE),
            jd_text: request.jd_text.clone(),
            extracted_skills: analysis.extracted_skills.clone(),
            readiness_score: analysis.readiness_score,
            checklist: analysis.checklist.clone(),
            plan: analysis.plan.clone(),
            questions: analysis.questions.clone(),
            skill_confidence_map: None,
        }
    }

    /// Score after applying the confidence overlay, if any
    pub fn displayed_score(&self, scoring: &ScoringConfig) -> u8 {
        match &self.skill_confidence_map {
            Some(map) => adjusted_score(scoring, self.readiness_score, map),
            None => self.readiness_score.min(MAX_SCORE),
        }
    }

    pub fn confidence(&self, skill: &str) -> Option<SkillConfidence> {
        self.skill_confidence_map
            .as_ref()
            .and_then(|map| map.get(skill).copied())
    }

    /// Resolve user input to a detected skill label, ignoring case
    fn resolve_skill(&self, skill: &str) -> Result<String> {
        if let Some(found) = self
            .extracted_skills
            .all_skills()
            .find(|s| s.eq_ignore_ascii_case(skill))
        {
            return Ok(found.to_string());
        }

        let needle = skill.to_lowercase();
        let suggestion = self
            .extracted_skills
            .all_skills()
            .map(|s| (s, jaro_winkler(&needle, &s.to_lowercase())))
            .filter(|(_, similarity)| *similarity >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(s, _)| s.to_string());

        Err(PrepError::UnknownSkill {
            skill: skill.to_string(),
            suggestion,
        })
    }
}

/// File-backed store of analyses
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
    max_entries: Option<usize>,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_entries: None,
        }
    }

    pub fn with_max_entries(mut self, max_entries: Option<usize>) -> Self {
        self.max_entries = max_entries;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All entries, most recent first. Unreadable history reads as empty.
    pub fn list(&self) -> Vec<HistoryEntry> {
        match self.read() {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Ignoring unreadable history at {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    fn read(&self) -> Result<Vec<HistoryEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&content)?)
    }

    /// Entries to rewrite. Unparsable history is moved aside to `<file>.bak` first.
    fn read_for_update(&self) -> Result<Vec<HistoryEntry>> {
        match self.read() {
            Ok(entries) => Ok(entries),
            Err(PrepError::Serialization(e)) => {
                let backup = self.backup_path();
                warn!(
                    "History at {} is unparsable ({}), moving it to {}",
                    self.path.display(),
                    e,
                    backup.display()
                );
                fs::rename(&self.path, &backup).map_err(|e| {
                    PrepError::Storage(format!(
                        "Failed to back up {}: {}",
                        self.path.display(),
                        e
                    ))
                })?;
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".bak");
        PathBuf::from(name)
    }

    /// Store an analysis at the front of the history
    pub fn save(&self, analysis: &Analysis, request: &AnalysisRequest) -> Result<HistoryEntry> {
        let mut entries = self.read_for_update()?;

        let now = Utc::now();
        let mut id_millis = now.timestamp_millis();
        while entries.iter().any(|e| e.id == id_millis.to_string()) {
            id_millis += 1;
        }

        let entry = HistoryEntry::from_analysis(id_millis.to_string(), now, analysis, request);

        entries.insert(0, entry.clone());
        if let Some(max) = self.max_entries {
            if entries.len() > max {
                debug!("Dropping {} oldest analyses", entries.len() - max);
                entries.truncate(max);
            }
        }

        self.write(&entries)?;
        info!("Saved analysis {} to {}", entry.id, self.path.display());
        Ok(entry)
    }

    pub fn get(&self, id: &str) -> Option<HistoryEntry> {
        self.list().into_iter().find(|e| e.id == id)
    }

    /// Fetch an entry or fail with `NotFound`
    pub fn require(&self, id: &str) -> Result<HistoryEntry> {
        self.get(id).ok_or_else(|| PrepError::NotFound(id.to_string()))
    }

    /// Remove an entry. Returns whether anything was removed.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut entries = self.read_for_update()?;
        let before = entries.len();
        entries.retain(|e| e.id != id);

        if entries.len() == before {
            return Ok(false);
        }

        self.write(&entries)?;
        info!("Deleted analysis {}", id);
        Ok(true)
    }

    /// Set or clear the confidence overlay for one detected skill
    pub fn set_confidence(
        &self,
        id: &str,
        skill: &str,
        confidence: Option<SkillConfidence>,
    ) -> Result<HistoryEntry> {
        let mut entries = self.read_for_update()?;
        let entry = entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| PrepError::NotFound(id.to_string()))?;

        let label = entry.resolve_skill(skill)?;
        let map = entry.skill_confidence_map.get_or_insert_with(ConfidenceMap::new);
        match confidence {
            Some(level) => {
                map.insert(label, level);
            }
            None => {
                map.remove(&label);
            }
        }
        if map.is_empty() {
            entry.skill_confidence_map = None;
        }

        let updated = entry.clone();
        self.write(&entries)?;
        Ok(updated)
    }

    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        info!("Cleared analysis history");
        Ok(())
    }

    fn write(&self, entries: &[HistoryEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(entries)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)?;
        fs::rename(&tmp_path, &self.path).map_err(|e| {
            PrepError::Storage(format!(
                "Failed to replace {}: {}",
                self.path.display(),
                e
            ))
        })?;
        Ok(())
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::analyzer::PrepAnalyzer;
    use tempfile::tempdir;

    fn analyze(text: &str, company: &str, role: &str) -> (Analysis, AnalysisRequest) {
        let request = AnalysisRequest::new(text, company, role);
        let analysis = PrepAnalyzer::new(ScoringConfig::default())
            .unwrap()
            .analyze(&request);
        (analysis, request)
    }

    #[test]
    fn test_missing_file_is_empty_history() {
        let dir = tempdir().unwrap();
        let store = HistoryStore::new(dir.path().join("history.json"));
        assert!(store.list().is_empty());
        assert!(store.get("123").is_none());
    }

    #[test]
    fn test_corrupt_file_is_empty_history() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "{ not json").unwrap();

        let store = HistoryStore::new(&path);
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_save_moves_corrupt_file_aside() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "{ not json").unwrap();

        let store = HistoryStore::new(&path);
        let (analysis, request) = analyze("java", "", "");
        let entry = store.save(&analysis, &request).unwrap();

        let backup = dir.path().join("history.json.bak");
        assert_eq!(store.backup_path(), backup);
        assert_eq!(fs::read_to_string(&backup).unwrap(), "{ not json");
        assert_eq!(store.list().len(), 1);
        assert_eq!(store.list()[0].id, entry.id);
    }

    #[test]
    fn test_out_of_range_stored_score_is_capped() {
        let (analysis, request) = analyze("java", "", "");
        let mut entry = HistoryEntry::from_analysis("1".to_string(), Utc::now(), &analysis, &request);
        entry.readiness_score = 150;

        let scoring = ScoringConfig::default();
        assert_eq!(entry.displayed_score(&scoring), 100);
    }

    #[test]
    fn test_save_prepends_and_defaults_names() {
        let dir = tempdir().unwrap();
        let store = HistoryStore::new(dir.path().join("history.json"));

        let (analysis, request) = analyze("java", "", "");
        let first = store.save(&analysis, &request).unwrap();
        assert_eq!(first.company, "Untitled");
        assert_eq!(first.role, "General");

        let (analysis, request) = analyze("react", "Acme", "Frontend Developer");
        let second = store.save(&analysis, &request).unwrap();
        assert_ne!(first.id, second.id);

        let entries = store.list();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, second.id);
        assert_eq!(entries[0].company, "Acme");
        assert_eq!(entries[1].id, first.id);
    }

    #[test]
    fn test_round_trip_preserves_record() {
        let dir = tempdir().unwrap();
        let store = HistoryStore::new(dir.path().join("history.json"));

        let (analysis, request) = analyze("dsa python react sql docker", "Acme", "SDE");
        let saved = store.save(&analysis, &request).unwrap();
        let loaded = store.require(&saved.id).unwrap();

        assert_eq!(loaded, saved);
        assert_eq!(loaded.extracted_skills, analysis.extracted_skills);
        assert_eq!(loaded.questions, analysis.questions);
    }

    #[test]
    fn test_record_uses_camel_case_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        let store = HistoryStore::new(&path);

        let (analysis, request) = analyze("sql", "Acme", "Analyst");
        store.save(&analysis, &request).unwrap();

        let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let record = &raw[0];
        for key in [
            "id",
            "createdAt",
            "company",
            "role",
            "jdText",
            "extractedSkills",
            "readinessScore",
            "checklist",
            "plan",
            "questions",
        ] {
            assert!(record.get(key).is_some(), "missing {}", key);
        }
        assert!(record.get("skillConfidenceMap").is_none());
        assert!(record["createdAt"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn test_max_entries_drops_oldest() {
        let dir = tempdir().unwrap();
        let store = HistoryStore::new(dir.path().join("history.json")).with_max_entries(Some(2));

        let mut ids = Vec::new();
        for text in ["java", "python", "rust"] {
            let (analysis, request) = analyze(text, "", "");
            ids.push(store.save(&analysis, &request).unwrap().id);
        }

        let entries = store.list();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, ids[2]);
        assert_eq!(entries[1].id, ids[1]);
    }

    #[test]
    fn test_delete_and_clear() {
        let dir = tempdir().unwrap();
        let store = HistoryStore::new(dir.path().join("history.json"));

        let (analysis, request) = analyze("java", "", "");
        let entry = store.save(&analysis, &request).unwrap();

        assert!(!store.delete("missing").unwrap());
        assert!(store.delete(&entry.id).unwrap());
        assert!(store.list().is_empty());

        store.save(&analysis, &request).unwrap();
        store.clear().unwrap();
        assert!(store.list().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_confidence_overlay_keeps_base_score() {
        let dir = tempdir().unwrap();
        let store = HistoryStore::new(dir.path().join("history.json"));
        let scoring = ScoringConfig::default();

        let (analysis, request) = analyze("java react sql", "Acme", "SDE");
        let entry = store.save(&analysis, &request).unwrap();
        let base = entry.readiness_score;

        store.set_confidence(&entry.id, "java", Some(SkillConfidence::Know)).unwrap();
        store.set_confidence(&entry.id, "React", Some(SkillConfidence::Know)).unwrap();
        let updated = store
            .set_confidence(&entry.id, "Sql", Some(SkillConfidence::Practice))
            .unwrap();

        assert_eq!(updated.readiness_score, base);
        assert_eq!(updated.displayed_score(&scoring), base + 2);
        assert_eq!(updated.confidence("Java"), Some(SkillConfidence::Know));

        let cleared = store.set_confidence(&entry.id, "Sql", None).unwrap();
        assert_eq!(cleared.displayed_score(&scoring), base + 4);
        assert_eq!(store.require(&entry.id).unwrap(), cleared);
    }

    #[test]
    fn test_confidence_rejects_unknown_skill() {
        let dir = tempdir().unwrap();
        let store = HistoryStore::new(dir.path().join("history.json"));

        let (analysis, request) = analyze("python", "", "");
        let entry = store.save(&analysis, &request).unwrap();

        let err = store
            .set_confidence(&entry.id, "Pythn", Some(SkillConfidence::Know))
            .unwrap_err();
        match err {
            PrepError::UnknownSkill { suggestion, .. } => {
                assert_eq!(suggestion.as_deref(), Some("Python"))
            }
            other => panic!("unexpected error: {}", other),
        }

        let err = store
            .set_confidence("missing", "Python", Some(SkillConfidence::Know))
            .unwrap_err();
        assert!(matches!(err, PrepError::NotFound(_)));
    }
}
