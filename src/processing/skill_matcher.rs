//! Whole-word keyword matching of job descriptions against the skill taxonomy

use crate::error::{PrepError, Result};
use crate::processing::taxonomy::{SkillCategory, TAXONOMY};
use indexmap::IndexMap;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Matcher holding one compiled pattern per taxonomy keyword
pub struct SkillMatcher {
    categories: Vec<CategoryPatterns>,
}

struct CategoryPatterns {
    name: &'static str,
    keywords: Vec<(&'static str, Regex)>,
}

/// Detected skill labels grouped by category, in taxonomy order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DetectedSkills(IndexMap<String, Vec<String>>);

impl DetectedSkills {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the map holds `key`. Keys are category names.
    pub fn contains_category(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn skills(&self, category: &str) -> Option<&[String]> {
        self.0.get(category).map(|v| v.as_slice())
    }

    /// First skill detected in `category`, if any
    pub fn first(&self, category: &str) -> Option<&str> {
        self.skills(category)
            .and_then(|skills| skills.first())
            .map(|s| s.as_str())
    }

    pub fn category_count(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Every detected skill label across categories
    pub fn all_skills(&self) -> impl Iterator<Item = &str> {
        self.0.values().flatten().map(|s| s.as_str())
    }

    pub fn contains_skill(&self, skill: &str) -> bool {
        self.all_skills().any(|s| s == skill)
    }

    fn insert(&mut self, category: &str, skills: Vec<String>) {
        self.0.insert(category.to_string(), skills);
    }
}

impl SkillMatcher {
    /// Compile patterns for the built-in taxonomy
    pub fn new() -> Result<Self> {
        Self::with_taxonomy(TAXONOMY)
    }

    pub fn with_taxonomy(taxonomy: &[SkillCategory]) -> Result<Self> {
        let mut categories = Vec::with_capacity(taxonomy.len());

        for category in taxonomy {
            let mut keywords = Vec::with_capacity(category.keywords.len());
            for keyword in category.keywords {
                keywords.push((*keyword, Self::keyword_pattern(keyword)?));
            }
            categories.push(CategoryPatterns {
                name: category.name,
                keywords,
            });
        }

        Ok(Self { categories })
    }

    /// Literal keyword bounded by text edges or non-word characters.
    /// Word characters are ASCII letters, digits and underscore, so
    /// "c++" and "c#" still match when followed by a space.
    fn keyword_pattern(keyword: &str) -> Result<Regex> {
        let pattern = format!(
            r"(?:^|[^0-9a-z_]){}(?:$|[^0-9a-z_])",
            regex::escape(&keyword.to_lowercase())
        );
        Regex::new(&pattern).map_err(|e| {
            PrepError::Processing(format!("Failed to build pattern for '{}': {}", keyword, e))
        })
    }

    /// Detect skills in a job description. Blank text yields no categories.
    pub fn extract(&self, text: &str) -> DetectedSkills {
        let mut detected = DetectedSkills::new();
        if text.is_empty() {
            return detected;
        }

        let text_lower = text.to_lowercase();

        for category in &self.categories {
            let mut found: Vec<String> = Vec::new();

            for (keyword, pattern) in &category.keywords {
                if pattern.is_match(&text_lower) {
                    let label = capitalize_first(keyword);
                    if !found.contains(&label) {
                        found.push(label);
                    }
                }
            }

            if !found.is_empty() {
                debug!("{}: {}", category.name, found.join(", "));
                detected.insert(category.name, found);
            }
        }

        detected
    }

    /// Detect skills in an untyped value; anything but a string is treated as empty
    pub fn extract_value(&self, value: &Value) -> DetectedSkills {
        match value {
            Value::String(text) => self.extract(text),
            _ => DetectedSkills::new(),
        }
    }

    /// Get total number of keyword patterns
    pub fn keyword_count(&self) -> usize {
        self.categories.iter().map(|c| c.keywords.len()).sum()
    }
}

/// Upper-case only the first character, leaving the rest as authored
pub fn capitalize_first(keyword: &str) -> String {
    let mut chars = keyword.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::taxonomy::{CLOUD_DEVOPS, CORE_CS, DATA, LANGUAGES, TESTING, WEB};
    use serde_json::json;

    #[test]
    fn test_matcher_creation() {
        let matcher = SkillMatcher::new().unwrap();
        assert_eq!(matcher.keyword_count(), crate::processing::taxonomy::keyword_count());
    }

    #[test]
    fn test_exact_matching() {
        let matcher = SkillMatcher::new().unwrap();
        let detected = matcher.extract("We use React, Python and AWS every day.");

        let categories: Vec<&str> = detected.categories().collect();
        assert_eq!(categories, vec![LANGUAGES, WEB, CLOUD_DEVOPS]);
        assert_eq!(detected.skills(LANGUAGES).unwrap(), ["Python".to_string()]);
        assert_eq!(detected.skills(WEB).unwrap(), ["React".to_string()]);
        assert_eq!(detected.skills(CLOUD_DEVOPS).unwrap(), ["Aws".to_string()]);
        assert!(!detected.contains_category(CORE_CS));
    }

    #[test]
    fn test_empty_and_non_string_input() {
        let matcher = SkillMatcher::new().unwrap();
        assert!(matcher.extract("").is_empty());
        assert_eq!(matcher.extract_value(&Value::Null).category_count(), 0);
        assert_eq!(matcher.extract_value(&json!(42)).category_count(), 0);
        assert_eq!(matcher.extract_value(&json!(["java"])).category_count(), 0);
        assert_eq!(matcher.extract_value(&json!("java")).category_count(), 1);
    }

    #[test]
    fn test_word_boundaries() {
        let matcher = SkillMatcher::new().unwrap();

        let detected = matcher.extract("Strong TypeScript skills");
        assert_eq!(detected.skills(LANGUAGES).unwrap(), ["Typescript".to_string()]);

        // "java" must not match inside "javascript"
        let detected = matcher.extract("javascript only");
        assert_eq!(detected.skills(LANGUAGES).unwrap(), ["Javascript".to_string()]);

        // "os" must not match inside "cost"
        assert!(matcher.extract("low cost hosting").is_empty());
    }

    #[test]
    fn test_special_character_keywords() {
        let matcher = SkillMatcher::new().unwrap();

        let detected = matcher.extract("Experience in C++ and C# required, plus CI/CD.");
        assert_eq!(
            detected.skills(LANGUAGES).unwrap(),
            ["C++".to_string(), "C#".to_string()]
        );
        assert_eq!(detected.skills(CLOUD_DEVOPS).unwrap(), ["Ci/cd".to_string()]);

        let detected = matcher.extract("node.js");
        assert_eq!(detected.skills(WEB).unwrap(), ["Node.js".to_string()]);
        // The dot is literal
        assert!(matcher.extract("nodexjs").is_empty());
    }

    #[test]
    fn test_repeated_keyword_counted_once() {
        let matcher = SkillMatcher::new().unwrap();
        let detected = matcher.extract("SQL, sql and more SQL. Also Jest testing.");

        assert_eq!(detected.skills(DATA).unwrap(), ["Sql".to_string()]);
        assert_eq!(
            detected.skills(TESTING).unwrap(),
            ["Jest".to_string(), "Testing".to_string()]
        );
    }

    #[test]
    fn test_keyword_order_follows_taxonomy() {
        let matcher = SkillMatcher::new().unwrap();
        let detected = matcher.extract("kotlin then java then go");

        assert_eq!(
            detected.skills(LANGUAGES).unwrap(),
            ["Java".to_string(), "Go".to_string(), "Kotlin".to_string()]
        );
        assert_eq!(detected.first(LANGUAGES), Some("Java"));
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("data structures"), "Data structures");
        assert_eq!(capitalize_first("tcp/ip"), "Tcp/ip");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let matcher = SkillMatcher::new().unwrap();
        let detected = matcher.extract("docker, python");

        let json = serde_json::to_string(&detected).unwrap();
        assert_eq!(json, r#"{"Languages":["Python"],"Cloud/DevOps":["Docker"]}"#);

        let back: DetectedSkills = serde_json::from_str(&json).unwrap();
        assert_eq!(back, detected);
    }
}
