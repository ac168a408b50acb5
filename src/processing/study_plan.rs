//! 7-day preparation plan

use crate::processing::skill_matcher::DetectedSkills;
use crate::processing::taxonomy::{CLOUD_DEVOPS, CORE_CS, DATA, LANGUAGES, WEB};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDay {
    pub day: String,
    pub topics: Vec<String>,
}

impl PlanDay {
    fn new(day: &str, topics: Vec<String>) -> Self {
        Self {
            day: day.to_string(),
            topics,
        }
    }
}

fn pick(condition: bool, when_true: &str, otherwise: &str) -> String {
    let line = if condition { when_true } else { otherwise };
    line.to_string()
}

/// Five day blocks covering the week. The role does not change the plan yet.
pub fn seven_day_plan(detected: &DetectedSkills, _role: &str) -> Vec<PlanDay> {
    let has_web = detected.contains_category(WEB);
    let has_data = detected.contains_category(DATA);
    let has_core = detected.contains_category(CORE_CS);
    let has_cloud = detected.contains_category(CLOUD_DEVOPS);

    let language_line = match detected.first(LANGUAGES) {
        Some(language) => format!("Practice with your strongest language ({})", language),
        None => "Practice coding problems".to_string(),
    };

    vec![
        PlanDay::new(
            "Day 1-2: Foundations & Core CS",
            vec![
                "Review: Big O notation, Time/Space complexity".to_string(),
                "Core topics: Arrays, Strings, Linked Lists".to_string(),
                pick(
                    has_core,
                    "DBMS basics (keys, relationships, normalization)",
                    "Database fundamentals",
                ),
                "OS fundamentals: Processes, Memory, Threads".to_string(),
                "Quick revision of fundamentals".to_string(),
            ],
        ),
        PlanDay::new(
            "Day 3-4: DSA Deep Dive & Coding",
            vec![
                "Trees & Graphs (BFS, DFS, traversals)".to_string(),
                "Sorting, Searching, & Hashing".to_string(),
                "Common problem patterns (Two pointers, Sliding window)".to_string(),
                language_line,
                "20+ medium-level coding problems".to_string(),
            ],
        ),
        PlanDay::new(
            "Day 5: Tech Stack & Projects",
            vec![
                pick(
                    has_web,
                    "Frontend: Component design & state management",
                    "Web development basics",
                ),
                pick(has_data, "Database design & optimization", "SQL query optimization"),
                "Project review: How you built & decisions made".to_string(),
                pick(has_cloud, "Deployment & DevOps overview", "Deployment concepts"),
                "Resume alignment with role".to_string(),
            ],
        ),
        PlanDay::new(
            "Day 6: Mock Interviews & Questions",
            vec![
                "Solve 10 behavioral interview questions".to_string(),
                "Technical mock with peer or platform".to_string(),
                "Optimize previously solved problems".to_string(),
                "Test yourself on random DSA problems".to_string(),
                "Prepare for common follow-up questions".to_string(),
            ],
        ),
        PlanDay::new(
            "Day 7: Revision & Weak Areas",
            vec![
                "Revise hardest topics from Days 1-4".to_string(),
                "Quick DSA algorithm review".to_string(),
                "Mock final round (full time)".to_string(),
                "System design discussion".to_string(),
                "Final confidence check".to_string(),
            ],
        ),
    ]
}
