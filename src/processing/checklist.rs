//! Interview round checklist

use crate::processing::skill_matcher::DetectedSkills;
use crate::processing::taxonomy::{CLOUD_DEVOPS, DATA};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistRound {
    pub round: String,
    pub items: Vec<String>,
}

impl ChecklistRound {
    fn new(round: &str, items: Vec<&str>) -> Self {
        Self {
            round: round.to_string(),
            items: items.into_iter().map(String::from).collect(),
        }
    }
}

/// Role flags derived from substring heuristics on the role title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleProfile {
    pub backend: bool,
    pub frontend: bool,
    pub fullstack: bool,
    pub data: bool,
}

impl RoleProfile {
    pub fn from_role(role: &str) -> Self {
        let ro = role.to_lowercase();
        let backend = ro.contains("backend") || ro.contains("server");
        let frontend = ro.contains("frontend") || ro.contains("ui");
        let fullstack =
            ro.contains("fullstack") || ro.contains("full-stack") || (!backend && !frontend);
        let data = ro.contains("data") || ro.contains("analytics");

        Self {
            backend,
            frontend,
            fullstack,
            data,
        }
    }
}

/// Build the four interview rounds for the detected skills and role
pub fn round_checklist(detected: &DetectedSkills, role: &str) -> Vec<ChecklistRound> {
    let profile = RoleProfile::from_role(role);

    // Looked up as map keys, which are category names
    let has_oop = detected.contains_category("OOP");
    let has_dbms = detected.contains_category("DBMS");

    let sql_line = if profile.data {
        "✓ SQL queries & optimization"
    } else if detected.contains_category(DATA) {
        "✓ SQL proficiency"
    } else {
        "- Database queries"
    };

    vec![
        ChecklistRound::new(
            "Round 1: Aptitude & Basics",
            vec![
                "✓ Quantitative aptitude (time, distance, percentages)",
                "✓ Logical reasoning (puzzles, patterns)",
                "✓ Data interpretation (tables, graphs)",
                "✓ English comprehension (grammar, vocabulary)",
                "✓ Decision-making scenarios",
                "✓ Basic problem-solving",
            ],
        ),
        ChecklistRound::new(
            "Round 2: Core CS & DSA",
            vec![
                "✓ Data structures (arrays, linked lists, trees, graphs)",
                "✓ Sorting & searching algorithms",
                if has_oop {
                    "✓ OOP concepts (inheritance, polymorphism, abstraction)"
                } else {
                    "- OOP basics"
                },
                if has_dbms {
                    "✓ Database fundamentals & normalization"
                } else {
                    "- Database concepts"
                },
                "✓ Time & space complexity analysis",
                "✓ Problem-solving with optimal solutions",
                "✓ System design fundamentals",
            ],
        ),
        ChecklistRound::new(
            "Round 3: Technical Interview",
            vec![
                if profile.frontend || profile.fullstack {
                    "✓ Frontend frameworks (React/Vue/Angular)"
                } else {
                    "- Frontend basics"
                },
                if profile.backend || profile.fullstack {
                    "✓ Backend development & APIs"
                } else {
                    "- Backend concepts"
                },
                sql_line,
                if detected.contains_category(CLOUD_DEVOPS) {
                    "✓ Cloud deployment & DevOps"
                } else {
                    "- Cloud concepts"
                },
                "✓ Project walkthrough & decisions",
                "✓ Code quality & best practices",
                "✓ Debugging & optimization",
            ],
        ),
        ChecklistRound::new(
            "Round 4: HR & Managerial",
            vec![
                "✓ Behavioral questions (STAR method)",
                "✓ Team collaboration & communication",
                "✓ Conflict resolution scenarios",
                "✓ Achievements & impact stories",
                "✓ Company & role knowledge",
                "✓ Salary & expectations discussion",
                "✓ Questions for the interviewer",
            ],
        ),
    ]
}
