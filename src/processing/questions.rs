//! Likely interview questions for an analysis

use crate::processing::skill_matcher::DetectedSkills;
use crate::processing::taxonomy::{CLOUD_DEVOPS, CORE_CS, DATA, LANGUAGES, WEB};
use rand::Rng;

pub const QUESTION_COUNT: usize = 10;

const CORE_CS_QUESTIONS: [&str; 3] = [
    "Explain the difference between stack and heap memory. When would you use each?",
    "How would you approach designing a database schema for a complex system?",
    "Describe a time you optimized code. What was the bottleneck?",
];

const DSA_QUESTIONS: [&str; 2] = [
    "How would you find the Kth largest element in an unsorted array efficiently?",
    "Explain when you would use a hash table vs. a binary search tree.",
];

const WEB_QUESTION: &str = "How does React's virtual DOM improve performance?";
const DATA_QUESTION: &str = "Explain database indexing. What types of indexes do you know?";
const CLOUD_QUESTION: &str = "How would you containerize a Node.js application with Docker?";

pub const BEHAVIORAL_QUESTIONS: [&str; 2] = [
    "Tell me about a challenging project you worked on. How did you overcome the obstacles?",
    "Describe a time you had to learn something new quickly. How did you approach it?",
];

/// Sampled at random to fill the list
pub const GENERIC_QUESTIONS: [&str; 5] = [
    "What are your strengths and how do they relate to this role?",
    "Where do you see yourself in 5 years?",
    "Why are you interested in this company?",
    "How do you handle debugging production issues?",
    "Describe your experience with version control systems.",
];

/// Taken in order once every generic question is already used
pub const RESERVE_QUESTIONS: [&str; 5] = [
    "Walk me through a project on your resume from design to deployment.",
    "How do you prioritize tasks when working against a tight deadline?",
    "What is the difference between a process and a thread?",
    "How do you make sure code you write is easy for others to maintain?",
    "Tell me about a mistake you made and what you learned from it.",
];

fn language_question(language: &str) -> Option<&'static str> {
    match language.to_lowercase().as_str() {
        "java" => Some("Explain the difference between checked and unchecked exceptions in Java."),
        "python" => Some("What are decorators in Python and how do you use them?"),
        "javascript" | "typescript" => {
            Some("Explain closures in JavaScript and provide a practical example.")
        }
        _ => None,
    }
}

/// Questions driven purely by the detected categories, before filling
pub fn category_questions(detected: &DetectedSkills) -> Vec<&'static str> {
    let mut questions = Vec::new();

    if detected.contains_category(CORE_CS) {
        questions.extend(CORE_CS_QUESTIONS);
    }

    if detected.contains_category(CORE_CS) {
        questions.extend(DSA_QUESTIONS);
    }

    if let Some(language) = detected.first(LANGUAGES) {
        if let Some(question) = language_question(language) {
            questions.push(question);
        }
    }

    if detected.contains_category(WEB) {
        questions.push(WEB_QUESTION);
    }

    if detected.contains_category(DATA) {
        questions.push(DATA_QUESTION);
    }

    if detected.contains_category(CLOUD_DEVOPS) {
        questions.push(CLOUD_QUESTION);
    }

    questions
}

/// Exactly ten distinct questions. `rng` drives the generic fill-in only.
pub fn interview_questions<R: Rng + ?Sized>(
    detected: &DetectedSkills,
    _role: &str,
    rng: &mut R,
) -> Vec<String> {
    let mut questions = category_questions(detected);
    questions.extend(BEHAVIORAL_QUESTIONS);

    while questions.len() < QUESTION_COUNT
        && GENERIC_QUESTIONS.iter().any(|q| !questions.contains(q))
    {
        let candidate = GENERIC_QUESTIONS[rng.gen_range(0..GENERIC_QUESTIONS.len())];
        if !questions.contains(&candidate) {
            questions.push(candidate);
        }
    }

    for reserve in RESERVE_QUESTIONS {
        if questions.len() >= QUESTION_COUNT {
            break;
        }
        if !questions.contains(&reserve) {
            questions.push(reserve);
        }
    }

    questions.truncate(QUESTION_COUNT);
    questions.into_iter().map(String::from).collect()
}
