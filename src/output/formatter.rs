//! Output formatters for analysis reports

use crate::config::{OutputConfig, OutputFormat, ScoringConfig};
use crate::error::Result;
use crate::output::report::{format_timestamp, PrepReport};
use crate::processing::readiness::SkillConfidence;
use crate::processing::taxonomy::SkillCategory;
use crate::storage::history::HistoryEntry;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

const SCORE_BAR_WIDTH: usize = 20;

/// Trait for formatting analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &PrepReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON formatter for structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for notes and documentation
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Standalone HTML page
pub struct HtmlFormatter {
    include_styles: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(
    ext = "html",
    source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Placement Readiness: {{ company }} / {{ role }}</title>
    {% if include_styles %}
    <style>
        body { font-family: -apple-system, 'Segoe UI', Roboto, sans-serif; max-width: 860px; margin: 0 auto; padding: 24px; color: #1e293b; background: #f8fafc; }
        .card { background: white; border-radius: 8px; padding: 20px 24px; margin: 16px 0; box-shadow: 0 1px 4px rgba(0,0,0,0.08); }
        .score { font-size: 3em; font-weight: bold; color: #4f46e5; }
        .bar { background: #e2e8f0; border-radius: 999px; height: 12px; }
        .fill { background: #4f46e5; border-radius: 999px; height: 12px; }
        .chip { display: inline-block; background: #eef2ff; color: #4f46e5; border-radius: 999px; padding: 2px 12px; margin: 2px; font-size: 0.9em; }
        .muted { color: #64748b; }
    </style>
    {% endif %}
</head>
<body>
    <h1>Analysis Results</h1>
    <p class="muted">{{ company }} &bull; {{ role }} &bull; {{ created }}</p>

    <div class="card">
        <h2>Readiness Score</h2>
        <div class="score">{{ score }}</div>
        {% if adjusted %}<p class="muted">Base score {{ base_score }}, adjusted by skill confidence</p>{% endif %}
        <div class="bar"><div class="fill" style="width: {{ score }}%"></div></div>
        <p>{{ verdict }}</p>
    </div>

    <div class="card">
        <h2>Extracted Skills</h2>
        {% if skill_groups.is_empty() %}
        <p class="muted">No specific skills detected. General fresher stack recommended.</p>
        {% else %}
        {% for group in skill_groups %}
        <h4>{{ group.category }}</h4>
        <div>{% for skill in group.skills %}<span class="chip">{{ skill }}</span>{% endfor %}</div>
        {% endfor %}
        {% endif %}
    </div>

    {% for round in rounds %}
    <div class="card">
        <h3>{{ round.title }}</h3>
        <ul>{% for item in round.items %}<li>{{ item }}</li>{% endfor %}</ul>
    </div>
    {% endfor %}

    <h2>7-Day Preparation Plan</h2>
    {% for day in days %}
    <div class="card">
        <h3>{{ day.title }}</h3>
        <ul>{% for topic in day.items %}<li>{{ topic }}</li>{% endfor %}</ul>
    </div>
    {% endfor %}

    <div class="card">
        <h2>10 Likely Interview Questions</h2>
        <ol>{% for question in questions %}<li>{{ question }}</li>{% endfor %}</ol>
    </div>
</body>
</html>"#
)]
struct HtmlTemplate {
    include_styles: bool,
    company: String,
    role: String,
    created: String,
    score: u8,
    base_score: u8,
    adjusted: bool,
    verdict: String,
    skill_groups: Vec<HtmlSkillGroup>,
    rounds: Vec<HtmlSection>,
    days: Vec<HtmlSection>,
    questions: Vec<String>,
}

struct HtmlSkillGroup {
    category: String,
    skills: Vec<String>,
}

struct HtmlSection {
    title: String,
    items: Vec<String>,
}

fn confidence_tag(confidence: Option<SkillConfidence>) -> &'static str {
    match confidence {
        Some(SkillConfidence::Know) => " (know)",
        Some(SkillConfidence::Practice) => " (practice)",
        None => "",
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_bar(&self, score: u8) -> String {
        let filled = (score as usize / 5).min(SCORE_BAR_WIDTH);
        let bar = format!("{}{}", "■".repeat(filled), "□".repeat(SCORE_BAR_WIDTH - filled));
        let color = match score {
            80..=100 => Color::Green,
            60..=79 => Color::BrightGreen,
            40..=59 => Color::Yellow,
            _ => Color::Red,
        };
        self.colorize(&bar, color)
    }

    /// Compact listing for `history list`
    pub fn format_history(&self, entries: &[HistoryEntry], scoring: &ScoringConfig) -> String {
        let mut output = String::new();
        output.push_str(&self.format_header("Analysis History", 1));
        output.push_str(&format!("{} saved analyses\n\n", entries.len()));

        if entries.is_empty() {
            output.push_str("No analyses yet. Run `placement-prep analyze` to create one.\n");
            return output;
        }

        for entry in entries {
            let score = entry.displayed_score(scoring);
            output.push_str(&format!(
                "{}  {:>3}  {:>2} skills  {} • {}  ({})\n",
                self.colorize(&entry.id, Color::Cyan),
                score,
                entry.extracted_skills.category_count(),
                entry.company,
                entry.role,
                format_timestamp(&entry.created_at)
            ));
        }

        output
    }

    /// Taxonomy listing for `skills`
    pub fn format_taxonomy(&self, taxonomy: &[SkillCategory]) -> String {
        let mut output = String::new();
        output.push_str(&self.format_header("Skill Taxonomy", 1));

        for category in taxonomy {
            let marker = if category.important { " *" } else { "" };
            output.push_str(&format!(
                "{}{}\n  {}\n",
                self.colorize(category.name, Color::Green),
                marker,
                category.keywords.join(", ")
            ));
        }
        output.push_str("\n* important category\n");
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &PrepReport) -> Result<String> {
        let entry = &report.entry;
        let mut output = String::new();

        output.push_str(&self.format_header("📊 PLACEMENT READINESS ANALYSIS", 1));
        output.push_str(&format!(
            "{} • {} • {}\n",
            entry.company,
            entry.role,
            report.created_display()
        ));
        if report.metadata.stored {
            output.push_str(&format!("ID: {}\n", self.colorize(&entry.id, Color::Cyan)));
        }

        // Readiness
        output.push_str(&self.format_header("Readiness Score", 2));
        output.push_str(&format!(
            "{}/100 {}\n",
            report.displayed_score,
            self.format_score_bar(report.displayed_score)
        ));
        if report.is_adjusted() {
            output.push_str(&format!(
                "Base score {} adjusted by skill confidence\n",
                entry.readiness_score
            ));
        }
        output.push_str(&format!("{}\n", self.colorize(&report.verdict, Color::Cyan)));

        // Skills
        output.push_str(&self.format_header("Extracted Skills", 2));
        if entry.extracted_skills.is_empty() {
            output.push_str("No specific skills detected. General fresher stack recommended.\n");
        } else {
            for (category, skills) in entry.extracted_skills.iter() {
                let labels: Vec<String> = skills
                    .iter()
                    .map(|s| format!("{}{}", s, confidence_tag(entry.confidence(s))))
                    .collect();
                output.push_str(&format!(
                    "  {}: {}\n",
                    self.colorize(category, Color::Green),
                    labels.join(", ")
                ));
            }
        }

        // Rounds
        output.push_str(&self.format_header("Interview Rounds", 2));
        for round in &entry.checklist {
            output.push_str(&self.format_header(&round.round, 3));
            for item in &round.items {
                output.push_str(&format!("  • {}\n", item));
            }
        }

        // Plan
        output.push_str(&self.format_header("7-Day Preparation Plan", 2));
        for day in &entry.plan {
            output.push_str(&self.format_header(&day.day, 3));
            for topic in &day.topics {
                output.push_str(&format!("  › {}\n", topic));
            }
        }

        // Questions
        output.push_str(&self.format_header("10 Likely Interview Questions", 2));
        for (i, question) in entry.questions.iter().enumerate() {
            output.push_str(&format!("{:>3}. {}\n", i + 1, question));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &PrepReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &PrepReport) -> Result<String> {
        let entry = &report.entry;
        let mut output = String::new();

        output.push_str("# 📊 Placement Readiness Analysis\n\n");
        output.push_str(&format!(
            "**Company:** {} | **Role:** {} | **Created:** {}\n\n",
            entry.company,
            entry.role,
            report.created_display()
        ));

        if self.include_metadata {
            output.push_str(&format!(
                "**ID:** `{}` | **Generated:** {} | **Version:** {}\n\n",
                entry.id,
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.tool_version
            ));
        }

        output.push_str("## Readiness Score\n\n");
        output.push_str(&format!("**{}/100**: {}\n\n", report.displayed_score, report.verdict));
        if report.is_adjusted() {
            output.push_str(&format!(
                "_Base score {} adjusted by skill confidence._\n\n",
                entry.readiness_score
            ));
        }

        output.push_str("## Extracted Skills\n\n");
        if entry.extracted_skills.is_empty() {
            output.push_str("No specific skills detected. General fresher stack recommended.\n\n");
        } else {
            output.push_str("| Category | Skills |\n");
            output.push_str("|----------|--------|\n");
            for (category, skills) in entry.extracted_skills.iter() {
                let labels: Vec<String> = skills
                    .iter()
                    .map(|s| format!("{}{}", s, confidence_tag(entry.confidence(s))))
                    .collect();
                output.push_str(&format!("| {} | {} |\n", category, labels.join(", ")));
            }
            output.push('\n');
        }

        output.push_str("## Interview Rounds\n\n");
        for round in &entry.checklist {
            output.push_str(&format!("### {}\n\n", round.round));
            for item in &round.items {
                output.push_str(&format!("- {}\n", item));
            }
            output.push('\n');
        }

        output.push_str("## 7-Day Preparation Plan\n\n");
        for day in &entry.plan {
            output.push_str(&format!("### {}\n\n", day.day));
            for topic in &day.topics {
                output.push_str(&format!("- {}\n", topic));
            }
            output.push('\n');
        }

        output.push_str("## 10 Likely Interview Questions\n\n");
        for (i, question) in entry.questions.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, question));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data(&self, report: &PrepReport) -> HtmlTemplate {
        let entry = &report.entry;

        HtmlTemplate {
            include_styles: self.include_styles,
            company: entry.company.clone(),
            role: entry.role.clone(),
            created: report.created_display(),
            score: report.displayed_score,
            base_score: entry.readiness_score,
            adjusted: report.is_adjusted(),
            verdict: report.verdict.clone(),
            skill_groups: entry
                .extracted_skills
                .iter()
                .map(|(category, skills)| HtmlSkillGroup {
                    category: category.to_string(),
                    skills: skills
                        .iter()
                        .map(|s| format!("{}{}", s, confidence_tag(entry.confidence(s))))
                        .collect(),
                })
                .collect(),
            rounds: entry
                .checklist
                .iter()
                .map(|r| HtmlSection {
                    title: r.round.clone(),
                    items: r.items.clone(),
                })
                .collect(),
            days: entry
                .plan
                .iter()
                .map(|d| HtmlSection {
                    title: d.day.clone(),
                    items: d.topics.clone(),
                })
                .collect(),
            questions: entry.questions.clone(),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &PrepReport) -> Result<String> {
        Ok(self.create_template_data(report).render()?)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn with_options(use_colors: bool, pretty_json: bool, include_metadata: bool, include_html_styles: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(include_html_styles),
        }
    }

    pub fn from_config(output: &OutputConfig) -> Self {
        Self::with_options(output.color_output, output.pretty_json, true, true)
    }

    pub fn generate_report(&self, report: &PrepReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }

    pub fn console(&self) -> &ConsoleFormatter {
        &self.console_formatter
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// Utility functions for saving reports
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, company: &str, timestamp: bool) -> String {
    let slug: String = company
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect::<String>()
        .split('_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_");
    let base_name = if slug.is_empty() { "analysis".to_string() } else { slug };

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_prep{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_prep{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_prep{}.md", base_name, timestamp_suffix),
        OutputFormat::Html => format!("{}_prep{}.html", base_name, timestamp_suffix),
    }
}
