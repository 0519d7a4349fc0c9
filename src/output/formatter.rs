//! Output formatters: console, JSON and Markdown renderings of a report

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::{AdvisorReport, ReportContent, ReportMetadata};
use crate::processing::assembler::{CourseRecommendation, RecommendationResult, ScoreBasis, SimilarCourses};
use crate::processing::learning_path::generic_description;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting advisor reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AdvisorReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for structured output
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for saved reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates the formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn format_score(rec: &CourseRecommendation) -> String {
    match rec.score_basis {
        ScoreBasis::Similarity => format!("{:.1}% match", rec.score),
        ScoreBasis::Rating => format!("{:.1}/5", rec.score),
    }
}

fn format_price(rec: &CourseRecommendation) -> String {
    match rec.course.price {
        Some(price) if !rec.course.is_free() => format!("${:.2}", price),
        _ => "Free".to_string(),
    }
}

fn format_timestamp(metadata: &ReportMetadata) -> String {
    metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
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

    fn similarity_color(score: f64) -> Color {
        match score {
            s if s >= 70.0 => Color::Green,
            s if s >= 40.0 => Color::Yellow,
            _ => Color::Red,
        }
    }

    fn format_course(&self, output: &mut String, index: usize, rec: &CourseRecommendation) {
        let course = &rec.course;
        output.push_str(&format!(
            "  {}. {} [{}]\n",
            index + 1,
            self.colorize(&course.name, Color::Cyan),
            format_score(rec)
        ));
        output.push_str(&format!(
            "     {} | {} | {} | rating {:.1} | {}\n",
            course.platform,
            course.skill,
            course.difficulty,
            course.rating,
            format_price(rec)
        ));
        if self.detailed {
            if let Some(instructor) = &course.instructor {
                output.push_str(&format!("     Instructor: {}\n", instructor));
            }
            if let Some(duration) = &course.duration {
                output.push_str(&format!("     Duration: {}\n", duration));
            }
            output.push_str(&format!("     {}\n", course.description));
        }
        output.push_str(&format!("     {}\n", self.colorize(&course.url, Color::BrightBlack)));
    }

    fn format_recommendation(&self, output: &mut String, result: &RecommendationResult) {
        output.push_str(&self.format_header(&format!("Specialization: {}", result.specialization), 2));

        if result.profile_comparisons.is_empty() {
            output.push_str(&self.colorize("  No reference profiles for this specialization.\n", Color::Yellow));
        } else {
            output.push_str(&self.format_header("Reference Profiles", 3));
            for comparison in &result.profile_comparisons {
                let score = format!("{:.1}%", comparison.similarity_score);
                output.push_str(&format!(
                    "  • {} ({}, {} yrs): {}\n",
                    comparison.name,
                    comparison.company,
                    comparison.experience_years,
                    self.colorize(&score, Self::similarity_color(comparison.similarity_score))
                ));
                if self.detailed {
                    output.push_str(&format!("      common:  {}\n", comparison.common_skills.join(", ")));
                    output.push_str(&format!("      missing: {}\n", comparison.missing_skills.join(", ")));
                }
            }
        }

        if result.has_gaps() {
            output.push_str(&self.format_header("Missing Skills", 3));
            for skill in &result.missing_skills {
                output.push_str(&format!("  • {}\n", self.colorize(skill, Color::Yellow)));
            }
        }

        output.push_str(&self.format_header(&format!("Recommended Courses ({})", result.strategy), 3));
        if result.course_recommendations.is_empty() {
            output.push_str("  No matching courses found.\n");
        }
        for (index, rec) in result.course_recommendations.iter().enumerate() {
            self.format_course(output, index, rec);
        }

        for (title, recs) in [
            ("Paid Courses", &result.paid_courses),
            ("Free Learning Resources", &result.free_courses),
        ] {
            if recs.is_empty() {
                continue;
            }
            output.push_str(&self.format_header(title, 3));
            for (index, rec) in recs.iter().enumerate() {
                self.format_course(output, index, rec);
            }
        }

        if self.detailed && !result.learning_path.is_empty() {
            output.push_str(&self.format_header("Learning Path", 3));
            for (index, step) in result.learning_path.iter().enumerate() {
                output.push_str(&format!(
                    "  {}. {} ({})\n",
                    index + 1,
                    self.colorize(&step.skill, Color::Green),
                    step.duration
                ));
                let description = step
                    .description
                    .clone()
                    .unwrap_or_else(|| generic_description(&step.skill, &result.specialization));
                output.push_str(&format!("     {}\n", description));
            }
        }
    }

    fn format_similar(&self, output: &mut String, similar: &SimilarCourses) {
        output.push_str(&self.format_header(&format!("Courses similar to: {}", similar.target), 2));
        if similar.recommendations.is_empty() {
            output.push_str("  No other courses in the catalog.\n");
        }
        for (index, rec) in similar.recommendations.iter().enumerate() {
            self.format_course(output, index, rec);
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AdvisorReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("SKILL GAP ANALYSIS", 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms | Courses: {}\n",
            format_timestamp(&report.metadata),
            report.metadata.processing_time_ms,
            report.metadata.corpus_size
        ));

        match &report.content {
            ReportContent::Recommendation(result) => self.format_recommendation(&mut output, result),
            ReportContent::Similar(similar) => self.format_similar(&mut output, similar),
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
    fn format_report(&self, report: &AdvisorReport) -> Result<String> {
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

    fn course_table(output: &mut String, recs: &[CourseRecommendation]) {
        output.push_str("| # | Course | Platform | Skill | Difficulty | Price | Score |\n");
        output.push_str("|---|--------|----------|-------|------------|-------|-------|\n");
        for (index, rec) in recs.iter().enumerate() {
            output.push_str(&format!(
                "| {} | [{}]({}) | {} | {} | {} | {} | {} |\n",
                index + 1,
                rec.course.name,
                rec.course.url,
                rec.course.platform,
                rec.course.skill,
                rec.course.difficulty,
                format_price(rec),
                format_score(rec)
            ));
        }
        output.push('\n');
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AdvisorReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Skill Gap Analysis Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Processing Time:** {}ms | **Courses:** {}\n\n",
                format_timestamp(&report.metadata),
                report.metadata.processing_time_ms,
                report.metadata.corpus_size
            ));
        }

        match &report.content {
            ReportContent::Recommendation(result) => {
                output.push_str(&format!("## Specialization: {}\n\n", result.specialization));

                output.push_str("### Reference Profiles\n\n");
                if result.profile_comparisons.is_empty() {
                    output.push_str("_No reference profiles for this specialization._\n\n");
                } else {
                    output.push_str("| Name | Company | Experience | Similarity | Missing |\n");
                    output.push_str("|------|---------|------------|------------|---------|\n");
                    for c in &result.profile_comparisons {
                        output.push_str(&format!(
                            "| {} | {} | {} yrs | {:.1}% | {} |\n",
                            c.name,
                            c.company,
                            c.experience_years,
                            c.similarity_score,
                            c.missing_skills.join(", ")
                        ));
                    }
                    output.push('\n');
                }

                if result.has_gaps() {
                    output.push_str("### Missing Skills\n\n");
                    for skill in &result.missing_skills {
                        output.push_str(&format!("- {}\n", skill));
                    }
                    output.push('\n');
                }

                output.push_str(&format!("### Recommended Courses ({})\n\n", result.strategy));
                if result.course_recommendations.is_empty() {
                    output.push_str("_No matching courses found._\n\n");
                } else {
                    Self::course_table(&mut output, &result.course_recommendations);
                }

                if !result.paid_courses.is_empty() {
                    output.push_str("### Paid Courses\n\n");
                    Self::course_table(&mut output, &result.paid_courses);
                }
                if !result.free_courses.is_empty() {
                    output.push_str("### Free Learning Resources\n\n");
                    Self::course_table(&mut output, &result.free_courses);
                }

                if !result.learning_path.is_empty() {
                    output.push_str("### Learning Path\n\n");
                    for (index, step) in result.learning_path.iter().enumerate() {
                        let description = step
                            .description
                            .clone()
                            .unwrap_or_else(|| generic_description(&step.skill, &result.specialization));
                        output.push_str(&format!(
                            "{}. **{}** ({}): {}\n",
                            index + 1,
                            step.skill,
                            step.duration,
                            description
                        ));
                    }
                    output.push('\n');
                }
            }
            ReportContent::Similar(similar) => {
                output.push_str(&format!("## Courses similar to: {}\n\n", similar.target));
                if similar.recommendations.is_empty() {
                    output.push_str("_No other courses in the catalog._\n\n");
                } else {
                    Self::course_table(&mut output, &similar.recommendations);
                }
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &AdvisorReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
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

pub fn suggest_filename(format: &OutputFormat, subject: &str, timestamp: bool) -> String {
    let slug: String = subject
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    let slug = if slug.is_empty() { "report".to_string() } else { slug };

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_skill_gap{}.txt", slug, timestamp_suffix),
        OutputFormat::Json => format!("{}_skill_gap{}.json", slug, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_skill_gap{}.md", slug, timestamp_suffix),
    }
}
