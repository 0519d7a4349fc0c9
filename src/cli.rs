//! CLI interface for the skill-gap advisor

use crate::config::{OutputFormat, RankingStrategy};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skill-gap-advisor")]
#[command(about = "Skill-gap analysis and course recommendations")]
#[command(long_about = "Compare your skills against professionals in a specialization, list the gaps, and rank courses to close them")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Reference profiles file (JSON or TOML), overrides the configured path
    #[arg(long, global = true)]
    pub profiles: Option<PathBuf>,

    /// Course catalog file (JSON or TOML), overrides the configured path
    #[arg(long, global = true)]
    pub courses: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare skills against a specialization and recommend courses
    Recommend {
        /// Comma-separated skills, e.g. "python, sql"
        #[arg(short, long)]
        skills: String,

        /// Target specialization, e.g. "Data Science"
        #[arg(short = 'p', long)]
        specialization: String,

        /// Ranking strategy: heuristic, content
        #[arg(long)]
        strategy: Option<String>,

        /// Number of courses to recommend
        #[arg(short, long)]
        top: Option<usize>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(long)]
        save: Option<PathBuf>,

        /// Show skill breakdowns and the learning path
        #[arg(short, long)]
        detailed: bool,
    },

    /// List courses with content most similar to a catalog course
    Similar {
        /// Exact course name
        course: String,

        /// Number of courses to list
        #[arg(short, long, default_value_t = 3)]
        top: usize,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// List the specializations that have reference profiles
    Specializations,

    /// List catalog courses
    Courses {
        /// Only courses in this specialization
        #[arg(short = 'p', long)]
        specialization: Option<String>,

        /// Only courses teaching one of these skills (repeatable)
        #[arg(short, long)]
        skill: Vec<String>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown", format)),
    }
}

/// Parse and validate ranking strategy
pub fn parse_strategy(strategy: &str) -> Result<RankingStrategy, String> {
    match strategy.to_lowercase().as_str() {
        "heuristic" | "rating" => Ok(RankingStrategy::Heuristic),
        "content" | "tfidf" => Ok(RankingStrategy::Content),
        _ => Err(format!("Invalid strategy: {}. Supported: heuristic, content", strategy)),
    }
}
