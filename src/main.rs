//! Skill-gap advisor: compare skills against reference professionals and recommend courses

use clap::Parser;
use log::{error, info};
use skill_gap_advisor::cli::{self, Cli, Commands, ConfigAction};
use skill_gap_advisor::config::{Config, OutputFormat};
use skill_gap_advisor::error::{AdvisorError, Result};
use skill_gap_advisor::input::{CatalogLoader, CourseRepository, InMemoryCatalog, ProfileRepository};
use skill_gap_advisor::output::{save_report_to_file, suggest_filename, AdvisorReport, ReportGenerator};
use skill_gap_advisor::processing::learning_path::SkillGuide;
use skill_gap_advisor::processing::{RecommendationEngine, SkillSet, UserQuery};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli, config).await {
        error!("Command failed: {}", e);
        if let Some(suggestion) = e.suggestion() {
            eprintln!("Did you mean: {}?", suggestion);
        }
        process::exit(1);
    }
}

async fn run_command(args: Cli, mut config: Config) -> Result<()> {
    if let Some(path) = args.profiles {
        config.data.profiles_path = Some(path);
    }
    if let Some(path) = args.courses {
        config.data.courses_path = Some(path);
    }

    match args.command {
        Commands::Recommend {
            skills,
            specialization,
            strategy,
            top,
            output,
            save,
            detailed,
        } => {
            if let Some(strategy) = strategy {
                config.ranking.strategy = cli::parse_strategy(&strategy).map_err(AdvisorError::InvalidInput)?;
            }
            if let Some(top) = top {
                config.ranking.top_n = top;
            }
            let format = resolve_format(output.as_deref(), &config)?;

            let catalog = load_catalog(&config).await?;
            let corpus_size = catalog.courses().len();
            let engine = build_engine(catalog, &config)?;

            info!("Recommending courses for '{}'", specialization);
            let started = Instant::now();
            let result = engine.recommend_for(&UserQuery::new(&skills, &specialization))?;
            let elapsed = started.elapsed().as_millis() as u64;

            let report = AdvisorReport::recommendation(result, elapsed, corpus_size);
            emit(&report, &format, config.output.detailed || detailed, &config, save)?;
        }

        Commands::Similar { course, top, output, save } => {
            let format = resolve_format(output.as_deref(), &config)?;

            let catalog = load_catalog(&config).await?;
            let corpus_size = catalog.courses().len();
            let engine = build_engine(catalog, &config)?;

            let started = Instant::now();
            let similar = engine.similar_courses(&course, top)?;
            let elapsed = started.elapsed().as_millis() as u64;

            let report = AdvisorReport::similar(similar, elapsed, corpus_size);
            emit(&report, &format, config.output.detailed, &config, save)?;
        }

        Commands::Specializations => {
            let catalog = load_catalog(&config).await?;
            for specialization in catalog.specializations() {
                let count = catalog.profiles_for(&specialization).len();
                println!("{} ({} profiles)", specialization, count);
            }
        }

        Commands::Courses { specialization, skill } => {
            let catalog = load_catalog(&config).await?;
            let skills: SkillSet = skill.iter().collect();
            let courses = match &specialization {
                Some(spec) => catalog.courses_matching(spec, &skills),
                None if !skills.is_empty() => catalog.courses_matching("", &skills),
                None => catalog.all_courses(),
            };

            if courses.is_empty() {
                println!("No matching courses.");
            }
            for course in courses {
                println!(
                    "{} | {} | {} | {} | {:.1}",
                    course.name, course.skill, course.specialization, course.platform, course.rating
                );
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Current Configuration\n");
                println!("Profiles: {}", describe_path(&config.data.profiles_path));
                println!("Courses: {}", describe_path(&config.data.courses_path));
                println!("Skill guide: {}", describe_path(&config.data.skill_guide_path));
                println!("\nRanking:");
                println!("  Strategy: {}", config.ranking.strategy);
                println!("  Top N: {}", config.ranking.top_n);
                println!("  Cache capacity: {}", config.ranking.cache_capacity);
                println!("\nOutput:");
                println!("  Format: {:?}", config.output.format);
                println!("  Detailed: {}", config.output.detailed);
                println!("  Colors: {}", config.output.color_output);
            }

            Some(ConfigAction::Reset) => {
                let path = args.config.unwrap_or_else(Config::config_path);
                Config::default().save_to(&path)?;
                println!("Configuration reset: {}", path.display());
            }

            Some(ConfigAction::Path) => {
                let path = args.config.unwrap_or_else(Config::config_path);
                println!("{}", path.display());
            }
        },
    }

    Ok(())
}

async fn load_catalog(config: &Config) -> Result<InMemoryCatalog> {
    CatalogLoader::load(
        config.data.profiles_path.as_deref(),
        config.data.courses_path.as_deref(),
    )
    .await
}

fn build_engine(catalog: InMemoryCatalog, config: &Config) -> Result<RecommendationEngine> {
    let engine = RecommendationEngine::new(
        Box::new(catalog.clone()),
        Box::new(catalog),
        config.ranking.clone(),
    )?;

    match &config.data.skill_guide_path {
        Some(path) => Ok(engine.with_skill_guide(SkillGuide::load(path)?)),
        None => Ok(engine),
    }
}

fn resolve_format(flag: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match flag {
        Some(format) => cli::parse_output_format(format).map_err(AdvisorError::InvalidInput),
        None => Ok(config.output.format),
    }
}

fn emit(
    report: &AdvisorReport,
    format: &OutputFormat,
    detailed: bool,
    config: &Config,
    save: Option<PathBuf>,
) -> Result<()> {
    let use_colors = config.output.color_output && save.is_none();
    let generator = ReportGenerator::with_options(use_colors, detailed, true, true);
    let rendered = generator.generate_report(report, format)?;

    match save {
        Some(path) => {
            // A directory target gets a generated file name.
            let path = if path.is_dir() {
                path.join(suggest_filename(format, report.subject(), true))
            } else {
                path
            };
            save_report_to_file(&rendered, &path)?;
            println!("Report saved to {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

fn describe_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in".to_string())
}
