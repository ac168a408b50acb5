//! Placement prep: job description analysis and interview preparation planner

use chrono::Utc;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info};
use placement_prep::cli::{self, Cli, Commands, ConfigAction, HistoryAction};
use placement_prep::config::{Config, OutputFormat};
use placement_prep::error::{PrepError, Result};
use placement_prep::input::sample::sample_request;
use placement_prep::input::InputManager;
use placement_prep::output::formatter::{save_report_to_file, suggest_filename};
use placement_prep::output::{PrepReport, ReportGenerator};
use placement_prep::processing::taxonomy::TAXONOMY;
use placement_prep::processing::{AnalysisRequest, PrepAnalyzer};
use placement_prep::storage::{HistoryEntry, HistoryStore};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if !config.output.color_output {
        colored::control::set_override(false);
    }

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

/// Flags shared by `analyze` and `sample`
struct RenderOptions {
    output: Option<String>,
    save: Option<PathBuf>,
    no_history: bool,
    seed: Option<u64>,
}

async fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> Result<()> {
    let store = HistoryStore::new(config.history_path()).with_max_entries(config.storage.max_entries);

    match command {
        Commands::Analyze {
            job,
            text,
            request,
            company,
            role,
            output,
            save,
            no_history,
            seed,
        } => {
            let mut input_manager = InputManager::new();

            let mut analysis_request = if let Some(request_path) = request {
                input_manager.load_request(&request_path).await?
            } else {
                let jd_text = match (job, text) {
                    (Some(job), _) => {
                        cli::validate_file_extension(&job, &["txt", "md", "markdown", "pdf"])
                            .map_err(|e| PrepError::InvalidInput(format!("Job description file: {}", e)))?;
                        input_manager.extract_text(&job).await?
                    }
                    (None, Some(text)) => text,
                    (None, None) => {
                        if std::io::stdin().is_terminal() {
                            return Err(PrepError::InvalidInput(
                                "Please provide a job description with --job, --text, --request or stdin".to_string(),
                            ));
                        }
                        input_manager.read_stdin().await?
                    }
                };
                AnalysisRequest::new(jd_text, String::new(), String::new())
            };

            if let Some(company) = company {
                analysis_request.company = company;
            }
            if let Some(role) = role {
                analysis_request.role = role;
            }

            if analysis_request.jd_text.trim().is_empty() {
                return Err(PrepError::InvalidInput("Please paste a job description".to_string()));
            }

            let options = RenderOptions {
                output,
                save,
                no_history,
                seed,
            };
            analyze_and_render(&analysis_request, &options, &config, &store)?;
        }

        Commands::Sample { output, no_history } => {
            info!("Analyzing bundled sample job description");
            let options = RenderOptions {
                output,
                save: None,
                no_history,
                seed: None,
            };
            analyze_and_render(&sample_request(), &options, &config, &store)?;
        }

        Commands::History { action } => {
            let generator = ReportGenerator::from_config(&config.output);

            match action {
                Some(HistoryAction::List) | None => {
                    let entries = store.list();
                    print!("{}", generator.console().format_history(&entries, &config.scoring));
                }

                Some(HistoryAction::Show { id, output, save }) => {
                    let entry = store.require(&id)?;
                    let report = PrepReport::new(entry, &config.scoring, true);
                    let format = resolve_format(output.as_deref(), &config)?;
                    let content = generator.generate_report(&report, &format)?;
                    emit(&content, save.as_deref())?;
                }

                Some(HistoryAction::Delete { id }) => {
                    if store.delete(&id)? {
                        println!("🗑️  Deleted analysis {}", id);
                    } else {
                        return Err(PrepError::NotFound(id));
                    }
                }

                Some(HistoryAction::Clear) => {
                    store.clear()?;
                    println!("✅ History cleared");
                }
            }
        }

        Commands::Confidence { id, skill, level } => {
            let entry = store.set_confidence(&id, &skill, level.to_confidence())?;
            let displayed = entry.displayed_score(&config.scoring);
            println!(
                "✅ Updated {} on analysis {}: readiness {} (base {})",
                skill, id, displayed, entry.readiness_score
            );
        }

        Commands::Skills => {
            let generator = ReportGenerator::from_config(&config.output);
            print!("{}", generator.console().format_taxonomy(TAXONOMY));
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("History file: {}", config.history_path().display());
                match config.storage.max_entries {
                    Some(max) => println!("Max history entries: {}", max),
                    None => println!("Max history entries: unlimited"),
                }
                println!("Default output: {:?}", config.output.format);
                println!("\nScoring:");
                println!("  Base score: {}", config.scoring.base_score);
                println!(
                    "  Per category: +{} (max {})",
                    config.scoring.category_bonus, config.scoring.max_category_bonus
                );
                println!("  Company given: +{}", config.scoring.company_bonus);
                println!("  Role given: +{}", config.scoring.role_bonus);
                println!(
                    "  Job description over {} chars: +{}",
                    config.scoring.detailed_jd_chars, config.scoring.detail_bonus
                );
                println!("  Confidence step: ±{}", config.scoring.confidence_step);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                let default_config = Config::default();
                match config_path {
                    Some(path) => default_config.save_to(&path)?,
                    None => default_config.save()?,
                }
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}

fn analyze_and_render(
    request: &AnalysisRequest,
    options: &RenderOptions,
    config: &Config,
    store: &HistoryStore,
) -> Result<()> {
    let format = resolve_format(options.output.as_deref(), config)?;
    let analyzer = PrepAnalyzer::new(config.scoring.clone())?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .map_err(|e| PrepError::OutputFormatting(e.to_string()))?,
    );
    spinner.set_message("Analyzing job description...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let analysis = match options.seed {
        Some(seed) => {
            debug!("Using question seed {}", seed);
            analyzer.analyze_with_rng(request, &mut StdRng::seed_from_u64(seed))
        }
        None => analyzer.analyze(request),
    };

    let entry = if options.no_history {
        HistoryEntry::from_analysis("unsaved".to_string(), Utc::now(), &analysis, request)
    } else {
        store.save(&analysis, request)?
    };
    spinner.finish_and_clear();

    let report = PrepReport::new(entry, &config.scoring, !options.no_history);
    let generator = ReportGenerator::from_config(&config.output);
    let content = generator.generate_report(&report, &format)?;
    emit(&content, options.save.as_deref())?;

    if format == OutputFormat::Console && options.save.is_none() && !options.no_history {
        println!(
            "\n💡 Saved as {}. Export with: placement-prep history show {} --output markdown --save {}",
            report.entry.id,
            report.entry.id,
            suggest_filename(&OutputFormat::Markdown, &report.entry.company, false)
        );
    }

    Ok(())
}

fn resolve_format(output: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match output {
        Some(format) => cli::parse_output_format(format).map_err(PrepError::InvalidInput),
        None => Ok(config.output.format),
    }
}

fn emit(content: &str, save: Option<&Path>) -> Result<()> {
    match save {
        Some(path) => {
            save_report_to_file(content, path)?;
            println!("📁 Report saved to {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}
