mod benchmark;
mod catalog;
mod cli;
mod config;
mod engine;
mod error;
mod input;
mod proposal;
mod report;
mod telemetry;
mod types;

use crate::catalog::catalog;
use crate::engine::Engine;
use crate::error::ScoreError;
use crate::input::AnswerFile;
use crate::types::category::Category;
use crate::types::config::{ReportFormatSetting, ScoreConfig};
use crate::types::criterion::{InputKind, Unit};
use crate::types::report::ScoreReport;
use chrono::Utc;
use clap::Parser;
use tracing::{info, warn};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const BELOW_THRESHOLD: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32, ScoreError> {
    let cli = cli::Cli::parse();
    if !cli.root.exists() {
        return Err(ScoreError::PathNotFound(cli.root.display().to_string()));
    }
    let loaded = config::load_config(&cli.root)?;
    telemetry::init(cli.verbose, cli.quiet, loaded.log_level())?;
    loaded.validate(catalog())?;
    let tables = loaded.weight_tables(catalog())?;
    let engine = Engine::new(catalog(), &tables);

    match cli.command {
        cli::Commands::Score(cmd) => {
            let file = AnswerFile::load(&cmd.answers)?;
            let category = file.resolve_category(cmd.category.as_deref())?;
            let mut answers = file.prepared_answers(category);
            for id in &cmd.exclude {
                catalog().require(id)?;
                answers.exclude(id);
            }
            if answers.is_empty() {
                warn!("answer file has no answers; every criterion scores N/A");
            }
            let fallback_id = cmd
                .answers
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "proposal".to_string());

            let mut store = match &cmd.save {
                Some(path) if path.exists() => proposal::load_store(path)?,
                _ => Vec::new(),
            };
            let incoming = file.to_proposal(&fallback_id);
            let existing = store.iter().position(|stored| stored.id == incoming.id);
            let index = match existing {
                Some(index) => {
                    file.apply_metadata(&mut store[index]);
                    index
                }
                None => {
                    store.push(incoming);
                    store.len() - 1
                }
            };
            let target = &mut store[index];
            target.assign_category(category)?;
            let version = target.submit(&engine, &answers, Utc::now())?.clone();
            let score_report = ScoreReport::from_version(target, &version, catalog());

            if let Some(path) = &cmd.save {
                proposal::save_store(path, &store)?;
                info!(store = %path.display(), version = version.version_number, "saved proposal");
            }

            let format = output_format(cmd.format, &loaded);
            let rendered = report::render(&score_report, format, loaded.decimals())?;
            println!("{}", rendered.trim_end());

            match cmd.min_score {
                Some(threshold) if version.total_score < threshold => {
                    eprintln!(
                        "warning: total score {:.*} is below the minimum {threshold}",
                        loaded.decimals(),
                        version.total_score
                    );
                    Ok(exit_code::BELOW_THRESHOLD)
                }
                _ => Ok(exit_code::SUCCESS),
            }
        }
        cli::Commands::Show(cmd) => {
            let mut store = proposal::load_store(&cmd.store)?;
            let stored = proposal::find_mut(&mut store, &cmd.id)?;

            if cmd.history {
                let active = stored.current_version_number();
                for version in stored.versions() {
                    let marker = if version.version_number == active { '*' } else { ' ' };
                    println!(
                        "{marker} v{}\t{}\t{:.*}\t{}",
                        version.version_number,
                        version.created_at.to_rfc3339(),
                        loaded.decimals(),
                        version.total_score,
                        version.category
                    );
                }
                return Ok(exit_code::SUCCESS);
            }

            if let Some(version_number) = cmd.select {
                stored.select_version(version_number)?;
            }
            let score_report = ScoreReport::from_active_version(stored, catalog())
                .ok_or_else(|| ScoreError::VersionOutOfRange {
                    requested: stored.current_version_number(),
                    available: stored.versions().len(),
                })?;
            if let Some(version) = stored.active_version() {
                let current = engine.recompute(version)?;
                if (current.total_score - version.total_score).abs() > 1e-9 {
                    eprintln!(
                        "warning: version {} would score {:.*} under the current weights (stored {:.*})",
                        version.version_number,
                        loaded.decimals(),
                        current.total_score,
                        loaded.decimals(),
                        version.total_score
                    );
                    for line in current
                        .lines
                        .iter()
                        .filter(|line| current.active.contains(&line.id))
                    {
                        let stored = version.weights.get(&line.id).copied().unwrap_or(0.0);
                        if (stored - line.weight).abs() > 1e-9 {
                            eprintln!("  {}: weight {stored:.4} -> {:.4}", line.id, line.weight);
                        }
                    }
                }
            }

            if cmd.activate {
                proposal::save_store(&cmd.store, &store)?;
                info!(store = %cmd.store.display(), "updated active version");
            }

            let rendered = report::render(
                &score_report,
                output_format(cmd.format, &loaded),
                loaded.decimals(),
            )?;
            println!("{}", rendered.trim_end());
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Weights(cmd) => {
            let category = cmd.category.parse::<Category>()?;
            let weights = engine.weights_for(category, &cmd.exclude)?;
            if weights.is_empty() {
                println!("weights: no active criteria for {category}");
                return Ok(exit_code::SUCCESS);
            }
            println!("weights for {category}:");
            for (id, weight) in &weights {
                println!("- {id}: {weight:.4}");
            }
            println!("total: {:.4}", weights.values().sum::<f64>());
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Criteria(cmd) => {
            let criteria = match cmd.category.as_deref() {
                Some(key) => catalog().applicable_criteria(key.parse::<Category>()?),
                None => catalog().all_criteria().iter().collect(),
            };
            for criterion in criteria {
                let kind = match criterion.input_kind {
                    InputKind::Select => "select",
                    InputKind::Numeric => "numeric",
                };
                let unit = match criterion.unit {
                    Some(Unit::Currency) => "currency",
                    Some(Unit::Percentage) => "percentage",
                    Some(Unit::Count) => "count",
                    None => "-",
                };
                println!(
                    "{}\t{kind}\t{unit}\t{}: {}",
                    criterion.id, criterion.label, criterion.indicator
                );
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Benchmark(cmd) => {
            let proposals = proposal::load_store(&cmd.proposals)?;
            info!(count = proposals.len(), "loaded proposals");
            let benchmarks = benchmark::calculate_benchmarks(&proposals);
            println!("{}", serde_json::to_string_pretty(&benchmarks)?);
            Ok(exit_code::SUCCESS)
        }
    }
}

fn output_format(choice: Option<cli::ReportFormat>, loaded: &ScoreConfig) -> report::OutputFormat {
    match choice {
        Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
        Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
        Some(cli::ReportFormat::Csv) => report::OutputFormat::Csv,
        Some(cli::ReportFormat::Brief) => report::OutputFormat::Brief,
        None => match loaded.report_format() {
            ReportFormatSetting::Json => report::OutputFormat::Json,
            ReportFormatSetting::Md => report::OutputFormat::Md,
            ReportFormatSetting::Csv => report::OutputFormat::Csv,
        },
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            if e.is_configuration() {
                eprintln!("hint: `mediascore criteria` lists the known categories and criteria");
            }
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
