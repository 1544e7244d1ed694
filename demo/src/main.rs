//! ClinIQ symptom-check demo CLI
//!
//! Runs the reference pipeline (mock classifier, table resolver, mock doctor
//! roster) and exposes the resolver and ingest boundary on their own.
//!
//! Usage:
//!   cargo run -p demo -- check "headache and fever"
//!   cargo run -p demo -- check --report "cough with fever"
//!   cargo run -p demo -- resolve --explain "Chest Pain" "Migraine"
//!   cargo run -p demo -- doctors Neurology "Internal Medicine"
//!   cargo run -p demo -- ingest classifier-output.json
//!   cargo run -p demo -- --mapping custom.toml table

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cliniq_contracts::{
    condition::Condition,
    error::{CliniqError, CliniqResult},
    specialization::{Specialization, SpecializationSet},
};
use cliniq_core::traits::{DoctorDirectory, SpecializationResolver};
use cliniq_ingest::ResultIngestor;
use cliniq_mapping::{ConditionMatch, SpecializationTable, TableResolver};
use cliniq_ref::{directory::InMemoryDoctorDirectory, reference_pipeline, report::render_report};

// ── CLI definition ────────────────────────────────────────────────────────────

/// ClinIQ — symptom checker and specialist finder demo.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "ClinIQ symptom-check demo",
    long_about = "Classifies symptom descriptions with the mock classifier, resolves the\n\
                  specializations worth booking, and matches doctors from the mock roster."
)]
struct Cli {
    /// Load the specialization table from this TOML file instead of the built-in one.
    #[arg(long, global = true, value_name = "FILE")]
    mapping: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a full symptom check on a free-text description.
    Check {
        /// The symptoms, e.g. "headache and fever".
        #[arg(required = true)]
        symptoms: Vec<String>,
        /// Print the check as JSON.
        #[arg(long, conflicts_with = "report")]
        json: bool,
        /// Print the full text report.
        #[arg(long)]
        report: bool,
    },
    /// Resolve condition names to specializations.
    Resolve {
        /// Condition names, e.g. "Migraine" "Kidney Stone".
        conditions: Vec<String>,
        /// Show which table keywords each condition matched.
        #[arg(long)]
        explain: bool,
    },
    /// List doctors practicing any of the given specializations.
    Doctors {
        #[arg(required = true)]
        specializations: Vec<String>,
    },
    /// Validate a classifier output JSON file and resolve its conditions.
    Ingest { file: PathBuf },
    /// Print the active specialization table as TOML.
    Table,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = load_table(cli.mapping.as_deref()).and_then(|table| match cli.command {
        Command::Check { symptoms, json, report } => {
            run_check(table, &symptoms.join(" "), json, report)
        }
        Command::Resolve { conditions, explain } => run_resolve(table, &conditions, explain),
        Command::Doctors { specializations } => run_doctors(&specializations),
        Command::Ingest { file } => run_ingest(table, &file),
        Command::Table => run_table(&table),
    });

    if let Err(e) = result {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

fn load_table(path: Option<&Path>) -> CliniqResult<Arc<SpecializationTable>> {
    match path {
        Some(path) => {
            let table = SpecializationTable::from_file(path)?;
            info!(path = %path.display(), entries = table.len(), "loaded specialization table");
            Ok(Arc::new(table))
        }
        None => Ok(SpecializationTable::builtin()),
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

fn run_check(
    table: Arc<SpecializationTable>,
    symptoms: &str,
    json: bool,
    report: bool,
) -> CliniqResult<()> {
    let pipeline = reference_pipeline(table)?;
    let check = pipeline.run(symptoms)?;

    if json {
        let encoded = serde_json::to_string_pretty(&check).map_err(|e| CliniqError::Encoding {
            reason: format!("failed to encode symptom check: {e}"),
        })?;
        println!("{encoded}");
        return Ok(());
    }

    if report {
        print!("{}", render_report(&check));
        return Ok(());
    }

    println!("Urgency:          {}", check.urgency);
    println!("Conditions:");
    for condition in &check.result.possible_conditions {
        println!("  - {} ({}% match)", condition.name, condition.display_percent());
    }
    println!("Specializations:  {}", check.specializations.names().join(", "));
    if check.result.requires_attention {
        println!("Consultation:     recommended");
        print_doctors(&check.doctors);
    } else {
        println!("Consultation:     not necessary at this time");
    }
    Ok(())
}

fn run_resolve(
    table: Arc<SpecializationTable>,
    names: &[String],
    explain: bool,
) -> CliniqResult<()> {
    let resolver = TableResolver::new(table);

    if explain {
        for name in names {
            match resolver.match_condition(name) {
                ConditionMatch::Exact(keyword) => println!("{name}: exact match on '{keyword}'"),
                ConditionMatch::Keywords(keywords) => {
                    println!("{name}: keyword match on '{}'", keywords.join("', '"))
                }
                ConditionMatch::Unmatched => println!("{name}: no match"),
            }
        }
    }

    let conditions: Vec<Condition> = names.iter().map(|n| Condition::named(n.as_str())).collect();
    let resolved = resolver.resolve(&conditions);
    println!("{}", resolved.names().join(", "));
    Ok(())
}

fn run_doctors(names: &[String]) -> CliniqResult<()> {
    let wanted: SpecializationSet = names.iter().map(|n| Specialization::new(n.as_str())).collect();
    let doctors = InMemoryDoctorDirectory::with_mock_roster().find_by_specializations(&wanted);
    print_doctors(&doctors);
    Ok(())
}

fn run_ingest(table: Arc<SpecializationTable>, file: &Path) -> CliniqResult<()> {
    let body = std::fs::read_to_string(file).map_err(|e| CliniqError::InvalidInput {
        reason: format!("failed to read classifier output '{}': {}", file.display(), e),
    })?;

    let result = ResultIngestor::new()?.ingest_str(&body)?;
    let resolved = TableResolver::new(table).resolve(&result.possible_conditions);

    println!("Classifier output: VALID");
    println!("Conditions:        {}", result.possible_conditions.len());
    println!("Urgency:           {}", result.urgency());
    println!("Specializations:   {}", resolved.names().join(", "));
    Ok(())
}

fn run_table(table: &SpecializationTable) -> CliniqResult<()> {
    print!("{}", table.to_toml_string()?);
    Ok(())
}

fn print_doctors(doctors: &[cliniq_contracts::doctor::Doctor]) {
    if doctors.is_empty() {
        println!("No matching doctors found.");
        return;
    }
    println!("Doctors:");
    for doctor in doctors {
        println!(
            "  {:<22} {:<22} {:<12} {:.1}{}",
            doctor.name,
            doctor.specialization.as_str(),
            doctor.location,
            doctor.rating,
            if doctor.is_available_today { "  available today" } else { "" }
        );
    }
}
