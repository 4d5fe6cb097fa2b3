//! Command handlers

use crate::cli::{Cli, Commands, MaterialArgs};
use crate::output::{print_field_errors_json, print_outcome, print_record, ConsoleNotifier};
use chrono::{Local, NaiveDate};
use matreg_app::app::{self, RegistrationServiceError};
use matreg_app::config::Config;
use matreg_app::form::SubmissionReport;
use matreg_domain::service::compute_running_total;
use matreg_domain::{FieldErrors, MaterialCandidate, NumericInput};
use matreg_types::{format_brl, Error, OutputFormat, Result, TransportError};
use std::path::Path;
use tracing::{debug, info};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(ref endpoint) = cli.endpoint {
        config.endpoint = endpoint.clone();
    }
    if let Some(format) = cli.format {
        config.output_format = format;
    }

    let today = Local::now().date_naive();

    match &cli.command {
        Commands::Register(args) => cmd_register(&config, args, today),
        Commands::Validate(args) => cmd_validate(&config, args, today),
        Commands::Config {
            show,
            set_endpoint,
            set_timeout,
            set_output,
            reset,
        } => cmd_config(
            *show,
            set_endpoint.clone(),
            *set_timeout,
            *set_output,
            *reset,
        ),
    }
}

/// Start from the input file (or a blank form) and overlay the flags
fn build_candidate(args: &MaterialArgs, today: NaiveDate) -> Result<MaterialCandidate> {
    let mut candidate = match &args.input {
        Some(path) => load_candidate(path)?,
        None => MaterialCandidate::blank(today),
    };

    if let Some(ref code) = args.code {
        candidate.code = code.clone();
    }
    if let Some(ref description) = args.description {
        candidate.description = description.clone();
    }
    if let Some(ref unit_cost) = args.unit_cost {
        candidate.unit_cost = NumericInput::from(unit_cost.as_str());
    }
    if let Some(ref quantity) = args.quantity {
        candidate.quantity = NumericInput::from(quantity.as_str());
    }
    if let Some(date) = args.date {
        candidate.acquisition_date = Some(date);
    }
    if let Some(ref supplier) = args.supplier {
        candidate.supplier = supplier.clone();
    }
    if !args.costs.is_empty() {
        candidate.additional_cost = args
            .costs
            .iter()
            .map(|cost| NumericInput::from(cost.as_str()))
            .collect();
    }
    if candidate.acquisition_date.is_none() {
        candidate.acquisition_date = Some(today);
    }

    debug!(code = %candidate.code, costs = candidate.additional_cost.len(), "Built candidate");
    Ok(candidate)
}

fn load_candidate(path: &Path) -> Result<MaterialCandidate> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| Error::InvalidInput(format!("{}: {}", path.display(), e)))?;
    let candidate = serde_json::from_str(&raw)?;
    Ok(candidate)
}

fn validation_failed(output_format: OutputFormat, errors: &FieldErrors) -> Result<()> {
    if output_format == OutputFormat::Json {
        print_field_errors_json(errors)?;
    }
    Err(Error::Validation(errors.to_string()))
}

fn cmd_validate(config: &Config, args: &MaterialArgs, today: NaiveDate) -> Result<()> {
    let candidate = build_candidate(args, today)?;

    match app::check_material(candidate, today) {
        Ok(record) => print_record(config.output_format, &record),
        Err(errors) => validation_failed(config.output_format, &errors),
    }
}

fn cmd_register(config: &Config, args: &MaterialArgs, today: NaiveDate) -> Result<()> {
    let candidate = build_candidate(args, today)?;

    if config.output_format == OutputFormat::Table {
        let running = compute_running_total(
            &candidate.unit_cost,
            &candidate.quantity,
            &candidate.additional_cost,
        );
        println!("Running total:   {}", format_brl(running));
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    info!(endpoint = %config.endpoint, "Submitting material");
    let result = runtime.block_on(app::register_material(
        candidate,
        config,
        &ConsoleNotifier,
        today,
    ));

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(RegistrationServiceError::Validation(errors)) => {
            return validation_failed(config.output_format, &errors);
        }
        Err(e) => return Err(Error::RegistrationFailed(e.to_string())),
    };

    print_outcome(config.output_format, &outcome)?;

    match outcome.report {
        SubmissionReport::Created { .. } => Ok(()),
        SubmissionReport::Rejected { status, .. } => {
            Err(Error::Transport(TransportError::Rejected(status)))
        }
        SubmissionReport::TransportFailed { reason } => Err(Error::RegistrationFailed(reason)),
    }
}

fn cmd_config(
    show: bool,
    set_endpoint: Option<String>,
    set_timeout: Option<u64>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(endpoint) = set_endpoint {
        config.endpoint = endpoint;
        modified = true;
    }
    if let Some(timeout) = set_timeout {
        config.timeout_secs = timeout;
        modified = true;
    }
    if let Some(format) = set_output {
        config.output_format = format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
