//! Output formatting module

use matreg_app::app::RegistrationOutcome;
use matreg_app::form::SubmissionReport;
use matreg_app::notification::{Notification, NotificationKind, Notifier};
use matreg_domain::{FieldErrors, MaterialRecord};
use matreg_types::{format_brl, OutputFormat, Result};

/// Shows notifications on stderr, one line each
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: &Notification) {
        eprintln!("{}", render_notification(notification));
    }
}

fn render_notification(notification: &Notification) -> String {
    let mark = match notification.kind {
        NotificationKind::Success => "✔",
        NotificationKind::Failure => "✘",
    };
    match &notification.description {
        Some(description) => format!("{} {} {}", mark, notification.title, description),
        None => format!("{} {}", mark, notification.title),
    }
}

pub fn print_record(output_format: OutputFormat, record: &MaterialRecord) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(record)?);
    } else {
        print!("{}", render_record_table(record));
    }
    Ok(())
}

fn render_record_table(record: &MaterialRecord) -> String {
    let m = &record.material;
    let mut out = String::new();
    out.push_str("\nMaterial\n");
    out.push_str("========\n");
    out.push_str(&format!("Code:            {}\n", m.code));
    out.push_str(&format!("Description:     {}\n", m.description));
    out.push_str(&format!("Supplier:        {}\n", m.supplier));
    out.push_str(&format!(
        "Acquired:        {}\n",
        m.acquisition_date.format("%d/%m/%Y")
    ));
    out.push_str(&format!("Unit cost:       {}\n", format_brl(m.unit_cost)));
    out.push_str(&format!("Quantity:        {}\n", m.quantity));
    for (i, cost) in m.additional_cost.iter().enumerate() {
        out.push_str(&format!("Extra cost #{:<3} {}\n", i + 1, format_brl(*cost)));
    }
    out.push_str("------------------------\n");
    out.push_str(&format!("Total:           {}\n", format_brl(record.total_cost)));
    out
}

/// Field errors keyed by path, for `--format json` consumers
pub fn print_field_errors_json(errors: &FieldErrors) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(errors)?);
    Ok(())
}

pub fn print_outcome(output_format: OutputFormat, outcome: &RegistrationOutcome) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
        return Ok(());
    }

    println!("Total:           {}", format_brl(outcome.displayed_total));
    match &outcome.report {
        SubmissionReport::Created { code, total_cost } => {
            println!("Registered:      {} ({})", code, format_brl(*total_cost));
        }
        SubmissionReport::Rejected { code, status } => {
            println!("Rejected:        {} (HTTP {})", code, status);
        }
        SubmissionReport::TransportFailed { reason } => {
            println!("Not sent:        {}", reason);
        }
    }
    Ok(())
}
