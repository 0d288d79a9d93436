use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};
use uuid::Uuid;

use crate::decisions::{DecisionRecord, LogSummary};
use crate::registry::Client;
use crate::scoring::{Decision, LoanTerms, RiskAssessment};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a PD as a percentage with one decimal ("33.3%")
pub fn format_pd(pd: f64) -> String {
    format!("{:.1}%", pd * 100.0)
}

/// Format an amount, with the configured currency label when there is one
pub fn format_amount(amount: f64, currency: Option<&str>) -> String {
    match currency {
        Some(c) => format!("{:.0} {}", amount, c),
        None => format!("{:.0}", amount),
    }
}

/// First block of a UUID, enough to address records from the CLI
pub fn short_id(id: &Uuid) -> String {
    id.to_string().chars().take(8).collect()
}

/// Decision label, colored by outcome when colors are on
fn format_decision(decision: Decision, use_colors: bool) -> String {
    let label = decision.to_string();
    if !use_colors {
        return label;
    }
    match decision {
        Decision::Accept => label.green().to_string(),
        Decision::Refer => label.yellow().to_string(),
        Decision::Reject => label.red().to_string(),
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate_text(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format the client registry as one line per client
/// Format: "{n}. {short-id}  {name}  {income}/mo  {status}  {tenure}y  age {age}"
pub fn format_client_table(clients: &[Client], currency: Option<&str>, use_colors: bool) -> String {
    if clients.is_empty() {
        return "No clients registered.".to_string();
    }

    clients
        .iter()
        .enumerate()
        .map(|(idx, client)| {
            let index_str = format!("{:>2}.", idx + 1);
            let id = short_id(&client.id);
            let income = format_amount(client.monthly_income, currency);
            if use_colors {
                format!(
                    "{} {}  {}  {}/mo  {}  {}y  age {}",
                    index_str.dimmed(),
                    id.cyan(),
                    client.full_name().bold(),
                    income,
                    client.employment.label(),
                    client.tenure_years,
                    client.age
                )
            } else {
                format!(
                    "{} {}  {}  {}/mo  {}  {}y  age {}",
                    index_str,
                    id,
                    client.full_name(),
                    income,
                    client.employment.label(),
                    client.tenure_years,
                    client.age
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format decision records as one line per record, purpose truncated to the
/// terminal width
pub fn format_decision_table(
    records: &[&DecisionRecord],
    currency: Option<&str>,
    use_colors: bool,
) -> String {
    if records.is_empty() {
        return "No decisions recorded.".to_string();
    }

    let term_width = get_terminal_width();

    records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let index_str = format!("{:>2}.", idx + 1);
            let date = record.requested_at.format("%Y-%m-%d").to_string();
            let amount = format_amount(record.amount, currency);
            let pd = format_pd(record.pd);
            let decision = format_decision(record.decision, use_colors);

            let fixed = format!(
                "{} {}  {}  {} over {}mo  PD {}  ",
                index_str, date, record.client_name, amount, record.term_months, pd
            );
            let purpose = match term_width {
                Some(width) if width > fixed.len() + 24 => {
                    truncate_text(&record.purpose, width - fixed.len() - 22)
                }
                Some(_) => truncate_text(&record.purpose, 20),
                None => record.purpose.clone(),
            };

            let line = if use_colors {
                format!(
                    "{} {}  {}  {} over {}mo  PD {}  {}",
                    index_str.dimmed(),
                    date,
                    record.client_name.bold(),
                    amount,
                    record.term_months,
                    pd,
                    decision
                )
            } else {
                format!("{}{}", fixed, decision)
            };

            if purpose.is_empty() {
                line
            } else {
                format!("{}  ({})", line, purpose)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Multi-line view of one scored application, with the factor breakdown
pub fn format_assessment_detail(
    client: &Client,
    loan: &LoanTerms,
    monthly_payment: f64,
    assessment: &RiskAssessment,
    currency: Option<&str>,
    use_colors: bool,
) -> String {
    let mut lines = Vec::new();

    let header = format!(
        "{}: {} over {} months",
        client.full_name(),
        format_amount(loan.principal, currency),
        loan.term_months
    );
    lines.push(if use_colors {
        header.bold().to_string()
    } else {
        header
    });

    lines.push(format!(
        "  Monthly payment: {}",
        format_amount(monthly_payment, currency)
    ));

    for factor in assessment.breakdown() {
        lines.push(format!(
            "  {:<18} {:>5.3} x {:.2} = {:.3}",
            factor.label, factor.score, factor.weight, factor.weighted
        ));
    }

    lines.push(format!("  PD: {}", format_pd(assessment.pd)));
    lines.push(format!(
        "  Decision: {}",
        format_decision(assessment.decision, use_colors)
    ));

    lines.join("\n")
}

/// One-block summary of the decision log
pub fn format_summary(
    summary: &LogSummary,
    client_count: usize,
    currency: Option<&str>,
) -> String {
    format!(
        "Clients: {}\nApplications: {}\n  Accepted: {}\n  Referred: {}\n  Rejected: {}\nAccepted amount: {}\nMean PD: {}",
        client_count,
        summary.total,
        summary.accepted,
        summary.referred,
        summary.rejected,
        format_amount(summary.accepted_amount, currency),
        format_pd(summary.mean_pd)
    )
}
