//! Doctor command implementation.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;
use tickets_lib::{JsonFileStore, Ticket};

use crate::cli::CommandContext;
use crate::error::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum CheckStatus {
    Ok,
    Warn,
    Error,
}

#[derive(Debug, Clone, Serialize)]
struct CheckResult {
    name: String,
    status: CheckStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
struct DoctorReport {
    ok: bool,
    path: String,
    checks: Vec<CheckResult>,
}

fn push_check(
    checks: &mut Vec<CheckResult>,
    name: &str,
    status: CheckStatus,
    message: Option<String>,
    details: Option<serde_json::Value>,
) {
    checks.push(CheckResult {
        name: name.to_string(),
        status,
        message,
        details,
    });
}

fn error_count(checks: &[CheckResult]) -> usize {
    checks
        .iter()
        .filter(|check| check.status == CheckStatus::Error)
        .count()
}

fn print_report(report: &DoctorReport, ctx: &CommandContext) -> Result<()> {
    if ctx.json {
        return ctx.print_json(report);
    }

    println!("tk doctor: {}", report.path);
    for check in &report.checks {
        let label = match check.status {
            CheckStatus::Ok => "OK",
            CheckStatus::Warn => "WARN",
            CheckStatus::Error => "ERROR",
        };
        if let Some(message) = &check.message {
            println!("{label} {}: {}", check.name, message);
        } else {
            println!("{label} {}", check.name);
        }
    }
    Ok(())
}

fn check_duplicate_ids(tickets: &[Ticket], checks: &mut Vec<CheckResult>) {
    let mut seen: BTreeMap<&str, usize> = BTreeMap::new();
    for ticket in tickets {
        if let Some(id) = ticket.ticket_id.as_deref() {
            *seen.entry(id).or_default() += 1;
        }
    }
    let duplicates: Vec<&str> = seen
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(id, _)| id)
        .collect();

    if duplicates.is_empty() {
        push_check(checks, "tickets.unique_ids", CheckStatus::Ok, None, None);
    } else {
        // Lookups return the first match, so later copies are unreachable
        push_check(
            checks,
            "tickets.unique_ids",
            CheckStatus::Warn,
            Some(format!("Duplicate IDs: {}", duplicates.join(", "))),
            Some(serde_json::json!({ "duplicates": duplicates })),
        );
    }
}

fn check_blank_fields(tickets: &[Ticket], checks: &mut Vec<CheckResult>) {
    let empty_ids = tickets
        .iter()
        .filter(|t| t.id().trim().is_empty())
        .count();
    if empty_ids == 0 {
        push_check(checks, "tickets.ids", CheckStatus::Ok, None, None);
    } else {
        push_check(
            checks,
            "tickets.ids",
            CheckStatus::Warn,
            Some(format!("{empty_ids} ticket(s) have an empty ID")),
            None,
        );
    }

    let blank: Vec<&str> = tickets
        .iter()
        .filter(|t| t.has_blank_description())
        .map(Ticket::id)
        .collect();
    if blank.is_empty() {
        push_check(checks, "tickets.descriptions", CheckStatus::Ok, None, None);
    } else {
        push_check(
            checks,
            "tickets.descriptions",
            CheckStatus::Warn,
            Some(format!("{} ticket(s) have a blank description", blank.len())),
            Some(serde_json::json!({ "ids": blank })),
        );
    }
}

/// Run every check against the raw file content; `None` means the file is absent.
fn collect_checks(path: &Path, content: Option<&[u8]>) -> Vec<CheckResult> {
    let mut checks = Vec::new();

    let Some(bytes) = content else {
        push_check(
            &mut checks,
            "tickets_file",
            CheckStatus::Error,
            Some(format!("{} does not exist (run `tk init`)", path.display())),
            None,
        );
        return checks;
    };
    push_check(&mut checks, "tickets_file", CheckStatus::Ok, None, None);

    let tickets = match JsonFileStore::decode(path, bytes) {
        Ok(tickets) => tickets,
        Err(e) => {
            push_check(
                &mut checks,
                "tickets_file.parse",
                CheckStatus::Error,
                Some(e.to_string()),
                None,
            );
            return checks;
        }
    };
    push_check(
        &mut checks,
        "tickets_file.parse",
        CheckStatus::Ok,
        None,
        Some(serde_json::json!({ "tickets": tickets.len() })),
    );

    check_duplicate_ids(&tickets, &mut checks);
    check_blank_fields(&tickets, &mut checks);
    checks
}

/// Execute the doctor command.
///
/// # Errors
///
/// Returns `ChecksFailed` if any check reports an error, or an I/O error if
/// the tickets file exists but cannot be read.
pub async fn execute(ctx: &CommandContext) -> Result<()> {
    let path = ctx.config.tickets_path.as_path();
    let content = match tokio::fs::read(path).await {
        Ok(bytes) => Some(bytes),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => return Err(e.into()),
    };

    let checks = collect_checks(path, content.as_deref());
    let errors = error_count(&checks);
    let report = DoctorReport {
        ok: errors == 0,
        path: path.display().to_string(),
        checks,
    };
    print_report(&report, ctx)?;

    if errors > 0 {
        return Err(AppError::ChecksFailed(errors));
    }
    Ok(())
}
