//! Text formatting functions for `tickets_rust`.
//!
//! Provides plain text (non-ANSI) formatting for terminal output:
//! - Status icons (○ ◐ ● ✓)
//! - Bracketed labels for priority and status
//! - Ticket line and detail formatting

use std::fmt::Write as _;

use chrono::{DateTime, SecondsFormat, Utc};
use tickets_lib::Ticket;

/// Status icon characters.
pub mod icons {
    /// New or open ticket (hollow circle).
    pub const OPEN: &str = "○";
    /// Work under way (half-filled).
    pub const IN_PROGRESS: &str = "◐";
    /// Blocked or on hold (filled circle).
    pub const BLOCKED: &str = "●";
    /// Closed, resolved or done (checkmark).
    pub const CLOSED: &str = "✓";
    /// Any other label.
    pub const UNKNOWN: &str = "?";
}

/// Return the icon for a status label. Labels are free-form, so matching is
/// case-insensitive and ignores spaces, dashes and underscores.
#[must_use]
pub fn format_status_icon(status: &str) -> &'static str {
    let normalized: String = status
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect();
    match normalized.as_str() {
        "new" | "open" | "reopened" => icons::OPEN,
        "inprogress" | "active" | "assigned" => icons::IN_PROGRESS,
        "blocked" | "onhold" | "pending" => icons::BLOCKED,
        "closed" | "resolved" | "done" => icons::CLOSED,
        _ => icons::UNKNOWN,
    }
}

/// Bracket a label, showing `-` when it is blank.
#[must_use]
pub fn format_label(label: &str) -> String {
    if label.trim().is_empty() {
        "[-]".to_string()
    } else {
        format!("[{label}]")
    }
}

fn format_timestamp(value: Option<&DateTime<Utc>>) -> String {
    value.map_or_else(
        || "-".to_string(),
        |dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true),
    )
}

/// Format a single-line ticket summary.
///
/// Format: `{icon} {id} [{priority}] [{status}] {description}`
#[must_use]
pub fn format_ticket_line(ticket: &Ticket) -> String {
    format!(
        "{} {} {} {} {}",
        format_status_icon(ticket.status()),
        ticket.ticket_id.as_deref().unwrap_or("-"),
        format_label(ticket.priority()),
        format_label(ticket.status()),
        ticket.description.as_deref().unwrap_or("(no description)"),
    )
}

/// Format a ticket with its dates, user references and comments.
#[must_use]
pub fn format_ticket_details(ticket: &Ticket) -> String {
    let mut out = format_ticket_line(ticket);
    out.push('\n');
    let _ = writeln!(out, "  Created:  {}", format_timestamp(ticket.date_created.as_ref()));
    let _ = writeln!(out, "  Updated:  {}", format_timestamp(ticket.last_updated.as_ref()));
    let _ = writeln!(
        out,
        "  Creator:  {}",
        ticket.created_by_user_id.as_deref().unwrap_or("-")
    );
    let _ = writeln!(
        out,
        "  Assignee: {}",
        ticket.assigned_to_user_id.as_deref().unwrap_or("-")
    );

    match ticket.comments.as_deref() {
        Some(comments) if !comments.is_empty() => {
            let _ = writeln!(out, "\nComments ({}):", comments.len());
            for comment in comments {
                let _ = writeln!(
                    out,
                    "  [{}] {} ({}): {}",
                    comment.comment_id.as_deref().unwrap_or("-"),
                    comment.user_id.as_deref().unwrap_or("-"),
                    format_timestamp(comment.date_created.as_ref()),
                    comment.comment_text.as_deref().unwrap_or(""),
                );
            }
        }
        _ => out.push_str("\nNo comments.\n"),
    }
    out
}
