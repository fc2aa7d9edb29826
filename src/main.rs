//! `tickets_rust` (tk) - file-backed ticket tracker
//!
//! One JSON file holds every ticket; the CLI and the HTTP API both read and
//! rewrite it whole.

fn main() {
    if let Err(e) = tickets_rust::cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
