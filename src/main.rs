//! Agenda CLI - meeting agenda grouping and document generation

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = agenda_doc::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
