use chores_core::error::AppError;
use chores_core::{catalog, command, schedule, sync};
use clap::Parser;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

mod cli;

use cli::Cli;

fn resolve_now(raw: Option<&str>) -> Result<OffsetDateTime, AppError> {
    match raw {
        Some(value) => OffsetDateTime::parse(value, &Rfc3339)
            .map(|parsed| parsed.to_offset(time::UtcOffset::UTC))
            .map_err(|_| AppError::invalid_input("--now must be RFC3339")),
        None => Ok(OffsetDateTime::now_utc()),
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let now = resolve_now(cli.now.as_deref())?;

    let due = schedule::due_tasks(catalog::CATALOG, now);
    if due.is_empty() {
        // Nothing due this cycle. Silent success, no token read, no request.
        return Ok(());
    }

    let commands = command::build_commands(&due, now);

    if cli.dry_run {
        println!("{}", sync::encode_commands(&commands)?);
        return Ok(());
    }

    let token = sync::token_from_env()?;
    let transport = sync::UreqTransport::new();
    let body = sync::submit(&transport, &token, &commands)?;
    println!("{body}");

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        if let AppError::Remote { body, .. } = &err {
            if !body.is_empty() {
                println!("{body}");
            }
        }
        eprintln!("ERROR: {err}");
        std::process::exit(1);
    }
}
