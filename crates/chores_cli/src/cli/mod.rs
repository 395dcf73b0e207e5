use clap::Parser;

/// Submit due recurring chores to the Todoist sync API.
///
/// Meant to run from an external scheduler roughly once per hour; a run
/// with nothing due exits silently. Repeated runs within the same UTC day
/// are safe because command ids are deterministic.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print the encoded command batch instead of sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Evaluate the catalog at this instant instead of the current time
    #[arg(long, value_name = "RFC3339")]
    pub now: Option<String>,
}
