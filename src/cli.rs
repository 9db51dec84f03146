mod compare;
mod contact;
mod report;
mod scenario;

use clap::{Parser, Subcommand};

pub use self::{
    compare::{CompareArgs, compare},
    contact::{ContactArgs, contact},
    report::{ReportArgs, report},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare the annual costs of the current and the proposed mowers.
    #[clap(name = "compare")]
    Compare(Box<CompareArgs>),

    /// Write the comparison report to a file.
    #[clap(name = "report")]
    Report(Box<ReportArgs>),

    /// Compare, and ask to be contacted with the inputs attached.
    #[clap(name = "contact")]
    Contact(Box<ContactArgs>),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_command() {
        Args::command().debug_assert();
    }
}
