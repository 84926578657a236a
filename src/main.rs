//! CLI entry point for Binomial and Poisson Binomial queries

use clap::Parser;
use poibin::io::cli::{Cli, QueryProcessor};

fn main() -> poibin::Result<()> {
    let cli = Cli::parse();
    let processor = QueryProcessor::new(cli);
    processor.process()
}
