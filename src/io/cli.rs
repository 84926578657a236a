//! Command-line interface for one-off distribution queries

use crate::algorithm::mode::UnimodalPmf;
use crate::algorithm::sampling::simulate;
use crate::io::configuration::{DEFAULT_SAMPLES, DEFAULT_SEED};
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::SimulationProgress;
use crate::io::report::{
    format_mode, format_probability, render_simulation, render_table, write_table,
};
use crate::math::binomial::Binomial;
use crate::math::distribution::Distribution;
use crate::math::poisson_binomial::PoissonBinomial;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "poibin")]
#[command(
    author,
    version,
    about = "Exact Binomial and Poisson Binomial probabilities"
)]
/// Command-line arguments for the distribution query tool
pub struct Cli {
    /// Query to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available queries
#[derive(Subcommand)]
pub enum Command {
    /// Probability of exactly K successes
    Pmf {
        /// Number of successes
        #[arg(short, long = "successes")]
        k: usize,
        /// Distribution to query
        #[command(flatten)]
        distribution: DistributionArgs,
    },

    /// Probability of at most K successes
    Cdf {
        /// Number of successes
        #[arg(short, long = "successes")]
        k: usize,
        /// Distribution to query
        #[command(flatten)]
        distribution: DistributionArgs,
    },

    /// Most likely number of successes
    Mode {
        /// Distribution to query
        #[command(flatten)]
        distribution: DistributionArgs,
    },

    /// Mass and cumulative probability of every outcome count
    Table {
        /// Distribution to query
        #[command(flatten)]
        distribution: DistributionArgs,
        /// Write the table to this CSV file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Compare Monte Carlo frequencies with the exact mass function
    Simulate {
        /// Distribution to query
        #[command(flatten)]
        distribution: DistributionArgs,
        /// Number of draws
        #[arg(short, long, default_value_t = DEFAULT_SAMPLES)]
        samples: usize,
        /// Random seed for reproducible draws
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },
}

/// Description of the trials shared by every query
#[derive(Args, Debug, Clone)]
pub struct DistributionArgs {
    /// Number of trials (defaults to the length of --probabilities)
    #[arg(short = 'n', long)]
    pub trials: Option<usize>,

    /// Success probability shared by every trial
    #[arg(
        short,
        long,
        conflicts_with = "probabilities",
        required_unless_present = "probabilities"
    )]
    pub probability: Option<f64>,

    /// Comma-separated success probability of each trial
    #[arg(short = 'v', long, value_delimiter = ',', num_args = 1..)]
    pub probabilities: Vec<f64>,
}

impl DistributionArgs {
    /// Build the distribution these arguments describe
    ///
    /// # Errors
    ///
    /// Returns an error if a shared probability is given without a trial
    /// count, or if the probabilities fail validation
    pub fn resolve(&self) -> Result<Distribution> {
        if let Some(p) = self.probability {
            let n = self.trials.ok_or_else(|| {
                invalid_parameter(
                    "trials",
                    &"<missing>",
                    &"a shared --probability needs --trials",
                )
            })?;
            return Ok(Binomial::new(n, p)?.into());
        }

        let n = self.trials.unwrap_or(self.probabilities.len());
        Ok(PoissonBinomial::with_trials(n, self.probabilities.clone())?.into())
    }
}

/// Runs the parsed query and renders its result
pub struct QueryProcessor {
    cli: Cli,
}

impl QueryProcessor {
    /// Create a processor for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the query and print its result to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if the distribution is invalid or the query fails
    // Printing the result is the purpose of the binary
    #[allow(clippy::print_stdout)]
    pub fn process(&self) -> Result<()> {
        let output = self.execute()?;
        if !output.is_empty() {
            print!("{output}");
        }
        Ok(())
    }

    /// Run the query and return the text it would print
    ///
    /// # Errors
    ///
    /// Returns an error if the distribution is invalid, the query fails, or
    /// a requested table file cannot be written
    pub fn execute(&self) -> Result<String> {
        match &self.cli.command {
            Command::Pmf { k, distribution } => {
                let distribution = distribution.resolve()?;
                Ok(format!("{}\n", format_probability(distribution.pmf(*k)?)))
            }
            Command::Cdf { k, distribution } => {
                let distribution = distribution.resolve()?;
                Ok(format!("{}\n", format_probability(distribution.cdf(*k)?)))
            }
            Command::Mode { distribution } => {
                let distribution = distribution.resolve()?;
                Ok(format!("{}\n", format_mode(&distribution.mode()?)))
            }
            Command::Table {
                distribution,
                output,
            } => {
                let distribution = distribution.resolve()?;
                let summary = format!(
                    "mean={} variance={}\n",
                    format_probability(distribution.mean()),
                    format_probability(distribution.variance())
                );
                match output {
                    Some(path) => {
                        write_table(&distribution, path)?;
                        Ok(summary)
                    }
                    None => Ok(render_table(&distribution)? + &summary),
                }
            }
            Command::Simulate {
                distribution,
                samples,
                seed,
                quiet,
            } => {
                let distribution = distribution.resolve()?;
                let progress = SimulationProgress::new(*samples, *quiet);
                let simulation = simulate(&distribution.probabilities(), *samples, *seed, |done| {
                    progress.update(done);
                })?;
                progress.finish();
                render_simulation(&distribution, &simulation)
            }
        }
    }
}
