//! Recover command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tss::{Share, Tss};
use zeroize::Zeroizing;

use super::{load_share_files, load_shares_from_stdin, LoadedShare};
use crate::config::Config;
use crate::error::CliError;
use crate::formats::ShareFormat;

#[derive(Args)]
pub struct RecoverCommand {
    /// Share files or directories to read from
    #[arg(value_name = "SHARES", required_unless_present = "stdin")]
    pub inputs: Vec<PathBuf>,

    /// Input format (auto-detect if not specified)
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<ShareFormat>,

    /// Output file (use '-' for stdout)
    #[arg(short, long, value_name = "FILE", default_value = "-")]
    pub output: String,

    /// Expected threshold; fail early when fewer shares are given
    #[arg(short = 't', long, value_name = "THRESHOLD")]
    pub threshold: Option<usize>,

    /// Read shares from stdin (one per line)
    #[arg(long, conflicts_with = "inputs")]
    pub stdin: bool,

    /// Write the secret hex encoded
    #[arg(long)]
    pub hex: bool,

    /// Require shares of secrets of at least 32 bytes
    #[arg(long)]
    pub strict: bool,
}

impl RecoverCommand {
    pub fn execute(&self, config: &Config, quiet: bool) -> Result<()> {
        let loaded = if self.stdin {
            load_shares_from_stdin(self.format)?
        } else {
            load_share_files(&self.inputs, self.format)?
        };

        self.check_threshold(&loaded)?;

        let shares = loaded
            .into_iter()
            .map(|share| share.data.into_share())
            .collect::<Result<Vec<Share>, CliError>>()?;

        let secret = Tss::new(config.policy(self.strict))
            .recover(&shares)
            .context("Failed to recover secret from shares")?;

        self.output_secret(&secret)?;

        if self.output != "-" && !quiet {
            println!(
                "✅ Secret successfully recovered from {} shares",
                shares.len()
            );
        }

        Ok(())
    }

    /// Fails when fewer shares are present than the threshold given on the
    /// command line or recorded in share metadata.
    fn check_threshold(&self, shares: &[LoadedShare]) -> Result<(), CliError> {
        let recorded = shares.iter().filter_map(|share| share.data.threshold).max();

        match self.threshold.or(recorded) {
            Some(needed) if shares.len() < needed => Err(CliError::InsufficientShares {
                needed,
                available: shares.len(),
            }),
            _ => Ok(()),
        }
    }

    fn output_secret(&self, secret: &[u8]) -> Result<()> {
        let encoded;
        let bytes = if self.hex {
            encoded = Zeroizing::new(format!("{}\n", hex::encode(secret)));
            encoded.as_bytes()
        } else {
            secret
        };

        if self.output == "-" {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes).context("Failed to write to stdout")?;
            stdout.flush().context("Failed to write to stdout")?;
        } else {
            fs::write(&self.output, bytes)
                .with_context(|| format!("Failed to write to file: {}", self.output))?;
        }
        Ok(())
    }
}
