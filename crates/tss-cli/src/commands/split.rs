//! Split command implementation

use anyhow::{bail, Context, Result};
use clap::Args;
use rand_chacha::rand_core::SeedableRng;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tss::{ShareSet, Tss};
use zeroize::Zeroizing;

use crate::config::Config;
use crate::formats::{ShareData, ShareFormat};

#[derive(Args)]
pub struct SplitCommand {
    /// Number of shares to generate [default: from config, 5]
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub shares: Option<usize>,

    /// Minimum number of shares required for recovery [default: from config, 3]
    #[arg(short = 'k', long, value_name = "THRESHOLD")]
    pub threshold: Option<usize>,

    /// Input file (use '-' for stdin)
    #[arg(short, long, value_name = "FILE", default_value = "-")]
    pub input: String,

    /// Output directory for share files
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Output format [default: from config, json]
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<ShareFormat>,

    /// Base name for output files
    #[arg(long, value_name = "NAME", default_value = "share")]
    pub base_name: String,

    /// Print shares to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Read secret from environment variable
    #[arg(long, value_name = "VAR")]
    pub env_var: Option<String>,

    /// Prompt for secret interactively (hidden input)
    #[arg(long)]
    pub interactive: bool,

    /// Seed for reproducible share generation (32 bytes, hex encoded).
    /// Only for test fixtures: anyone holding the seed can recompute every share.
    #[arg(long, value_name = "HEX")]
    pub seed: Option<String>,

    /// Include metadata in output
    #[arg(long)]
    pub include_metadata: bool,

    /// Require secrets of at least 32 bytes
    #[arg(long)]
    pub strict: bool,
}

impl SplitCommand {
    pub fn execute(&self, config: &Config, quiet: bool) -> Result<()> {
        self.validate()?;

        let shares_count = self.shares.unwrap_or(config.defaults.shares);
        let threshold = self.threshold.unwrap_or(config.defaults.threshold);
        let format = self.format.unwrap_or(config.defaults.format);

        let secret = self.read_secret()?;
        let tss = Tss::new(config.policy(self.strict));

        let result = if let Some(seed_hex) = &self.seed {
            let seed = parse_seed(seed_hex)?;
            log::warn!("using a fixed seed; these shares are reproducible");
            let mut rng = rand_chacha::ChaCha20Rng::from_seed(*seed);
            tss.generate_with_rng(&secret, shares_count, threshold, &mut rng)
        } else {
            tss.generate(&secret, shares_count, threshold)
        };
        let shares = result.context("Failed to split secret")?;

        if self.stdout {
            self.output_to_stdout(&shares, format, threshold)?;
        } else {
            let dir = self.output_to_files(&shares, format, threshold)?;
            if !quiet {
                println!(
                    "✅ Successfully generated {} shares with threshold {}",
                    shares.len(),
                    threshold
                );
                println!("Shares saved to: {}", dir.display());
            }
        }

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        // Check for conflicting input options
        let input_methods = [self.env_var.is_some(), self.interactive, self.input != "-"];
        if input_methods.iter().filter(|&&x| x).count() > 1 {
            bail!("Only one input method can be specified");
        }

        if self.stdout && self.output_dir.is_some() {
            bail!("--stdout and --output-dir cannot be combined");
        }

        Ok(())
    }

    fn read_secret(&self) -> Result<Zeroizing<Vec<u8>>> {
        let secret = if let Some(env_var) = &self.env_var {
            std::env::var(env_var)
                .with_context(|| format!("Environment variable '{}' not found", env_var))?
                .into_bytes()
        } else if self.interactive {
            rpassword::prompt_password("Enter secret: ")
                .context("Failed to read secret from terminal")?
                .into_bytes()
        } else if self.input == "-" {
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .context("Failed to read from stdin")?;
            buffer
        } else {
            fs::read(&self.input).with_context(|| format!("Failed to read file: {}", self.input))?
        };

        Ok(Zeroizing::new(secret))
    }

    fn share_data(&self, shares: &ShareSet, threshold: usize) -> Vec<ShareData> {
        shares
            .iter()
            .map(|share| ShareData::new(share, shares.len(), threshold, self.include_metadata))
            .collect()
    }

    fn output_to_stdout(&self, shares: &ShareSet, format: ShareFormat, threshold: usize) -> Result<()> {
        let mut stdout = io::stdout().lock();
        for data in self.share_data(shares, threshold) {
            stdout.write_all(&data.encode(format)?)?;
        }
        stdout.flush()?;
        Ok(())
    }

    fn output_to_files(&self, shares: &ShareSet, format: ShareFormat, threshold: usize) -> Result<PathBuf> {
        let output_dir = self
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        if !output_dir.exists() {
            fs::create_dir_all(&output_dir)
                .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;
        }

        for data in self.share_data(shares, threshold) {
            let filename = format!("{}-{:03}.{}", self.base_name, data.index, format.extension());
            let filepath = output_dir.join(filename);

            fs::write(&filepath, data.encode(format)?)
                .with_context(|| format!("Failed to write share: {}", filepath.display()))?;
            log::debug!("wrote share {} to {}", data.index, filepath.display());
        }

        Ok(output_dir)
    }
}

fn parse_seed(seed_hex: &str) -> Result<Zeroizing<[u8; 32]>> {
    let bytes = Zeroizing::new(hex::decode(seed_hex.trim()).context("Invalid hex seed")?);
    if bytes.len() != 32 {
        bail!("Seed must be exactly 32 bytes (64 hex characters)");
    }

    let mut seed = Zeroizing::new([0u8; 32]);
    seed.copy_from_slice(&bytes);
    Ok(seed)
}
