//! Command implementations for the tss CLI

mod info;
mod recover;
mod split;

pub use info::InfoCommand;
pub use recover::RecoverCommand;
pub use split::SplitCommand;

use crate::config::Config;
use crate::formats::{ShareData, ShareFormat};
use crate::utils;
use anyhow::{Context, Result};
use clap::Subcommand;
use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

#[derive(Subcommand)]
pub enum Commands {
    /// Split a secret into shares
    Split(SplitCommand),

    /// Recover a secret from shares
    Recover(RecoverCommand),

    /// Display information about shares
    Info(InfoCommand),
}

impl Commands {
    pub fn execute(&self, config: &Config, quiet: bool) -> Result<()> {
        match self {
            Commands::Split(cmd) => cmd.execute(config, quiet),
            Commands::Recover(cmd) => cmd.execute(config, quiet),
            Commands::Info(cmd) => cmd.execute(config),
        }
    }
}

/// A share read from a file or stdin, with where it came from.
pub struct LoadedShare {
    pub data: ShareData,
    pub format: ShareFormat,
    pub source: Option<PathBuf>,
}

/// Reads shares from files and directories.
///
/// Files named explicitly must parse; files found by walking a directory
/// are skipped with a warning when they do not.
pub fn load_share_files(inputs: &[PathBuf], format: Option<ShareFormat>) -> Result<Vec<LoadedShare>> {
    let mut shares = Vec::new();

    for path in utils::expand_inputs(inputs)? {
        let explicit = inputs.contains(&path);
        match load_share_file(&path, format) {
            Ok(share) => shares.push(share),
            Err(e) if !explicit => log::warn!("skipping {}: {:#}", path.display(), e),
            Err(e) => return Err(e),
        }
    }

    Ok(shares)
}

fn load_share_file(path: &Path, format: Option<ShareFormat>) -> Result<LoadedShare> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    let (data, format) = ShareData::decode_file(path, &bytes, format)
        .with_context(|| format!("Failed to parse share: {}", path.display()))?;

    log::debug!("read share {} from {} ({:?})", data.index, path.display(), format);
    Ok(LoadedShare {
        data,
        format,
        source: Some(path.to_path_buf()),
    })
}

/// Reads one text-encoded share per non-empty line of stdin.
pub fn load_shares_from_stdin(format: Option<ShareFormat>) -> Result<Vec<LoadedShare>> {
    let mut shares = Vec::new();

    for (number, line) in io::stdin().lock().lines().enumerate() {
        let line = line.context("Failed to read line from stdin")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (data, format) = ShareData::parse(line, format)
            .with_context(|| format!("Failed to parse share on line {}", number + 1))?;
        shares.push(LoadedShare {
            data,
            format,
            source: None,
        });
    }

    Ok(shares)
}
