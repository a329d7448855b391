//! Info command implementation

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::{load_share_files, LoadedShare};
use crate::config::Config;
use crate::formats::ShareFormat;
use crate::utils::format_bytes;

#[derive(Args)]
pub struct InfoCommand {
    /// Share files or directories to analyze
    #[arg(value_name = "SHARES", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Input format (auto-detect if not specified)
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<ShareFormat>,

    /// Show detailed information
    #[arg(short, long)]
    pub detailed: bool,

    /// Output format for information
    #[arg(long, value_enum, default_value = "table")]
    pub output_format: InfoOutputFormat,

    /// Check secrets against the 32-byte minimum
    #[arg(long)]
    pub strict: bool,
}

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum InfoOutputFormat {
    Table,
    Json,
    Yaml,
}

#[derive(Debug, Serialize)]
struct ShareInfo {
    index: u8,
    secret_length: usize,
    threshold: Option<usize>,
    total_shares: Option<usize>,
    created_at: Option<String>,
    format: ShareFormat,
    file_path: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ShareSetInfo {
    total_shares: usize,
    unique_indices: usize,
    secret_length: Option<usize>,
    threshold: Option<usize>,
    recoverable: Option<bool>,
    shares: Vec<ShareInfo>,
    consistency_issues: Vec<String>,
}

impl InfoCommand {
    pub fn execute(&self, config: &Config) -> Result<()> {
        let loaded = load_share_files(&self.inputs, self.format)?;
        let info = analyze(loaded, config.policy(self.strict).min_secret_len());
        self.output_info(&info)
    }

    fn output_info(&self, info: &ShareSetInfo) -> Result<()> {
        match self.output_format {
            InfoOutputFormat::Json => println!("{}", serde_json::to_string_pretty(info)?),
            InfoOutputFormat::Yaml => print!("{}", serde_yaml::to_string(info)?),
            InfoOutputFormat::Table => self.output_table(info),
        }
        Ok(())
    }

    fn output_table(&self, info: &ShareSetInfo) {
        println!("Share Set Information");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━");

        println!("Total shares: {}", info.total_shares);
        println!("Unique indices: {}", info.unique_indices);

        match info.secret_length {
            Some(length) => println!("Secret length: {}", format_bytes(length)),
            None => println!("Secret length: ⚠️  Inconsistent"),
        }

        match info.threshold {
            Some(threshold) => println!("Threshold: {}", threshold),
            None => println!("Threshold: unknown (no metadata)"),
        }

        if !info.consistency_issues.is_empty() {
            println!("\n⚠️  Consistency Issues:");
            for issue in &info.consistency_issues {
                println!("  • {}", issue);
            }
        }

        if self.detailed && !info.shares.is_empty() {
            println!("\nIndividual Shares:");
            println!("┌───────┬──────────┬───────────┬───────┬────────┬──────────────────────────────┐");
            println!("│ Index │ Length   │ Threshold │ Total │ Format │ File                         │");
            println!("├───────┼──────────┼───────────┼───────┼────────┼──────────────────────────────┤");

            for share in &info.shares {
                println!(
                    "│ {:<5} │ {:<8} │ {:<9} │ {:<5} │ {:<6} │ {:<28} │",
                    share.index,
                    share.secret_length,
                    share.threshold.map_or("?".to_string(), |t| t.to_string()),
                    share.total_shares.map_or("?".to_string(), |t| t.to_string()),
                    share.format.extension(),
                    share
                        .file_path
                        .as_ref()
                        .map_or("-".to_string(), |p| p.display().to_string()),
                );
            }
            println!("└───────┴──────────┴───────────┴───────┴────────┴──────────────────────────────┘");
        }

        println!("\nRecovery Status:");
        match (info.recoverable, info.threshold) {
            (Some(true), Some(threshold)) => println!(
                "✅ Sufficient shares for recovery ({} >= {})",
                info.unique_indices, threshold
            ),
            (Some(false), Some(threshold)) => println!(
                "❌ Insufficient shares for recovery ({} < {})",
                info.unique_indices, threshold
            ),
            (Some(false), None) => println!("❌ Shares cannot be combined as they are"),
            _ => println!("❓ Cannot determine recovery status (unknown threshold)"),
        }
    }
}

/// Summarizes a set of shares and lists every problem that would make
/// recovery fail or give a wrong secret.
fn analyze(loaded: Vec<LoadedShare>, min_secret_len: usize) -> ShareSetInfo {
    let mut consistency_issues = Vec::new();

    let shares: Vec<ShareInfo> = loaded
        .into_iter()
        .map(|share| ShareInfo {
            index: share.data.index,
            secret_length: share.data.payload.len(),
            threshold: share.data.threshold,
            total_shares: share.data.total_shares,
            created_at: share.data.created_at,
            format: share.format,
            file_path: share.source,
        })
        .collect();

    let secret_length = match shares.first() {
        None => None,
        Some(first) if shares.iter().all(|s| s.secret_length == first.secret_length) => {
            Some(first.secret_length)
        }
        Some(_) => {
            consistency_issues.push("Shares have different payload lengths".to_string());
            None
        }
    };

    if let Some(length) = secret_length {
        if length < min_secret_len {
            consistency_issues.push(format!(
                "Secret length {} is below the configured minimum of {}",
                length, min_secret_len
            ));
        }
    }

    let mut index_counts = BTreeMap::new();
    for share in &shares {
        *index_counts.entry(share.index).or_insert(0usize) += 1;
    }

    if index_counts.contains_key(&0) {
        consistency_issues.push("Share index 0 is not a valid evaluation point".to_string());
    }
    for (index, count) in &index_counts {
        if *count > 1 {
            consistency_issues.push(format!(
                "Duplicate index: {} (appears {} times)",
                index, count
            ));
        }
    }

    let thresholds: Vec<usize> = shares.iter().filter_map(|s| s.threshold).collect();
    let threshold = thresholds.iter().copied().max();
    if thresholds.iter().any(|&t| Some(t) != threshold) {
        consistency_issues.push("Shares record different thresholds".to_string());
    }

    let unique_indices = index_counts.len();
    let recoverable = if !consistency_issues.is_empty() {
        Some(false)
    } else {
        threshold.map(|t| unique_indices >= t)
    };

    ShareSetInfo {
        total_shares: shares.len(),
        unique_indices,
        secret_length,
        threshold,
        recoverable,
        shares,
        consistency_issues,
    }
}
