//! Input/Output format handling

use crate::error::CliError;
use crate::utils;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tss::Share;

/// Encoding of a share on disk or on the terminal.
#[derive(ValueEnum, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ShareFormat {
    Json,
    Hex,
    Base64,
    Binary,
}

impl ShareFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Hex => "hex",
            Self::Base64 => "b64",
            Self::Binary => "bin",
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(Self::Json),
            "hex" => Some(Self::Hex),
            "b64" | "base64" => Some(Self::Base64),
            "bin" => Some(Self::Binary),
            _ => None,
        }
    }

    /// Guesses the text encoding of a share.
    ///
    /// Content that decodes as both hex and base64 is rejected rather than
    /// guessed: the two readings give different shares.
    pub fn detect(content: &str) -> Result<Self, CliError> {
        let content = content.trim();

        if content.starts_with('{') && content.ends_with('}') {
            return Ok(Self::Json);
        }

        match (utils::is_hex(content), utils::is_base64(content)) {
            (true, true) => Err(CliError::InvalidFormat(
                "ambiguous encoding (valid hex and base64), pass -f".to_string(),
            )),
            (true, false) => Ok(Self::Hex),
            (false, true) => Ok(Self::Base64),
            (false, false) => Err(CliError::InvalidFormat(
                "cannot detect share encoding from content".to_string(),
            )),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ShareData {
    /// Share index, the x-coordinate (1-255)
    pub index: u8,

    /// One byte per secret byte
    #[serde(with = "hex::serde")]
    pub payload: Vec<u8>,

    /// Metadata (only included if requested)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_shares: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl ShareData {
    pub fn new(share: &Share, total_shares: usize, threshold: usize, include_metadata: bool) -> Self {
        let bytes = share.to_bytes();
        let mut data = Self::from_raw(bytes[0], bytes[1..].to_vec());

        if include_metadata {
            data.threshold = Some(threshold);
            data.total_shares = Some(total_shares);
            data.created_at = Some(chrono::Utc::now().to_rfc3339());
        }
        data
    }

    fn from_raw(index: u8, payload: Vec<u8>) -> Self {
        Self {
            index,
            payload,
            threshold: None,
            total_shares: None,
            created_at: None,
        }
    }

    pub fn into_share(self) -> Result<Share, CliError> {
        Share::from_bytes(&self.to_bytes()).map_err(|_| {
            CliError::ShareValidation(format!("share {} has an empty payload", self.index))
        })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.payload.len() + 1);
        bytes.push(self.index);
        bytes.extend_from_slice(&self.payload);
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CliError> {
        match bytes {
            [index, payload @ ..] if !payload.is_empty() => {
                Ok(Self::from_raw(*index, payload.to_vec()))
            }
            _ => Err(CliError::ShareValidation(format!(
                "a share needs at least 2 bytes, got {}",
                bytes.len()
            ))),
        }
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    pub fn from_hex(hex_str: &str) -> Result<Self, CliError> {
        let bytes = hex::decode(hex_str.trim())
            .map_err(|e| CliError::InvalidFormat(format!("invalid hex encoding: {}", e)))?;
        Self::from_bytes(&bytes)
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }

    pub fn from_base64(b64_str: &str) -> Result<Self, CliError> {
        let bytes = STANDARD
            .decode(b64_str.trim())
            .map_err(|e| CliError::InvalidFormat(format!("invalid base64 encoding: {}", e)))?;
        Self::from_bytes(&bytes)
    }

    pub fn to_json(&self) -> Result<String, CliError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CliError::InvalidFormat(format!("cannot serialize share: {}", e)))
    }

    pub fn from_json(json: &str) -> Result<Self, CliError> {
        serde_json::from_str(json)
            .map_err(|e| CliError::InvalidFormat(format!("invalid JSON share: {}", e)))
    }

    /// Encodes the share, with a trailing newline for the text formats.
    pub fn encode(&self, format: ShareFormat) -> Result<Vec<u8>, CliError> {
        let text = match format {
            ShareFormat::Json => self.to_json()?,
            ShareFormat::Hex => self.to_hex(),
            ShareFormat::Base64 => self.to_base64(),
            ShareFormat::Binary => return Ok(self.to_bytes()),
        };
        Ok(format!("{}\n", text).into_bytes())
    }

    /// Parses one text-encoded share, detecting the encoding when `format`
    /// is `None`.
    pub fn parse(content: &str, format: Option<ShareFormat>) -> Result<(Self, ShareFormat), CliError> {
        let format = match format {
            Some(f) => f,
            None => ShareFormat::detect(content)?,
        };

        let data = match format {
            ShareFormat::Json => Self::from_json(content)?,
            ShareFormat::Hex => Self::from_hex(content)?,
            ShareFormat::Base64 => Self::from_base64(content)?,
            ShareFormat::Binary => {
                return Err(CliError::InvalidFormat(
                    "binary shares must be read from a file".to_string(),
                ))
            }
        };
        Ok((data, format))
    }

    /// Decodes a share file's raw contents.
    ///
    /// The encoding is `format` if given, otherwise the file extension, then
    /// the content itself; content that is not UTF-8 is taken as binary.
    pub fn decode_file(
        path: &Path,
        bytes: &[u8],
        format: Option<ShareFormat>,
    ) -> Result<(Self, ShareFormat), CliError> {
        let format = format.or_else(|| ShareFormat::from_path(path));

        match (format, std::str::from_utf8(bytes)) {
            (Some(ShareFormat::Binary), _) | (None, Err(_)) => {
                Ok((Self::from_bytes(bytes)?, ShareFormat::Binary))
            }
            (Some(_), Err(_)) => Err(CliError::InvalidFormat(format!(
                "{} is not valid text",
                path.display()
            ))),
            (format, Ok(text)) => Self::parse(text, format),
        }
    }
}
