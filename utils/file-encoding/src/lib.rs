//! Line ending and BOM handling for text edits.
//!
//! Edits are matched against LF-normalized text; [`TextFile`] remembers the
//! original convention so the result can be written back unchanged in shape.

use std::path::Path;

use thiserror::Error;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("File is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Line ending type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
    Cr,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::Cr => "\r",
        }
    }
}

/// Pick the dominant line ending. Ties and line-less text resolve to LF.
pub fn detect_line_ending(content: &str) -> LineEnding {
    let bytes = content.as_bytes();
    let (mut lf, mut crlf, mut cr) = (0usize, 0usize, 0usize);
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\r' if bytes.get(i + 1) == Some(&b'\n') => {
                crlf += 1;
                i += 1;
            }
            b'\r' => cr += 1,
            b'\n' => lf += 1,
            _ => {}
        }
        i += 1;
    }

    if crlf > lf && crlf >= cr {
        LineEnding::CrLf
    } else if cr > lf && cr > crlf {
        LineEnding::Cr
    } else {
        LineEnding::Lf
    }
}

/// Convert every CRLF and lone CR to LF.
pub fn normalize_to_lf(content: &str) -> String {
    if !content.contains('\r') {
        return content.to_string();
    }
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// Convert LF-normalized text to `target`.
pub fn restore_line_endings(content: &str, target: LineEnding) -> String {
    match target {
        LineEnding::Lf => content.to_string(),
        other => content.replace('\n', other.as_str()),
    }
}

/// Decoded text plus the format needed to write it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFile {
    /// Content with LF line endings and no BOM.
    pub content: String,
    pub line_ending: LineEnding,
    pub has_bom: bool,
}

impl TextFile {
    pub fn decode(bytes: Vec<u8>) -> Result<Self, EncodingError> {
        let has_bom = bytes.starts_with(UTF8_BOM);
        let bytes = if has_bom {
            bytes[UTF8_BOM.len()..].to_vec()
        } else {
            bytes
        };
        let raw = String::from_utf8(bytes)?;
        Ok(Self {
            line_ending: detect_line_ending(&raw),
            content: normalize_to_lf(&raw),
            has_bom,
        })
    }

    /// Render `content` (LF-normalized) in this file's original format.
    pub fn encode(&self, content: &str) -> Vec<u8> {
        let text = restore_line_endings(content, self.line_ending);
        let mut out = Vec::with_capacity(text.len() + UTF8_BOM.len());
        if self.has_bom {
            out.extend_from_slice(UTF8_BOM);
        }
        out.extend_from_slice(text.as_bytes());
        out
    }

    pub async fn read(path: &Path) -> Result<Self, EncodingError> {
        let bytes = tokio::fs::read(path).await?;
        Self::decode(bytes)
    }
}

#[cfg(test)]
#[path = "lib.test.rs"]
mod tests;
