use std::path::Path;

use crate::error::ParseError;
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Toml,
    Json,
    Yaml,
    Auto,
}

impl DocumentFormat {
    /// Picks a format from the file extension, falling back to [`DocumentFormat::Auto`].
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("toml") => DocumentFormat::Toml,
            Some("json") => DocumentFormat::Json,
            Some("yaml") | Some("yml") => DocumentFormat::Yaml,
            _ => DocumentFormat::Auto,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParsedDocument {
    pub document: Value,
    pub format: DocumentFormat,
}

pub fn parse_document_str(input: &str, format: DocumentFormat) -> Result<ParsedDocument, ParseError> {
    let parsed = match format {
        DocumentFormat::Toml => ParsedDocument {
            document: toml::from_str::<Value>(input)?,
            format,
        },
        DocumentFormat::Json => ParsedDocument {
            document: serde_json::from_str::<Value>(input)?,
            format,
        },
        DocumentFormat::Yaml => ParsedDocument {
            document: serde_yaml::from_str::<Value>(input)?,
            format,
        },
        DocumentFormat::Auto => parse_document_auto(input)?,
    };
    tracing::debug!(format = ?parsed.format, "parsed place directory");
    Ok(parsed)
}

fn parse_document_auto(input: &str) -> Result<ParsedDocument, ParseError> {
    // TOML is the native format, so its error is the one worth reporting.
    let toml_err = match toml::from_str::<Value>(input) {
        Ok(document) => {
            return Ok(ParsedDocument {
                document,
                format: DocumentFormat::Toml,
            })
        }
        Err(e) => e,
    };

    let trimmed = input.trim_start();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        if let Ok(document) = serde_json::from_str::<Value>(input) {
            return Ok(ParsedDocument {
                document,
                format: DocumentFormat::Json,
            });
        }
    }

    match serde_yaml::from_str::<Value>(input) {
        Ok(document) => Ok(ParsedDocument {
            document,
            format: DocumentFormat::Yaml,
        }),
        Err(_) => Err(ParseError::Toml(toml_err)),
    }
}
