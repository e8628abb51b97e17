//! Formatting options and their TOML configuration file.
//!
//! ```toml
//! document_title = "Reading notes"
//! allow_html = false
//! ```
//!
//! Missing keys keep their defaults; unknown keys are rejected.

use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Title used for the document `<TITLE>` when none is configured.
pub const DEFAULT_DOCUMENT_TITLE: &str = "Prasang";

/// Formatting options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Text of the document `<TITLE>` element.
    pub document_title: String,
    /// Copy line content into the markup verbatim instead of escaping it.
    pub allow_html: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            document_title: DEFAULT_DOCUMENT_TITLE.to_string(),
            allow_html: false,
        }
    }
}

impl Options {
    /// Parse options from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load options from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Error::io(path.display().to_string(), e))?;
        let options = Self::from_toml_str(&text)?;
        debug!("loaded options from {}: {:?}", path.display(), options);
        Ok(options)
    }
}
