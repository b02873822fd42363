//! Reader for the `---` delimited `key: value` header at the top of a plan.
//!
//! Only the header is consumed: lines are pulled from a buffered reader one at
//! a time and scanning stops at the closing delimiter, so the body of a large
//! plan is never read.

use crate::error::{FrontmatterError, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

const DELIMITER: &str = "---";

/// Parsed frontmatter fields. Later duplicate keys overwrite earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    fields: HashMap<String, String>,
}

impl Frontmatter {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.get("name")
    }

    pub fn description(&self) -> Option<&str> {
        self.get("description")
    }

    /// Both required fields, or `None` if either is absent or empty.
    pub fn name_and_description(&self) -> Option<(&str, &str)> {
        let name = self.name().filter(|n| !n.is_empty())?;
        let description = self.description().filter(|d| !d.is_empty())?;
        Some((name, description))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Parse the frontmatter of the file at `path`.
pub fn parse_frontmatter(path: &Path) -> Result<Frontmatter> {
    let file = File::open(path)?;
    parse_frontmatter_from(BufReader::new(file))
}

/// Parse frontmatter from any buffered source, stopping at the closing `---`.
pub fn parse_frontmatter_from<R: BufRead>(reader: R) -> Result<Frontmatter> {
    let mut lines = reader.lines();

    let first = lines.next().transpose()?.unwrap_or_default();
    if first.trim() != DELIMITER {
        return Err(FrontmatterError::MissingOpening.into());
    }

    let mut fields = HashMap::new();
    for line in lines {
        let line = line?;
        let stripped = line.trim();
        if stripped == DELIMITER {
            return Ok(Frontmatter { fields });
        }
        if stripped.is_empty() || stripped.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            return Err(FrontmatterError::InvalidLine(line.trim_end().to_string()).into());
        };
        fields.insert(key.trim().to_string(), unquote(value.trim()).to_string());
    }

    Err(FrontmatterError::MissingClosing.into())
}

/// Strip one layer of matching `"` or `'` quotes.
fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}
