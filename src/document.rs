use std::fs;
use std::path::Path;

use log::info;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::config::DEFAULT_LINE_WIDTH;
use crate::error::{Result, TagGenError};
use crate::tags::{TagSet, SCHEMA_KEY};

pub const LICENSE_HEADER: &str = "\
# This Source Code Form is subject to the terms of the Mozilla Public
# License, v. 2.0. If a copy of the MPL was not distributed with this
# file, You can obtain one at http://mozilla.org/MPL/2.0/.
";

pub const GENERATED_HEADER: &str = "
### This file was AUTOMATICALLY GENERATED by `update-glean-tags`
### DO NOT edit it by hand.

# Disable line-length rule because the links in the descriptions can be long
# yamllint disable rule:line-length
";

const DOCUMENT_START: &str = "---\n";
const DESCRIPTION_PREFIX: &str = "  description: ";
const CONTINUATION_INDENT: &str = "    ";

/// The generated `tags.yaml`: a schema marker followed by every tag.
#[derive(Debug, Clone, PartialEq)]
pub struct TagDocument {
    schema: String,
    tags: TagSet,
    line_width: usize,
}

impl TagDocument {
    pub fn new(schema: impl Into<String>, tags: TagSet) -> Self {
        Self {
            schema: schema.into(),
            tags,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }

    pub fn with_line_width(mut self, line_width: usize) -> Self {
        self.line_width = line_width;
        self
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Full file contents: license header, generated-file banner, then the
    /// YAML document with long descriptions folded.
    pub fn render(&self) -> Result<String> {
        let body = serde_yaml::to_string(self)?;

        let mut out = String::with_capacity(body.len() + 512);
        out.push_str(LICENSE_HEADER);
        out.push('\n');
        out.push_str(GENERATED_HEADER);
        out.push_str("\n\n");
        out.push_str(DOCUMENT_START);

        for line in body.lines() {
            out.push_str(&fold_line(line, self.line_width));
            out.push('\n');
        }

        Ok(out)
    }

    /// Replaces whatever is at `path` with the rendered document.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let contents = self.render()?;

        fs::write(path, contents).map_err(|source| TagGenError::OutputError {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Wrote {} tags to {}", self.tags.len(), path.display());
        Ok(())
    }
}

impl Serialize for TagDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.tags.len() + 1))?;
        map.serialize_entry(SCHEMA_KEY, &self.schema)?;
        for (name, tag) in &self.tags {
            map.serialize_entry(name, tag)?;
        }
        map.end()
    }
}

/// Folds a `description` value line at `width` columns.
///
/// A break replaces a single space once the line is already past `width`, so
/// a long word (a URL) is never split and may overrun. Runs of spaces are
/// never broken. Only plain and single-quoted values are folded; any other
/// line is returned unchanged.
pub fn fold_line(line: &str, width: usize) -> String {
    let Some(value) = line.strip_prefix(DESCRIPTION_PREFIX) else {
        return line.to_string();
    };

    if value.starts_with(&['"', '|', '>'][..]) {
        return line.to_string();
    }

    let chars: Vec<char> = value.chars().collect();
    let (start, end) = if value.starts_with('\'') {
        (1, chars.len().saturating_sub(1))
    } else {
        (0, chars.len())
    };

    let mut folded = String::with_capacity(line.len() + 16);
    folded.push_str(DESCRIPTION_PREFIX);
    let mut column = DESCRIPTION_PREFIX.len();

    for (i, &ch) in chars.iter().enumerate() {
        let single_space = ch == ' '
            && i > start
            && i + 1 < end
            && chars[i - 1] != ' '
            && chars[i + 1] != ' ';

        if single_space && column > width {
            folded.push('\n');
            folded.push_str(CONTINUATION_INDENT);
            column = CONTINUATION_INDENT.len();
        } else {
            folded.push(ch);
            column += 1;
        }
    }

    folded
}
