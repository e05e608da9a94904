use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum FieldPathSegment {
    Key(String),
    Index(usize),
}

/// Location of a value inside a workflow document, rendered as `$.nodes[0].id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub struct FieldPath {
    segments: Vec<FieldPathSegment>,
}

impl FieldPath {
    pub fn root() -> Self {
        Self { segments: Vec::new() }
    }

    pub fn key(key: impl Into<String>) -> Self {
        Self::root().child_key(key)
    }

    /// Converts a JSON pointer (`/nodes/0/id`) into a field path. Numeric
    /// tokens become indices.
    pub fn from_json_pointer(pointer: &str) -> Self {
        let segments = pointer
            .split('/')
            .skip(1)
            .filter(|token| !token.is_empty())
            .map(|token| {
                let decoded = token.replace("~1", "/").replace("~0", "~");
                match decoded.parse::<usize>() {
                    Ok(index) => FieldPathSegment::Index(index),
                    Err(_) => FieldPathSegment::Key(decoded),
                }
            })
            .collect();
        Self { segments }
    }

    pub fn child_key(&self, key: impl Into<String>) -> Self {
        let mut out = self.clone();
        out.segments.push(FieldPathSegment::Key(key.into()));
        out
    }

    pub fn child_index(&self, index: usize) -> Self {
        let mut out = self.clone();
        out.segments.push(FieldPathSegment::Index(index));
        out
    }

    pub fn segments(&self) -> &[FieldPathSegment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl Default for FieldPath {
    fn default() -> Self {
        Self::root()
    }
}

impl From<FieldPath> for String {
    fn from(path: FieldPath) -> Self {
        path.to_string()
    }
}

fn is_plain_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "$")?;
        for segment in &self.segments {
            match segment {
                FieldPathSegment::Key(key) if is_plain_key(key) => write!(f, ".{key}")?,
                FieldPathSegment::Key(key) => write!(f, "[{key:?}]")?,
                FieldPathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "field_path_test.rs"]
mod tests;
