use serde_json::Value;

use super::fields::NAME;

/// A `tags` element as found in the wild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    Plain(String),
    Named(String),
    Other,
}

impl Tag {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(tag) => Tag::Plain(tag.clone()),
            Value::Object(object) => match object.get(NAME) {
                Some(Value::String(name)) => Tag::Named(name.clone()),
                _ => Tag::Other,
            },
            _ => Tag::Other,
        }
    }

    pub fn into_name(self) -> Option<String> {
        match self {
            Tag::Plain(name) | Tag::Named(name) => Some(name),
            Tag::Other => None,
        }
    }
}

#[cfg(test)]
#[path = "tag_test.rs"]
mod tests;
