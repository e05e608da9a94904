use std::collections::BTreeSet;

pub const KNOWN_NODE_TYPES: &[&str] = &[
    "n8n-nodes-base.gmailTrigger",
    "n8n-nodes-base.if",
    "n8n-nodes-base.stickyNote",
    "@n8n/n8n-nodes-langchain.chatTrigger",
    "@n8n/n8n-nodes-langchain.agent",
    "@n8n/n8n-nodes-langchain.lmChatOpenRouter",
    "@n8n/n8n-nodes-langchain.outputParserStructured",
];

/// Allow-list of node types the validator recognizes. Unknown types only
/// produce warnings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeTypeCatalog {
    extra: BTreeSet<String>,
}

impl NodeTypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extra_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra.extend(types.into_iter().map(Into::into));
        self
    }

    pub fn is_known(&self, node_type: &str) -> bool {
        KNOWN_NODE_TYPES.iter().any(|known| *known == node_type) || self.extra.contains(node_type)
    }
}

#[cfg(test)]
#[path = "node_types_test.rs"]
mod tests;
