#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddedSchema {
    pub id: &'static str,
    pub json: &'static str,
}
