use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::Serialize;

/// Primitive attribute types understood by the host's attribute engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttrType {
    String,
    Bool,
    Int,
    StringSet,
    StringMap,
}

/// Whether the caller must supply the attribute or the data source computes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttrMode {
    Required,
    Computed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttrSpec {
    pub attr_type: AttrType,
    pub mode:      AttrMode,
}

/// Flat attribute schema for one data source, attribute name to spec.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Schema(pub BTreeMap<&'static str, AttrSpec>);

impl Schema {
    pub fn attr(mut self, name: &'static str, attr_type: AttrType, mode: AttrMode) -> Self {
        self.0.insert(name, AttrSpec { attr_type, mode });
        self
    }

    pub fn get(&self, name: &str) -> Option<&AttrSpec> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A single user-facing failure message. One per failed read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub summary: String,
}

impl Diagnostic {
    pub fn error(summary: impl Into<String>) -> Self {
        Diagnostic { summary: summary.into() }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.summary)
    }
}

/// The read-only data-source contract the host framework drives.
#[async_trait]
pub trait DataSource: Send + Sync {
    type View: Serialize + Send;

    /// Attribute schema advertised to the host.
    fn schema(&self) -> Schema;

    /// Load configuration and verify credentials. Called once before reads.
    async fn init(&self) -> anyhow::Result<()>;

    /// Fetch the remote record for `id` and project it onto the view.
    async fn read(&self, id: &str) -> Result<Self::View, Diagnostic>;
}
