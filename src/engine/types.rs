//! Engine types
//!
//! The sink items are delivered to and the statistics a fetch reports.

use crate::error::Result;
use serde::Serialize;
use serde_json::Value;

/// Receiver for fetched items, in upstream order
///
/// An error returned from `emit` aborts the fetch and is propagated to the
/// caller unchanged.
pub trait ItemSink {
    /// Accept one item
    fn emit(&mut self, item: Value) -> Result<()>;
}

impl ItemSink for Vec<Value> {
    fn emit(&mut self, item: Value) -> Result<()> {
        self.push(item);
        Ok(())
    }
}

impl<F> ItemSink for F
where
    F: FnMut(Value) -> Result<()>,
{
    fn emit(&mut self, item: Value) -> Result<()> {
        self(item)
    }
}

/// Statistics from one list or get
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FetchStats {
    /// Upstream requests that returned successfully
    pub pages: usize,
    /// Items delivered to the sink
    pub items: usize,
}

impl FetchStats {
    /// Create new stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a fetched page
    pub fn add_page(&mut self) {
        self.pages += 1;
    }

    /// Count an emitted item
    pub fn add_item(&mut self) {
        self.items += 1;
    }
}
