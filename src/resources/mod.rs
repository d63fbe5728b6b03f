//! Resource definitions
//!
//! Each resource pairs a static [`ResourceSchema`] with the endpoints that
//! serve it. One generic orchestrator in [`crate::engine`] drives them all.
//!
//! Endpoint paths are templates: `{{ change_id }}` is replaced with the
//! caller's predicate of the same name.

mod assets;
mod catalog;
mod itil;
mod people;
mod registry;
mod tickets;

pub use registry::Registry;

use crate::pagination::PaginationMode;
use crate::schema::ResourceSchema;

/// Single-item endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetBinding {
    /// Column whose value identifies the item
    pub key: &'static str,
    /// Path template
    pub path: &'static str,
    /// JSON key wrapping the item
    pub envelope: &'static str,
}

impl GetBinding {
    pub const fn new(key: &'static str, path: &'static str, envelope: &'static str) -> Self {
        Self {
            key,
            path,
            envelope,
        }
    }

    /// Item addressed by `id`
    pub const fn by_id(path: &'static str, envelope: &'static str) -> Self {
        Self::new("id", path, envelope)
    }
}

/// Collection endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListBinding {
    /// Path template
    pub path: &'static str,
    /// JSON key wrapping the items
    pub envelope: &'static str,
    pub mode: PaginationMode,
    /// Item endpoint used instead of listing when its key is supplied
    pub shortcut: Option<GetBinding>,
}

impl ListBinding {
    /// Collection paged through the `Link` header
    pub const fn paged(path: &'static str, envelope: &'static str) -> Self {
        Self {
            path,
            envelope,
            mode: PaginationMode::Paged,
            shortcut: None,
        }
    }

    /// Collection returned in a single response
    pub const fn single(path: &'static str, envelope: &'static str) -> Self {
        Self {
            mode: PaginationMode::Single,
            ..Self::paged(path, envelope)
        }
    }

    pub const fn with_shortcut(self, shortcut: GetBinding) -> Self {
        Self {
            shortcut: Some(shortcut),
            ..self
        }
    }
}

/// Everything the connector knows about one table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceDefinition {
    pub schema: ResourceSchema,
    pub list: ListBinding,
    pub get: Option<GetBinding>,
}

impl ResourceDefinition {
    /// Table name
    pub fn name(&self) -> &'static str {
        self.schema.name
    }
}

/// Every built-in resource
pub static ALL: &[&ResourceDefinition] = &[
    &people::AGENT,
    &people::AGENT_ROLE,
    &people::ANNOUNCEMENT,
    &assets::ASSET,
    &assets::ASSET_COMPONENT,
    &assets::ASSET_CONTRACT,
    &assets::ASSET_TYPE,
    &people::BUSINESS_HOUR,
    &itil::CHANGE,
    &itil::CHANGE_NOTE,
    &assets::CONTRACT,
    &assets::CONTRACT_TYPE,
    &people::DEPARTMENT,
    &people::LOCATION,
    &itil::PROBLEM,
    &itil::PROBLEM_NOTE,
    &itil::PROBLEM_TASK,
    &itil::PROBLEM_TIMEENTRY,
    &assets::PRODUCT,
    &assets::PURCHASE_ORDER,
    &itil::RELEASE,
    &itil::RELEASE_NOTE,
    &itil::RELEASE_TASK,
    &itil::RELEASE_TIMEENTRY,
    &people::REQUESTER,
    &catalog::SERVICE,
    &catalog::SLA_POLICY,
    &assets::SOFTWARE,
    &assets::SOFTWARE_INSTALLATION,
    &assets::SOFTWARE_USER,
    &catalog::SOLUTION_ARTICLE,
    &catalog::SOLUTION_CATEGORY,
    &catalog::SOLUTION_FOLDER,
    &tickets::TICKET,
    &tickets::TICKET_CONVERSATION,
    &tickets::TICKET_TASK,
    &tickets::TICKET_TIMEENTRY,
    &assets::VENDOR,
];
