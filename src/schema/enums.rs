//! Numeric code labels
//!
//! Freshservice reports statuses, priorities and similar attributes as small
//! integers. Each table maps the documented codes to their labels; anything
//! else, including a missing code, is `"Unknown"`.

use serde::Serialize;

/// Label for codes a table does not list
pub const UNKNOWN: &str = "Unknown";

const PRIORITY: &[(i64, &str)] = &[(1, "Low"), (2, "Medium"), (3, "High"), (4, "Urgent")];
const IMPACT: &[(i64, &str)] = &[(1, "Low"), (2, "Medium"), (3, "High")];
const CHANGE_KIND: &[(i64, &str)] = &[
    (1, "Minor"),
    (2, "Standard"),
    (3, "Major"),
    (4, "Emergency"),
];

const TICKET_STATUS: &[(i64, &str)] = &[(2, "Open"), (3, "Pending"), (4, "Resolved"), (5, "Closed")];

const CHANGE_STATUS: &[(i64, &str)] = &[
    (1, "Open"),
    (2, "Planning"),
    (3, "Approval"),
    (4, "Pending Release"),
    (5, "Pending Review"),
    (6, "Closed"),
];

const CHANGE_RISK: &[(i64, &str)] = &[(1, "Low"), (2, "Medium"), (3, "High"), (4, "Very High")];

const PROBLEM_STATUS: &[(i64, &str)] = &[(1, "Open"), (2, "Change Requested"), (3, "Closed")];

const RELEASE_STATUS: &[(i64, &str)] = &[
    (1, "Open"),
    (2, "On Hold"),
    (3, "In Progress"),
    (4, "Incomplete"),
    (5, "Completed"),
];

const TASK_STATUS: &[(i64, &str)] = &[(1, "Open"), (2, "In Progress"), (3, "Completed")];

/// Code tables known to the connector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeTable {
    TicketStatus,
    TicketPriority,
    ChangeStatus,
    ChangePriority,
    ChangeImpact,
    ChangeRisk,
    ChangeType,
    ProblemStatus,
    ProblemPriority,
    ProblemImpact,
    ReleaseStatus,
    ReleasePriority,
    ReleaseType,
    TaskStatus,
}

impl CodeTable {
    pub const ALL: [CodeTable; 14] = [
        CodeTable::TicketStatus,
        CodeTable::TicketPriority,
        CodeTable::ChangeStatus,
        CodeTable::ChangePriority,
        CodeTable::ChangeImpact,
        CodeTable::ChangeRisk,
        CodeTable::ChangeType,
        CodeTable::ProblemStatus,
        CodeTable::ProblemPriority,
        CodeTable::ProblemImpact,
        CodeTable::ReleaseStatus,
        CodeTable::ReleasePriority,
        CodeTable::ReleaseType,
        CodeTable::TaskStatus,
    ];

    /// Documented codes and labels
    pub fn entries(self) -> &'static [(i64, &'static str)] {
        match self {
            CodeTable::TicketStatus => TICKET_STATUS,
            CodeTable::TicketPriority
            | CodeTable::ChangePriority
            | CodeTable::ProblemPriority
            | CodeTable::ReleasePriority => PRIORITY,
            CodeTable::ChangeStatus => CHANGE_STATUS,
            CodeTable::ChangeImpact | CodeTable::ProblemImpact => IMPACT,
            CodeTable::ChangeRisk => CHANGE_RISK,
            CodeTable::ChangeType | CodeTable::ReleaseType => CHANGE_KIND,
            CodeTable::ProblemStatus => PROBLEM_STATUS,
            CodeTable::ReleaseStatus => RELEASE_STATUS,
            CodeTable::TaskStatus => TASK_STATUS,
        }
    }

    /// Label for a code
    pub fn decode(self, code: Option<i64>) -> &'static str {
        code.and_then(|code| {
            self.entries()
                .iter()
                .find(|(c, _)| *c == code)
                .map(|(_, label)| *label)
        })
        .unwrap_or(UNKNOWN)
    }
}
