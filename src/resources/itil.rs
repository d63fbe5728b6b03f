//! Changes, problems and releases with their notes, tasks and time entries

use super::{GetBinding, ListBinding, ResourceDefinition};
use crate::schema::{CodeTable, ColumnSpec as C, KeyColumn, ResourceSchema};

// Notes, tasks and time entries share their shape across parents; only the
// parent column differs.

macro_rules! note_columns {
    ($parent:literal, $what:literal) => {
        &[
            C::int("id", "Unique ID of the note."),
            C::int("user_id", "ID of the user who created the note."),
            C::string("body", "Body of the note in HTML."),
            C::string("body_text", "Body of the note in plain text."),
            C::json("notify_emails", "Addresses notifications are sent to."),
            C::timestamp("created_at", "Time the note was created."),
            C::timestamp("updated_at", "Time the note was last updated."),
            C::int($parent, concat!("ID of the ", $what, " this note belongs to.")).from_qual(),
        ]
    };
}

macro_rules! task_columns {
    ($parent:literal, $what:literal, $due:literal) => {
        &[
            C::int("id", "Unique ID of the task."),
            C::int("agent_id", "ID of the agent the task is assigned to."),
            C::int("status", "Status of the task."),
            C::decoded("status_desc", "status", CodeTable::TaskStatus, "Description of the task status."),
            C::timestamp($due, "Due date of the task."),
            C::int("notify_before", "Seconds before the due date at which a notification is sent."),
            C::string("title", "Title of the task."),
            C::string("description", "Description of the task."),
            C::int("group_id", "ID of the group the task is assigned to."),
            C::timestamp("created_at", "Time the task was created."),
            C::timestamp("updated_at", "Time the task was last updated."),
            C::timestamp("closed_at", "Time the task was closed."),
            C::int($parent, concat!("ID of the ", $what, " the task belongs to.")).from_qual(),
        ]
    };
}

macro_rules! time_entry_columns {
    ($parent:literal, $what:literal) => {
        &[
            C::int("id", "Unique ID of the time entry."),
            C::timestamp("start_time", "Time the entry was added, or the timer was last restarted."),
            C::timestamp("executed_at", "Time the timer was executed."),
            C::bool("timer_running", "True if the timer is currently running."),
            C::bool("billable", "True if the time entry is billable."),
            C::string("time_spent", "Total time spent, in hh:mm."),
            C::int("task_id", "ID of the task the time entry is assigned to."),
            C::int("agent_id", "ID of the agent the time entry is assigned to."),
            C::string("note", "Description of the time entry."),
            C::timestamp("created_at", "Time the time entry was created."),
            C::timestamp("updated_at", "Time the time entry was last updated."),
            C::int($parent, concat!("ID of the ", $what, " the time entry belongs to.")).from_qual(),
        ]
    };
}

pub(crate) use {note_columns, task_columns, time_entry_columns};

// ============================================================================
// Changes
// ============================================================================

pub static CHANGE: ResourceDefinition = ResourceDefinition {
    schema: ResourceSchema {
        name: "freshservice_change",
        description: "Changes raised in the Freshservice instance.",
        columns: &[
            C::int("id", "ID of the change."),
            C::int("agent_id", "ID of the agent the change is assigned to."),
            C::string("description", "HTML content of the change."),
            C::string("description_text", "Plain text content of the change."),
            C::int("requester_id", "User ID of the requester of the change."),
            C::int("group_id", "ID of the agent group the change is assigned to."),
            C::int("department_id", "ID of the department initiating the change."),
            C::int("priority", "Priority of the change."),
            C::decoded("priority_desc", "priority", CodeTable::ChangePriority, "Description of the change priority."),
            C::int("status", "Status of the change."),
            C::decoded("status_desc", "status", CodeTable::ChangeStatus, "Description of the change status."),
            C::int("impact", "Impact of the change."),
            C::decoded("impact_desc", "impact", CodeTable::ChangeImpact, "Description of the change impact."),
            C::int("risk", "Risk of the change."),
            C::decoded("risk_desc", "risk", CodeTable::ChangeRisk, "Description of the change risk."),
            C::int("type", "Type of the change.").renamed("change_type"),
            C::decoded("type_desc", "change_type", CodeTable::ChangeType, "Description of the change type."),
            C::int("approval_status", "Approval status of the change."),
            C::timestamp("planned_start_date", "Planned start of the change."),
            C::timestamp("planned_end_date", "Planned end of the change."),
            C::string("subject", "Subject of the change."),
            C::string("category", "Category of the change."),
            C::string("sub_category", "Sub-category of the change."),
            C::string("item_category", "Item category of the change."),
            C::timestamp("created_at", "Time the change was created."),
            C::timestamp("updated_at", "Time the change was last updated."),
        ],
        key_columns: &[KeyColumn::filter("requester_id")],
    },
    list: ListBinding::paged("changes", "changes"),
    get: Some(GetBinding::by_id("changes/{{ id }}", "change")),
};

pub static CHANGE_NOTE: ResourceDefinition = ResourceDefinition {
    schema: ResourceSchema {
        name: "freshservice_change_note",
        description: "Notes on a specific change.",
        columns: note_columns!("change_id", "change"),
        key_columns: &[KeyColumn::parent("change_id")],
    },
    list: ListBinding::single("changes/{{ change_id }}/notes", "notes"),
    get: None,
};

// ============================================================================
// Problems
// ============================================================================

pub static PROBLEM: ResourceDefinition = ResourceDefinition {
    schema: ResourceSchema {
        name: "freshservice_problem",
        description: "Problems raised in the Freshservice instance.",
        columns: &[
            C::int("id", "Unique ID of the problem."),
            C::int("agent_id", "User ID of the agent the problem is assigned to."),
            C::int("requester_id", "User ID of the requester."),
            C::int("group_id", "ID of the agent group the problem is assigned to."),
            C::string("description", "HTML content of the problem."),
            C::string("description_text", "Plain text content of the problem."),
            C::int("priority", "Priority of the problem."),
            C::decoded("priority_desc", "priority", CodeTable::ProblemPriority, "Description of the problem priority."),
            C::int("status", "Status of the problem."),
            C::decoded("status_desc", "status", CodeTable::ProblemStatus, "Description of the problem status."),
            C::int("impact", "Impact of the problem."),
            C::decoded("impact_desc", "impact", CodeTable::ProblemImpact, "Description of the problem impact."),
            C::bool("known_error", "True if the problem is a known error."),
            C::string("subject", "Subject of the problem."),
            C::timestamp("due_by", "Time the problem is due."),
            C::int("department_id", "ID of the department initiating the problem."),
            C::string("category", "Category of the problem."),
            C::string("sub_category", "Sub-category of the problem."),
            C::string("item_category", "Item category of the problem."),
            C::int("associated_change", "ID of the change associated with the problem."),
            C::string("problem_cause", "Cause of the problem.")
                .at(&["analysis_fields", "problem_cause", "description_text"]),
            C::string("problem_symptom", "Symptom of the problem.")
                .at(&["analysis_fields", "problem_symptom", "description_text"]),
            C::string("problem_impact", "Impact of the problem as free text.")
                .at(&["analysis_fields", "problem_impact", "description_text"]),
            C::timestamp("created_at", "Time the problem was created."),
            C::timestamp("updated_at", "Time the problem was last updated."),
        ],
        key_columns: &[],
    },
    list: ListBinding::paged("problems", "problems"),
    get: Some(GetBinding::by_id("problems/{{ id }}", "problem")),
};

pub static PROBLEM_NOTE: ResourceDefinition = ResourceDefinition {
    schema: ResourceSchema {
        name: "freshservice_problem_note",
        description: "Notes on a specific problem.",
        columns: note_columns!("problem_id", "problem"),
        key_columns: &[KeyColumn::parent("problem_id")],
    },
    list: ListBinding::single("problems/{{ problem_id }}/notes", "notes"),
    get: None,
};

pub static PROBLEM_TASK: ResourceDefinition = ResourceDefinition {
    schema: ResourceSchema {
        name: "freshservice_problem_task",
        description: "Tasks associated with a specific problem.",
        columns: task_columns!("problem_id", "problem", "due_date"),
        key_columns: &[KeyColumn::parent("problem_id")],
    },
    list: ListBinding::paged("problems/{{ problem_id }}/tasks", "tasks"),
    get: None,
};

pub static PROBLEM_TIMEENTRY: ResourceDefinition = ResourceDefinition {
    schema: ResourceSchema {
        name: "freshservice_problem_timeentry",
        description: "Time entries logged against a specific problem.",
        columns: time_entry_columns!("problem_id", "problem"),
        key_columns: &[KeyColumn::parent("problem_id")],
    },
    list: ListBinding::single("problems/{{ problem_id }}/time_entries", "time_entries"),
    get: None,
};

// ============================================================================
// Releases
// ============================================================================

pub static RELEASE: ResourceDefinition = ResourceDefinition {
    schema: ResourceSchema {
        name: "freshservice_release",
        description: "Releases planned in the Freshservice instance.",
        columns: &[
            C::int("id", "Unique ID of the release."),
            C::int("agent_id", "User ID of the agent the release is assigned to."),
            C::int("group_id", "ID of the agent group the release is assigned to."),
            C::int("priority", "Priority of the release."),
            C::decoded("priority_desc", "priority", CodeTable::ReleasePriority, "Description of the release priority."),
            C::int("status", "Status of the release."),
            C::decoded("status_desc", "status", CodeTable::ReleaseStatus, "Description of the release status."),
            C::int("release_type", "Type of the release."),
            C::decoded("release_type_desc", "release_type", CodeTable::ReleaseType, "Description of the release type."),
            C::string("subject", "Subject of the release."),
            C::string("description", "HTML content of the release."),
            C::timestamp("planned_start_date", "Planned start of the release."),
            C::timestamp("planned_end_date", "Planned end of the release."),
            C::timestamp("work_start_date", "Time work on the release started."),
            C::timestamp("work_end_date", "Time work on the release ended."),
            C::int("department_id", "ID of the department initiating the release."),
            C::string("category", "Category of the release."),
            C::string("sub_category", "Sub-category of the release."),
            C::string("item_category", "Item category of the release."),
            C::json("associated_changes", "IDs of changes associated with the release."),
            C::json("associated_assets", "IDs of assets associated with the release."),
            C::timestamp("created_at", "Time the release was created."),
            C::timestamp("updated_at", "Time the release was last updated."),
        ],
        key_columns: &[],
    },
    list: ListBinding::paged("releases", "releases"),
    get: Some(GetBinding::by_id("releases/{{ id }}", "release")),
};

pub static RELEASE_NOTE: ResourceDefinition = ResourceDefinition {
    schema: ResourceSchema {
        name: "freshservice_release_note",
        description: "Notes on a specific release.",
        columns: note_columns!("release_id", "release"),
        key_columns: &[KeyColumn::parent("release_id")],
    },
    list: ListBinding::single("releases/{{ release_id }}/notes", "notes"),
    get: None,
};

pub static RELEASE_TASK: ResourceDefinition = ResourceDefinition {
    schema: ResourceSchema {
        name: "freshservice_release_task",
        description: "Tasks associated with a specific release.",
        columns: task_columns!("release_id", "release", "due_date"),
        key_columns: &[KeyColumn::parent("release_id")],
    },
    list: ListBinding::paged("releases/{{ release_id }}/tasks", "tasks"),
    get: None,
};

pub static RELEASE_TIMEENTRY: ResourceDefinition = ResourceDefinition {
    schema: ResourceSchema {
        name: "freshservice_release_timeentry",
        description: "Time entries logged against a specific release.",
        columns: time_entry_columns!("release_id", "release"),
        key_columns: &[KeyColumn::parent("release_id")],
    },
    list: ListBinding::single("releases/{{ release_id }}/time_entries", "time_entries"),
    get: None,
};
