//! Tickets and their conversations, tasks and time entries

use super::itil::{task_columns, time_entry_columns};
use super::{GetBinding, ListBinding, ResourceDefinition};
use crate::schema::{CodeTable, ColumnSpec as C, KeyColumn, ResourceSchema};

pub static TICKET: ResourceDefinition = ResourceDefinition {
    schema: ResourceSchema {
        name: "freshservice_ticket",
        description: "Tickets raised in the Freshservice instance.",
        columns: &[
            C::int("id", "Unique ID of the ticket."),
            C::string("subject", "Subject of the ticket."),
            C::string("description", "HTML content of the ticket."),
            C::string("description_text", "Plain text content of the ticket."),
            C::int("requester_id", "User ID of the requester."),
            C::string("name", "Name of the requester."),
            C::string("email", "Email address of the requester."),
            C::string("phone", "Phone number of the requester."),
            C::int("status", "Status of the ticket."),
            C::decoded("status_desc", "status", CodeTable::TicketStatus, "Description of the ticket status."),
            C::int("priority", "Priority of the ticket."),
            C::decoded("priority_desc", "priority", CodeTable::TicketPriority, "Description of the ticket priority."),
            C::string("category", "Category of the ticket."),
            C::string("sub_category", "Sub-category of the ticket."),
            C::string("item_category", "Item category of the ticket."),
            C::string("type", "Kind of issue the ticket describes, e.g. Incident or Service Request."),
            C::int("urgency", "Urgency of the ticket."),
            C::int("impact", "Impact of the ticket."),
            C::int("responder_id", "ID of the agent the ticket is assigned to."),
            C::timestamp("fr_due_by", "Time the first response is due."),
            C::bool("fr_escalated", "True if the ticket was escalated for breaching the first response time."),
            C::timestamp("due_by", "Time the ticket is due to be resolved."),
            C::bool("is_escalated", "True if the ticket has been escalated for any reason."),
            C::bool("deleted", "True if the ticket has been deleted or trashed."),
            C::int("department_id", "ID of the department the ticket belongs to."),
            C::int("group_id", "ID of the group the ticket is assigned to."),
            C::bool("spam", "True if the ticket has been marked as spam."),
            C::int("source", "Channel through which the ticket was created."),
            C::json("tags", "Tags associated with the ticket."),
            C::json("attachments", "Attachments of the ticket."),
            C::timestamp("created_at", "Time the ticket was created."),
            C::timestamp("updated_at", "Time the ticket was last updated."),
        ],
        key_columns: &[
            KeyColumn::filter("email"),
            KeyColumn::filter("requester_id"),
            KeyColumn::filter("type"),
        ],
    },
    list: ListBinding::paged("tickets", "tickets"),
    get: Some(GetBinding::by_id("tickets/{{ id }}", "ticket")),
};

pub static TICKET_CONVERSATION: ResourceDefinition = ResourceDefinition {
    schema: ResourceSchema {
        name: "freshservice_ticket_conversation",
        description: "Conversation entries on a specific ticket.",
        columns: &[
            C::int("id", "Unique ID of the conversation."),
            C::int("user_id", "ID of the agent or user who added the conversation."),
            C::string("body", "Content of the conversation in HTML."),
            C::string("body_text", "Content of the conversation in plain text."),
            C::string("source", "Type of the conversation."),
            C::bool("private", "True if the conversation is private."),
            C::bool("incoming", "True if the conversation appears to come from outside the web portal."),
            C::string("support_email", "Email address the reply is sent from."),
            C::int("ticket_id", "ID of the ticket the conversation belongs to."),
            C::json("to_emails", "Addresses of agents or users notified about the conversation."),
            C::json("attachments", "Attachments of the conversation."),
            C::timestamp("created_at", "Time the conversation was created."),
            C::timestamp("updated_at", "Time the conversation was last updated."),
        ],
        key_columns: &[KeyColumn::parent("ticket_id")],
    },
    list: ListBinding::paged("tickets/{{ ticket_id }}/conversations", "conversations"),
    get: None,
};

pub static TICKET_TASK: ResourceDefinition = ResourceDefinition {
    schema: ResourceSchema {
        name: "freshservice_ticket_task",
        description: "Tasks associated with a specific ticket.",
        columns: task_columns!("ticket_id", "ticket", "due_by"),
        key_columns: &[KeyColumn::parent("ticket_id")],
    },
    list: ListBinding::paged("tickets/{{ ticket_id }}/tasks", "tasks"),
    get: None,
};

pub static TICKET_TIMEENTRY: ResourceDefinition = ResourceDefinition {
    schema: ResourceSchema {
        name: "freshservice_ticket_timeentry",
        description: "Time entries logged against a specific ticket.",
        columns: time_entry_columns!("ticket_id", "ticket"),
        key_columns: &[KeyColumn::parent("ticket_id")],
    },
    list: ListBinding::single("tickets/{{ ticket_id }}/time_entries", "time_entries"),
    get: None,
};
