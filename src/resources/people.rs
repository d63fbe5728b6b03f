//! Agents, requesters and the organisation they belong to

use super::{GetBinding, ListBinding, ResourceDefinition};
use crate::schema::{ColumnSpec as C, KeyColumn, ResourceSchema};

pub static AGENT: ResourceDefinition = ResourceDefinition {
    schema: ResourceSchema {
        name: "freshservice_agent",
        description: "Agents (operators) of the Freshservice instance.",
        columns: &[
            C::int("id", "User ID of the agent."),
            C::string("first_name", "First name of the agent."),
            C::string("last_name", "Last name of the agent."),
            C::bool("occasional", "True if the agent is an occasional agent, false for a full-time agent."),
            C::bool("active", "True if the agent is active (enabled)."),
            C::string("job_title", "Job title of the agent."),
            C::string("email", "Email address of the agent."),
            C::string("work_phone_number", "Work phone number of the agent."),
            C::string("mobile_phone_number", "Mobile phone number of the agent."),
            C::int("reporting_manager_id", "User ID of the agent's reporting manager."),
            C::string("address", "Address of the agent."),
            C::string("time_zone", "Time zone associated with the agent."),
            C::string("time_format", "Time format chosen by the agent (12h or 24h)."),
            C::string("language", "Language used by the agent, `en` by default."),
            C::int("location_id", "ID of the location associated with the agent."),
            C::string("background_information", "Background information of the agent."),
            C::int("scoreboard_level_id", "Arcade level of the agent: 1 Beginner up to 6 Guru."),
            C::json("member_of", "IDs of the groups the agent is a member of."),
            C::json("roles", "Roles assigned to the agent with their assignment scope and groups."),
            C::json("department_ids", "IDs of the departments associated with the agent."),
            C::timestamp("last_login_at", "Time of the agent's last successful login."),
            C::timestamp("last_active_at", "Time of the agent's most recent activity."),
            C::bool("has_logged_in", "True if the user has logged in to Freshservice at least once."),
            C::timestamp("created_at", "Time the agent was created."),
            C::timestamp("updated_at", "Time the agent was last updated."),
        ],
        key_columns: &[KeyColumn::filter("email"), KeyColumn::filter("active")],
    },
    list: ListBinding::paged("agents", "agents"),
    get: Some(GetBinding::by_id("agents/{{ id }}", "agent")),
};

pub static AGENT_ROLE: ResourceDefinition = ResourceDefinition {
    schema: ResourceSchema {
        name: "freshservice_agent_role",
        description: "Roles that can be assigned to agents.",
        columns: &[
            C::int("id", "Unique ID of the role."),
            C::string("name", "Name of the role."),
            C::string("description", "Description of the role."),
            C::bool("default", "True if it is a default role."),
            C::timestamp("created_at", "Time the role was created."),
            C::timestamp("updated_at", "Time the role was last updated."),
        ],
        key_columns: &[],
    },
    list: ListBinding::paged("roles", "roles"),
    get: Some(GetBinding::by_id("roles/{{ id }}", "role")),
};

pub static REQUESTER: ResourceDefinition = ResourceDefinition {
    schema: ResourceSchema {
        name: "freshservice_requester",
        description: "Requesters (users) of the Freshservice instance.",
        columns: &[
            C::int("id", "User ID of the requester."),
            C::string("first_name", "First name of the requester."),
            C::string("last_name", "Last name of the requester."),
            C::string("job_title", "Job title of the requester."),
            C::string("email", "Primary email address of the requester."),
            C::json("secondary_emails", "Additional email addresses of the requester."),
            C::string("work_phone_number", "Work phone number of the requester."),
            C::string("mobile_phone_number", "Mobile phone number of the requester."),
            C::json("department_ids", "IDs of the departments associated with the requester."),
            C::bool("active", "True if the requester is active (enabled)."),
            C::string("address", "Address of the requester."),
            C::string("time_zone", "Time zone associated with the requester."),
            C::string("time_format", "Time format chosen by the requester (12h or 24h)."),
            C::int("reporting_manager_id", "User ID of the requester's reporting manager."),
            C::string("language", "Language used by the requester, `en` by default."),
            C::int("location_id", "ID of the location associated with the requester."),
            C::string("background_information", "Background information of the requester."),
            C::bool("has_logged_in", "True if the user has logged in to Freshservice at least once."),
            C::bool("is_agent", "True if the user is also an agent."),
            C::timestamp("created_at", "Time the requester was created."),
            C::timestamp("updated_at", "Time the requester was last updated."),
        ],
        key_columns: &[KeyColumn::filter("email")],
    },
    list: ListBinding::paged("requesters", "requesters"),
    get: Some(GetBinding::by_id("requesters/{{ id }}", "requester")),
};

pub static DEPARTMENT: ResourceDefinition = ResourceDefinition {
    schema: ResourceSchema {
        name: "freshservice_department",
        description: "Departments of the organisation.",
        columns: &[
            C::int("id", "Unique ID of the department."),
            C::string("name", "Name of the department."),
            C::string("description", "Description of the department."),
            C::int("head_user_id", "ID of the agent or requester heading the department."),
            C::int("prime_user_id", "ID of the agent or requester serving as the prime user."),
            C::json("domains", "Email domains associated with the department."),
            C::timestamp("created_at", "Time the department was created."),
            C::timestamp("updated_at", "Time the department was last updated."),
        ],
        key_columns: &[],
    },
    list: ListBinding::paged("departments", "departments"),
    get: Some(GetBinding::by_id("departments/{{ id }}", "department")),
};

pub static LOCATION: ResourceDefinition = ResourceDefinition {
    schema: ResourceSchema {
        name: "freshservice_location",
        description: "Locations registered in the Freshservice instance.",
        columns: &[
            C::int("id", "ID of the location."),
            C::string("name", "Name of the location."),
            C::int("parent_location_id", "ID of the parent location."),
            C::int("primary_contact_id", "User ID of the primary contact."),
            C::string("line1", "Address line 1.").at(&["address", "line1"]),
            C::string("line2", "Address line 2.").at(&["address", "line2"]),
            C::string("city", "Name of the city.").at(&["address", "city"]),
            C::string("state", "Name of the state.").at(&["address", "state"]),
            C::string("zipcode", "Zip or postal code.").at(&["address", "zipcode"]),
            C::string("country", "Name of the country.").at(&["address", "country"]),
            C::timestamp("created_at", "Time the location was created."),
            C::timestamp("updated_at", "Time the location was last updated."),
        ],
        key_columns: &[],
    },
    list: ListBinding::paged("locations", "locations"),
    get: Some(GetBinding::by_id("locations/{{ id }}", "location")),
};

pub static BUSINESS_HOUR: ResourceDefinition = ResourceDefinition {
    schema: ResourceSchema {
        name: "freshservice_business_hour",
        description: "Business hours configurations of the Freshservice instance.",
        columns: &[
            C::int("id", "Unique ID of the business hours configuration."),
            C::string("name", "Name of the business hours configuration."),
            C::string("description", "Description of the business hours configuration."),
            C::bool("is_default", "True for the default configuration."),
            C::string("time_zone", "Time zone the configuration operates in."),
            C::json("service_desk_hours", "Start and end of the workday for each day of the week."),
            C::json("list_of_holidays", "Dates and names of holidays for the year."),
            C::timestamp("created_at", "Time the configuration was created."),
            C::timestamp("updated_at", "Time the configuration was last updated."),
        ],
        key_columns: &[],
    },
    list: ListBinding::paged("business_hours", "business_hours"),
    get: Some(GetBinding::by_id("business_hours/{{ id }}", "business_hours")),
};

pub static ANNOUNCEMENT: ResourceDefinition = ResourceDefinition {
    schema: ResourceSchema {
        name: "freshservice_announcement",
        description: "Announcements published to agents and requesters.",
        columns: &[
            C::int("id", "Unique ID of the announcement."),
            C::int("created_by", "ID of the agent that created the announcement."),
            C::string("state", "State of the announcement: active, archived or scheduled."),
            C::string("title", "Title of the announcement."),
            C::string("body", "Body of the announcement."),
            C::string("body_html", "Body of the announcement in HTML."),
            C::timestamp("visible_from", "Time the announcement becomes active."),
            C::timestamp("visible_to", "Time until which the announcement is active."),
            C::string("visibility", "Audience: everyone, agents_only or agents_and_groups."),
            C::json("departments", "IDs of departments that can view the announcement."),
            C::json("groups", "IDs of groups that can view the announcement."),
            C::bool("is_read", "True if the current user has read the announcement."),
            C::bool("send_email", "True if the announcement is also sent by email."),
            C::json("additional_emails", "Additional addresses the announcement is sent to."),
            C::timestamp("created_at", "Time the announcement was created."),
            C::timestamp("updated_at", "Time the announcement was last updated."),
        ],
        key_columns: &[KeyColumn::filter("state")],
    },
    list: ListBinding::paged("announcements", "announcements"),
    get: Some(GetBinding::by_id("announcements/{{ id }}", "announcement")),
};
