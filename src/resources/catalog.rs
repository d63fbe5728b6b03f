//! Service catalog, SLA policies and the knowledge base

use super::{GetBinding, ListBinding, ResourceDefinition};
use crate::schema::{ColumnSpec as C, KeyColumn, ResourceSchema};

pub static SERVICE: ResourceDefinition = ResourceDefinition {
    schema: ResourceSchema {
        name: "freshservice_service",
        description: "Service items in the service catalog.",
        columns: &[
            C::int("id", "Unique ID of the service item."),
            C::string("name", "Name of the service item."),
            C::string("description", "Description of the service item."),
            C::string("short_description", "Short description of the service item."),
            C::int("delivery_time", "Estimated delivery time in hours."),
            C::int("display_id", "ID of the service item specific to the account."),
            C::int("category_id", "ID of the service item's category."),
            C::int("product_id", "ID of the product mapped to the item."),
            C::int("quantity", "Quantity set against the service item."),
            C::int("item_type", "1 for a normal item, 2 for a loaner item."),
            C::int("ci_type_id", "ID of the asset type associated with the product."),
            C::int("visibility", "1 for draft, 2 for published."),
            C::int("group_visibility", "1 if visible to all requesters, 2 for restricted visibility."),
            C::bool("deleted", "True if the service item is deleted."),
            C::bool("cost_visibility", "True if the cost is visible to the requester."),
            C::bool("delivery_time_visibility", "True if the delivery time is visible to the requester."),
            C::bool("botified", "True if the service item is bot-ready."),
            C::bool("allow_attachments", "True if the requester may attach a file."),
            C::bool("allow_quantity", "True if the requester may request more than one."),
            C::bool("is_bundle", "True if the service item contains child items."),
            C::bool("create_child", "True if child items become separate service requests."),
            C::double("cost", "Cost of the service item."),
            C::timestamp("created_at", "Time the service item was created."),
            C::timestamp("updated_at", "Time the service item was last updated."),
        ],
        key_columns: &[],
    },
    list: ListBinding::single("service_catalog/items", "service_items"),
    get: Some(GetBinding::by_id("service_catalog/items/{{ id }}", "service_item")),
};

pub static SLA_POLICY: ResourceDefinition = ResourceDefinition {
    schema: ResourceSchema {
        name: "freshservice_sla_policy",
        description: "Service level agreement policies.",
        columns: &[
            C::int("id", "Unique ID of the SLA policy."),
            C::string("name", "Name of the SLA policy."),
            C::string("description", "Short description of the SLA policy."),
            C::int("position", "Rank of the SLA policy among the others."),
            C::bool("is_default", "True for the default SLA policy."),
            C::bool("active", "True if the SLA policy is active."),
            C::bool("deleted", "True if the SLA policy is deleted."),
            C::json("sla_targets", "Targets of the SLA policy."),
            C::string("category", "Category the policy applies to.").at(&["applicable_to", "category"]),
            C::string("sub_category", "Sub-category the policy applies to.")
                .at(&["applicable_to", "sub_category"]),
            C::string("item_category", "Item category the policy applies to.")
                .at(&["applicable_to", "item_category"]),
            C::json("ticket_type", "Ticket types the policy applies to.")
                .at(&["applicable_to", "ticket_type"]),
            C::json("service_items", "IDs of service items the policy applies to.")
                .at(&["applicable_to", "service_items"]),
            C::json("service_categories", "IDs of service categories the policy applies to.")
                .at(&["applicable_to", "service_categories"]),
            C::json("department_id", "IDs of departments the policy applies to.")
                .at(&["applicable_to", "department_id"]),
            C::json("group_id", "IDs of groups the policy applies to.").at(&["applicable_to", "group_id"]),
            C::json("source", "IDs of sources the policy applies to.").at(&["applicable_to", "source"]),
            C::timestamp("created_at", "Time the SLA policy was created."),
            C::timestamp("updated_at", "Time the SLA policy was last updated."),
        ],
        key_columns: &[],
    },
    list: ListBinding::single("sla_policies", "sla_policies"),
    get: None,
};

pub static SOLUTION_ARTICLE: ResourceDefinition = ResourceDefinition {
    schema: ResourceSchema {
        name: "freshservice_solution_article",
        description: "Knowledge base solution articles.",
        columns: &[
            C::int("id", "Unique ID of the article."),
            C::string("title", "Title of the article."),
            C::string("description", "Description of the article."),
            C::int("position", "Rank of the article in the article listing."),
            C::int("article_type", "Type of the article: 1 permanent, 2 workaround."),
            C::int("folder_id", "ID of the folder the article is listed under."),
            C::int("category_id", "ID of the category the article belongs to."),
            C::int("status", "Status of the article: 1 draft, 2 published."),
            C::int("approval_status", "Approval status of the article."),
            C::int("thumbs_up", "Number of up-votes."),
            C::int("thumbs_down", "Number of down-votes."),
            C::int("agent_id", "ID of the user who created the article."),
            C::int("views", "Number of page visits."),
            C::json("tags", "Tags associated with the article."),
            C::json("keywords", "Keywords associated with the article."),
            C::string("url", "External URL of the article."),
            C::timestamp("review_date", "Time the article is due for review."),
            C::timestamp("created_at", "Time the article was created."),
            C::timestamp("updated_at", "Time the article was last updated."),
        ],
        key_columns: &[KeyColumn::filter("folder_id")],
    },
    list: ListBinding::paged("solutions/articles", "articles"),
    get: Some(GetBinding::by_id("solutions/articles/{{ id }}", "article")),
};

pub static SOLUTION_CATEGORY: ResourceDefinition = ResourceDefinition {
    schema: ResourceSchema {
        name: "freshservice_solution_category",
        description: "Knowledge base solution categories.",
        columns: &[
            C::int("id", "Unique ID of the category."),
            C::string("name", "Name of the category."),
            C::string("description", "Description of the category."),
            C::int("position", "Rank of the category in the category listing."),
            C::bool("default_category", "True for the default category."),
            C::json("visible_in_portals", "IDs of portals the category is visible in."),
            C::timestamp("created_at", "Time the category was created."),
            C::timestamp("updated_at", "Time the category was last updated."),
        ],
        key_columns: &[KeyColumn::lookup("id")],
    },
    list: ListBinding::paged("solutions/categories", "categories")
        .with_shortcut(GetBinding::by_id("solutions/categories/{{ id }}", "category")),
    get: None,
};

pub static SOLUTION_FOLDER: ResourceDefinition = ResourceDefinition {
    schema: ResourceSchema {
        name: "freshservice_solution_folder",
        description: "Knowledge base solution folders.",
        columns: &[
            C::int("id", "Unique ID of the folder."),
            C::string("name", "Name of the folder."),
            C::string("description", "Description of the folder."),
            C::int("position", "Rank of the folder in the folder listing."),
            C::bool("default_category", "True for the default folder."),
            C::int("category_id", "ID of the category the folder is listed under."),
            C::int("visibility", "Accessibility of the folder."),
            C::json("department_ids", "IDs of departments the folder is visible to."),
            C::json("group_ids", "IDs of agent groups the folder is visible to."),
            C::json("requester_group_ids", "IDs of requester groups the folder is visible to."),
            C::json("manage_by_group_ids", "IDs of groups managing the folder."),
            C::timestamp("created_at", "Time the folder was created."),
            C::timestamp("updated_at", "Time the folder was last updated."),
        ],
        key_columns: &[KeyColumn::lookup("id")],
    },
    list: ListBinding::paged("solutions/folders", "folders")
        .with_shortcut(GetBinding::by_id("solutions/folders/{{ id }}", "folder")),
    get: None,
};
