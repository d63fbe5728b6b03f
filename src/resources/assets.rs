//! Assets, software, and the procurement records around them

use super::{GetBinding, ListBinding, ResourceDefinition};
use crate::schema::{ColumnSpec as C, KeyColumn, ResourceSchema};

pub static ASSET: ResourceDefinition = ResourceDefinition {
    schema: ResourceSchema {
        name: "freshservice_asset",
        description: "Assets stored in the Freshservice instance.",
        columns: &[
            C::int("id", "Unique ID of the asset."),
            C::int("display_id", "Display ID of the asset."),
            C::string("name", "Name of the asset."),
            C::string("description", "Description of the asset."),
            C::int("asset_type_id", "ID of the asset type."),
            C::string("asset_tag", "Asset tag of the asset."),
            C::string("impact", "Impact of the asset."),
            C::string("author_type", "Whether the asset was created by a user or by discovery (Probe or Agent)."),
            C::string("usage_type", "Usage type of the asset (Loaner or Permanent)."),
            C::int("user_id", "ID of the user the asset is used by."),
            C::int("location_id", "ID of the associated location."),
            C::int("department_id", "ID of the associated department."),
            C::int("agent_id", "ID of the agent managing the asset."),
            C::int("group_id", "ID of the agent group managing the asset."),
            C::timestamp("assigned_on", "Time the asset was assigned."),
            C::timestamp("created_at", "Time the asset was created."),
            C::timestamp("updated_at", "Time the asset was last updated."),
        ],
        key_columns: &[],
    },
    list: ListBinding::paged("assets", "assets"),
    get: Some(GetBinding::new("display_id", "assets/{{ display_id }}", "asset")),
};

pub static ASSET_COMPONENT: ResourceDefinition = ResourceDefinition {
    schema: ResourceSchema {
        name: "freshservice_asset_component",
        description: "Components of a specific asset.",
        columns: &[
            C::int("asset_display_id", "Display ID of the parent asset.").from_qual(),
            C::int("id", "Unique ID of the component."),
            C::string("component_type", "Type of the component, e.g. Processor or Memory."),
            C::json("component_data", "Details of the component."),
            C::timestamp("created_at", "Time the component was created."),
            C::timestamp("updated_at", "Time the component was last updated."),
        ],
        key_columns: &[KeyColumn::parent("asset_display_id")],
    },
    list: ListBinding::single("assets/{{ asset_display_id }}/components", "components"),
    get: None,
};

pub static ASSET_CONTRACT: ResourceDefinition = ResourceDefinition {
    schema: ResourceSchema {
        name: "freshservice_asset_contract",
        description: "Contracts covering a specific asset.",
        columns: &[
            C::int("asset_display_id", "Display ID of the parent asset.").from_qual(),
            C::int("id", "Contract ID specific to the account."),
            C::string("contract_id", "Unique contract number."),
            C::string("contract_type", "Type of the contract, e.g. Lease or Maintenance."),
            C::string("contract_name", "Subject or title of the contract."),
            C::string("contract_status", "Status of the contract, e.g. Active or Draft."),
        ],
        key_columns: &[KeyColumn::parent("asset_display_id")],
    },
    list: ListBinding::single("assets/{{ asset_display_id }}/contracts", "contracts"),
    get: None,
};

pub static ASSET_TYPE: ResourceDefinition = ResourceDefinition {
    schema: ResourceSchema {
        name: "freshservice_asset_type",
        description: "Asset types defined in the Freshservice instance.",
        columns: &[
            C::int("id", "Unique ID of the asset type."),
            C::string("name", "Name of the asset type."),
            C::string("description", "Short description of the asset type."),
            C::int("parent_asset_type_id", "ID of the parent asset type."),
            C::bool("visible", "True if the default asset type is visible."),
            C::timestamp("created_at", "Time the asset type was created."),
            C::timestamp("updated_at", "Time the asset type was last updated."),
        ],
        key_columns: &[],
    },
    list: ListBinding::paged("asset_types", "asset_types"),
    get: Some(GetBinding::by_id("asset_types/{{ id }}", "asset_type")),
};

pub static PRODUCT: ResourceDefinition = ResourceDefinition {
    schema: ResourceSchema {
        name: "freshservice_product",
        description: "Products in the Freshservice product catalog.",
        columns: &[
            C::int("id", "Unique ID of the product."),
            C::string("name", "Name of the product."),
            C::string("description", "Description of the product in HTML."),
            C::string("description_text", "Description of the product in plain text."),
            C::int("asset_type_id", "ID of the asset type."),
            C::string("manufacturer", "Manufacturer of the product."),
            C::string("status", "Status of the product: In Production, In Pipeline or Retired."),
            C::string("mode_of_procurement", "Mode of procurement: Buy, Lease or Both."),
            C::int("depreciation_type_id", "ID of the depreciation type."),
            C::timestamp("created_at", "Time the product was created."),
            C::timestamp("updated_at", "Time the product was last updated."),
        ],
        key_columns: &[],
    },
    list: ListBinding::paged("products", "products"),
    get: Some(GetBinding::by_id("products/{{ id }}", "product")),
};

pub static VENDOR: ResourceDefinition = ResourceDefinition {
    schema: ResourceSchema {
        name: "freshservice_vendor",
        description: "Vendors stored in the Freshservice instance.",
        columns: &[
            C::int("id", "Unique ID of the vendor."),
            C::string("name", "Name of the vendor."),
            C::string("description", "Description of the vendor."),
            C::int("primary_contact_id", "User ID of the primary contact."),
            C::string("line1", "Address line 1.").at(&["address", "line1"]),
            C::string("city", "Name of the city.").at(&["address", "city"]),
            C::string("state", "Name of the state.").at(&["address", "state"]),
            C::string("zipcode", "Zip or postal code.").at(&["address", "zipcode"]),
            C::string("country", "Name of the country.").at(&["address", "country"]),
            C::timestamp("created_at", "Time the vendor was created."),
            C::timestamp("updated_at", "Time the vendor was last updated."),
        ],
        key_columns: &[],
    },
    list: ListBinding::paged("vendors", "vendors"),
    get: Some(GetBinding::by_id("vendors/{{ id }}", "vendor")),
};

pub static CONTRACT: ResourceDefinition = ResourceDefinition {
    schema: ResourceSchema {
        name: "freshservice_contract",
        description: "Contracts held with vendors.",
        columns: &[
            C::int("id", "Unique ID of the contract."),
            C::string("name", "Name of the contract."),
            C::string("description", "Description of the contract."),
            C::int("vendor_id", "ID of the vendor."),
            C::bool("auto_renew", "True if the contract renews automatically."),
            C::bool("notify_expiry", "True if expiry notifications are configured."),
            C::int("notify_before", "Days before expiry at which notifications are sent."),
            C::int("approver_id", "ID of the agent who approves the contract."),
            C::timestamp("start_date", "Start date of the contract."),
            C::timestamp("end_date", "End date of the contract."),
            C::double("cost", "Cost of the contract."),
            C::string("status", "Status of the contract."),
            C::string("contract_number", "Unique reference number of the contract."),
            C::int("contract_type_id", "ID of the contract type."),
            C::int("visible_to_id", "ID of the agent group the contract is visible to."),
            C::json("notify_to", "Email addresses notified of the contract's expiry."),
            C::bool("expiry_notified", "True if the expiry notification has been sent."),
            C::int("requester_id", "ID of the user who created or renewed the contract."),
            C::int("delegatee_id", "ID of the agent the approval is delegated to."),
            C::timestamp("created_at", "Time the contract was created."),
            C::timestamp("updated_at", "Time the contract was last updated."),
        ],
        key_columns: &[],
    },
    list: ListBinding::paged("contracts", "contracts"),
    get: Some(GetBinding::by_id("contracts/{{ id }}", "contract")),
};

pub static CONTRACT_TYPE: ResourceDefinition = ResourceDefinition {
    schema: ResourceSchema {
        name: "freshservice_contract_type",
        description: "Contract types defined in the Freshservice instance.",
        columns: &[
            C::int("id", "Unique ID of the contract type."),
            C::string("name", "Name of the contract type."),
            C::string("description", "Description of the contract type."),
            C::bool("needs_approval", "True if contracts of this type need approval."),
            C::bool("is_default", "True for a default (rather than custom) type."),
            C::timestamp("created_at", "Time the contract type was created."),
            C::timestamp("updated_at", "Time the contract type was last updated."),
        ],
        key_columns: &[],
    },
    list: ListBinding::single("contract_types", "contract_types"),
    get: None,
};

pub static PURCHASE_ORDER: ResourceDefinition = ResourceDefinition {
    schema: ResourceSchema {
        name: "freshservice_purchase_order",
        description: "Purchase orders raised in the Freshservice instance.",
        columns: &[
            C::int("id", "Unique ID of the purchase order."),
            C::string("name", "Title of the purchase order."),
            C::string("po_number", "Unique purchase order number."),
            C::int("vendor_id", "ID of the vendor the order is placed with."),
            C::string("vendor_details", "Details of the vendor the order is placed with."),
            C::timestamp("expected_delivery_date", "Expected delivery date."),
            C::int("status", "Status of the purchase order."),
            C::string("shipping_address", "Address the order is shipped to."),
            C::string("billing_address", "Address the order is billed to."),
            C::bool("billing_same_as_shipping", "True if the billing address equals the shipping address."),
            C::int("created_by", "ID of the agent who created the purchase order."),
            C::int("department_id", "ID of the department."),
            C::string("currency_code", "Currency of the transaction."),
            C::double("conversion_rate", "Rate converting the order currency to the helpdesk currency."),
            C::double("discount_percentage", "Discount on the order, in percent."),
            C::double("tax_percentage", "Tax on the order, in percent."),
            C::double("shopping_cost", "Total cost of shipping the order.").renamed("shipping_cost"),
            C::json("purchase_items", "Items to be ordered."),
            C::timestamp("created_at", "Time the purchase order was created."),
            C::timestamp("updated_at", "Time the purchase order was last updated."),
        ],
        key_columns: &[],
    },
    list: ListBinding::paged("purchase_orders", "purchase_orders"),
    get: Some(GetBinding::by_id("purchase_orders/{{ id }}", "purchase_order")),
};

pub static SOFTWARE: ResourceDefinition = ResourceDefinition {
    schema: ResourceSchema {
        name: "freshservice_software",
        description: "Software applications tracked in the Freshservice instance.",
        columns: &[
            C::int("id", "Unique ID of the software."),
            C::string("name", "Name of the software."),
            C::string("description", "Description of the software."),
            C::string("application_type", "Type of the software."),
            C::string("status", "Status of the software."),
            C::string("category", "Category of the software."),
            C::string("notes", "Notes about the software."),
            C::int("user_count", "Number of users of the software."),
            C::int("installation_count", "Number of devices the software is installed on."),
            C::int("publisher_id", "ID of the vendor publishing the software."),
            C::int("managed_by_id", "ID of the user or agent managing the software."),
            C::timestamp("created_at", "Time the software record was created."),
            C::timestamp("updated_at", "Time the software record was last updated."),
        ],
        key_columns: &[],
    },
    list: ListBinding::paged("applications", "applications"),
    get: Some(GetBinding::by_id("applications/{{ id }}", "application")),
};

pub static SOFTWARE_INSTALLATION: ResourceDefinition = ResourceDefinition {
    schema: ResourceSchema {
        name: "freshservice_software_installation",
        description: "Installations of a specific software application.",
        columns: &[
            C::int("id", "Unique ID of the installation."),
            C::int("installation_machine_id", "Display ID of the device the software is installed on."),
            C::string("installation_path", "Path the software is installed at."),
            C::string("version", "Installed version."),
            C::int("user_id", "ID of the user of the device."),
            C::int("department_id", "ID of the department the device belongs to."),
            C::timestamp("installation_date", "Time the software was installed."),
            C::timestamp("created_at", "Time the installation was created."),
            C::timestamp("updated_at", "Time the installation was last updated."),
            C::int("software_id", "ID of the software this installation belongs to.").from_qual(),
        ],
        key_columns: &[KeyColumn::parent("software_id")],
    },
    list: ListBinding::single("applications/{{ software_id }}/installations", "installations"),
    get: None,
};

pub static SOFTWARE_USER: ResourceDefinition = ResourceDefinition {
    schema: ResourceSchema {
        name: "freshservice_software_user",
        description: "Users assigned to a specific software application.",
        columns: &[
            C::int("id", "Unique ID of the software and user combination."),
            C::int("user_id", "ID of the user of the software."),
            C::int("license_id", "Display ID of the allocated license contract."),
            C::timestamp("allocated_date", "Time the license was allocated."),
            C::timestamp("first_used", "Time the user first used the software."),
            C::timestamp("last_used", "Time the user last used the software."),
            C::timestamp("created_at", "Time the record was created."),
            C::timestamp("updated_at", "Time the record was last updated."),
            C::int("software_id", "ID of the software this user is assigned to.").from_qual(),
        ],
        key_columns: &[KeyColumn::parent("software_id"), KeyColumn::lookup("id")],
    },
    list: ListBinding::paged("applications/{{ software_id }}/users", "application_users")
        .with_shortcut(GetBinding::by_id(
            "applications/{{ software_id }}/users/{{ id }}",
            "application_user",
        )),
    get: None,
};
