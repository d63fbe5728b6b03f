//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: connector → HTTP requests → projected rows

use freshservice_connector::config::HttpSettings;
use freshservice_connector::output::{rows_to_record_batch, write_json_lines};
use freshservice_connector::{ConnectionConfig, Connector, Error, Quals};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn connector_for(server: &MockServer) -> Connector {
    Connector::new(ConnectionConfig {
        domain: Some(server.uri()),
        token: Some("secret".to_string()),
        http: HttpSettings {
            max_retries: 0,
            ..HttpSettings::default()
        },
    })
}

fn next_link(server: &MockServer, resource: &str, page: u32) -> String {
    format!(
        "<{}/api/v2/{resource}?page={page}>; rel=\"next\"",
        server.uri()
    )
}

fn column<'a>(result: &'a freshservice_connector::QueryResult, row: usize, name: &str) -> &'a Value {
    let index = result.schema.column_index(name).unwrap();
    &result.rows[row][index]
}

// ============================================================================
// List
// ============================================================================

#[tokio::test]
async fn test_query_tickets_across_pages() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/tickets"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "30"))
        .and(header("Authorization", "Basic c2VjcmV0Olg="))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("link", next_link(&server, "tickets", 2).as_str())
                .set_body_json(json!({
                    "tickets": [
                        {
                            "id": 1,
                            "subject": "VPN down",
                            "status": 2,
                            "priority": 4,
                            "tags": ["network"],
                            "created_at": "2024-05-01T08:00:00Z"
                        },
                        { "id": 2, "subject": "New laptop", "status": 9, "priority": 1 }
                    ]
                })),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v2/tickets"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tickets": [{ "id": 3, "subject": "Printer jam" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = connector_for(&server)
        .query("freshservice_ticket", &Quals::new(), None)
        .await
        .unwrap();

    assert_eq!(result.rows.len(), 3);
    assert_eq!(result.stats.pages, 2);

    assert_eq!(column(&result, 0, "status_desc"), "Open");
    assert_eq!(column(&result, 0, "priority_desc"), "Urgent");
    assert_eq!(column(&result, 0, "tags"), &json!(["network"]));
    assert_eq!(column(&result, 0, "created_at"), "2024-05-01T08:00:00Z");
    assert_eq!(column(&result, 1, "status_desc"), "Unknown");
    assert_eq!(column(&result, 2, "status_desc"), "Unknown");
    assert_eq!(column(&result, 2, "subject"), "Printer jam");

    let batch = rows_to_record_batch(result.schema, &result.rows).unwrap();
    assert_eq!(batch.num_rows(), 3);
    assert_eq!(batch.num_columns(), result.schema.columns.len());
}

#[tokio::test]
async fn test_child_rows_carry_parent_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/changes/42/notes"))
        .and(query_param_is_missing("page"))
        .and(query_param_is_missing("per_page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "notes": [
                { "id": 10, "body_text": "Approved by CAB" },
                { "id": 11, "body_text": "Rolled out" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let quals = Quals::new().with("change_id", 42);
    let result = connector_for(&server)
        .query("change_note", &quals, None)
        .await
        .unwrap();

    assert_eq!(result.rows.len(), 2);
    assert_eq!(column(&result, 0, "change_id"), &json!(42));
    assert_eq!(column(&result, 1, "change_id"), &json!(42));
    assert_eq!(column(&result, 1, "body_text"), "Rolled out");
}

#[tokio::test]
async fn test_missing_parent_sends_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "notes": [] })))
        .expect(0)
        .mount(&server)
        .await;

    let err = connector_for(&server)
        .query("freshservice_problem_note", &Quals::new(), None)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::MissingRequiredFilter { ref resource, ref column }
            if resource == "freshservice_problem_note" && column == "problem_id"
    ));
}

#[tokio::test]
async fn test_path_unsafe_parent_id_sends_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "agents": [] })))
        .expect(0)
        .mount(&server)
        .await;

    let quals = Quals::new().with("change_id", "1/../../agents?x=");
    let err = connector_for(&server)
        .query("change_note", &quals, None)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Config { .. }));
}

#[tokio::test]
async fn test_filters_and_limit_are_pushed_down() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/requesters"))
        .and(query_param("email", "jane@example.com"))
        .and(query_param("per_page", "5"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "requesters": [{ "id": 5, "primary_email": "jane@example.com" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let quals = Quals::new().with("email", "jane@example.com");
    let mut items: Vec<Value> = Vec::new();
    let stats = connector_for(&server)
        .list("requester", &quals, Some(5), &mut items)
        .await
        .unwrap();

    assert_eq!(stats.items, 1);
    assert_eq!(items[0]["id"], 5);
}

#[tokio::test]
async fn test_nested_address_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/locations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "locations": [{
                "id": 3,
                "name": "HQ",
                "address": { "line1": "1 Main St", "city": "Springfield", "zipcode": "12345" },
                "created_at": "2023-11-02T09:30:00+02:00"
            }]
        })))
        .mount(&server)
        .await;

    let result = connector_for(&server)
        .query("location", &Quals::new(), None)
        .await
        .unwrap();

    assert_eq!(column(&result, 0, "line1"), "1 Main St");
    assert_eq!(column(&result, 0, "city"), "Springfield");
    assert_eq!(column(&result, 0, "country"), &Value::Null);
    assert_eq!(column(&result, 0, "created_at"), "2023-11-02T07:30:00Z");
}

#[tokio::test]
async fn test_list_through_item_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/applications/8/users/21"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "application_user": { "id": 21, "user_id": 77 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let quals = Quals::new().with("software_id", 8).with("id", 21);
    let result = connector_for(&server)
        .query("software_user", &quals, None)
        .await
        .unwrap();

    assert_eq!(result.rows.len(), 1);
    assert_eq!(column(&result, 0, "software_id"), &json!(8));
}

// ============================================================================
// Get
// ============================================================================

#[tokio::test]
async fn test_get_ticket_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/tickets/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ticket": { "id": 7, "subject": "Printer jam", "status": 5 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = connector_for(&server)
        .query("ticket", &Quals::new().with("id", 7), None)
        .await
        .unwrap();

    assert_eq!(result.rows.len(), 1);
    assert_eq!(column(&result, 0, "status_desc"), "Closed");

    let mut out = Vec::new();
    write_json_lines(&mut out, result.schema, &result.rows).unwrap();
    let line: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(line["subject"], "Printer jam");
}

#[tokio::test]
async fn test_get_not_found_is_wrapped() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/changes/99"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Record not found"))
        .mount(&server)
        .await;

    let mut items: Vec<Value> = Vec::new();
    let err = connector_for(&server)
        .get("change", &Quals::new().with("id", 99), &mut items)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Upstream { ref resource, ref operation, .. }
            if resource == "freshservice_change" && operation == "get"
    ));
    assert_eq!(err.status(), Some(404));
    assert!(items.is_empty());
}

// ============================================================================
// Failures mid-listing
// ============================================================================

#[tokio::test]
async fn test_failure_on_second_page_keeps_first() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/assets"))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("link", next_link(&server, "assets", 2).as_str())
                .set_body_json(json!({ "assets": [{ "display_id": 1 }, { "display_id": 2 }] })),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v2/assets"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Access denied"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v2/assets"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "assets": [] })))
        .expect(0)
        .mount(&server)
        .await;

    let mut items: Vec<Value> = Vec::new();
    let err = connector_for(&server)
        .list("asset", &Quals::new(), None, &mut items)
        .await
        .unwrap_err();

    assert_eq!(items.len(), 2);
    assert_eq!(err.status(), Some(403));
    assert!(err.to_string().starts_with("freshservice_asset: unable to list"));
}

#[tokio::test]
async fn test_check_succeeds_with_valid_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/agents"))
        .and(query_param("per_page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "agents": [{ "id": 1 }] })))
        .expect(1)
        .mount(&server)
        .await;

    connector_for(&server).check().await.unwrap();
}

#[tokio::test]
async fn test_check_reports_bad_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/agents"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid credentials"))
        .mount(&server)
        .await;

    let err = connector_for(&server).check().await.unwrap_err();
    assert_eq!(err.status(), Some(401));
}
