// roster-client/tests/client_integration.rs
// Integration tests against the in-memory mock backend

use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{post, put};
use roster_api_mock::EmployeeStore;
use roster_client::{ClientConfig, ClientError, HttpClient};
use shared::models::EmployeeCreate;

/// Serve a router on an ephemeral port, returning its base URL
async fn spawn_router(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve mock");
    });
    format!("http://{addr}")
}

/// Serve the mock API on an ephemeral port, returning its base URL
async fn spawn_mock(store: Arc<EmployeeStore>) -> String {
    spawn_router(roster_api_mock::router(store)).await
}

fn client_for(base_url: &str) -> HttpClient {
    ClientConfig::new(base_url)
        .with_timeout(5)
        .build_http_client()
}

fn payload(first_name: &str) -> EmployeeCreate {
    EmployeeCreate {
        first_name: first_name.to_string(),
        last_name: "Tester".to_string(),
        email: format!("{}@example.com", first_name.to_lowercase()),
        department: "QA".to_string(),
        position: "Engineer".to_string(),
        salary: 50000.0,
        is_active: true,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_list_starts_empty() {
    let base = spawn_mock(Arc::new(EmployeeStore::new())).await;
    let client = client_for(&base);

    let employees = client.list_employees().await.unwrap();
    assert!(employees.is_empty());
}

#[tokio::test]
async fn test_create_assigns_sequential_ids() {
    let base = spawn_mock(Arc::new(EmployeeStore::new())).await;
    let client = client_for(&base);

    let a = client.create_employee(&payload("Alice")).await.unwrap();
    let b = client.create_employee(&payload("Bob")).await.unwrap();
    assert_eq!(a.id, 1);
    assert_eq!(b.id, 2);
    assert_eq!(a.first_name, "Alice");

    let employees = client.list_employees().await.unwrap();
    assert_eq!(employees.len(), 2);
    assert_eq!(employees[0].first_name, "Alice");
    assert_eq!(employees[1].first_name, "Bob");
}

#[tokio::test]
async fn test_update_echoes_stored_record() {
    let base = spawn_mock(Arc::new(EmployeeStore::new())).await;
    let client = client_for(&base);

    let mut employee = client.create_employee(&payload("Carol")).await.unwrap();
    employee.position = "Lead".to_string();
    employee.salary = 62000.0;

    let echoed = client.update_employee(employee.id, &employee).await.unwrap();
    assert_eq!(echoed, employee);

    let employees = client.list_employees().await.unwrap();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].position, "Lead");
    assert_eq!(employees[0].salary, 62000.0);
}

#[tokio::test]
async fn test_update_with_empty_body_returns_submitted_record() {
    // Some backends answer PUT with 204 and no body instead of echoing
    let app = Router::new().route(
        "/api/Employee/{id}",
        put(|| async { StatusCode::NO_CONTENT }),
    );
    let base = spawn_router(app).await;
    let client = client_for(&base);

    let submitted = payload("Grace").into_employee(7);
    let updated = client.update_employee(7, &submitted).await.unwrap();
    assert_eq!(updated, submitted);
}

#[tokio::test]
async fn test_update_missing_is_not_found() {
    let base = spawn_mock(Arc::new(EmployeeStore::new())).await;
    let client = client_for(&base);

    let ghost = payload("Ghost").into_employee(99);
    let err = client.update_employee(99, &ghost).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
}

#[tokio::test]
async fn test_delete_removes_record() {
    let base = spawn_mock(Arc::new(EmployeeStore::new())).await;
    let client = client_for(&base);

    let a = client.create_employee(&payload("Dave")).await.unwrap();
    let b = client.create_employee(&payload("Erin")).await.unwrap();

    client.delete_employee(a.id).await.unwrap();

    let employees = client.list_employees().await.unwrap();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].id, b.id);
}

#[tokio::test]
async fn test_delete_missing_is_not_found() {
    let base = spawn_mock(Arc::new(EmployeeStore::new())).await;
    let client = client_for(&base);

    let a = client.create_employee(&payload("Frank")).await.unwrap();
    client.delete_employee(a.id).await.unwrap();

    // Second delete hits a record that no longer exists
    let err = client.delete_employee(a.id).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));

    let employees = client.list_employees().await.unwrap();
    assert!(employees.is_empty());
}

#[tokio::test]
async fn test_bad_request_maps_to_validation_error() {
    let app = Router::new().route(
        "/api/Employee",
        post(|| async { (StatusCode::BAD_REQUEST, "firstName is required") }),
    );
    let base = spawn_router(app).await;
    let client = client_for(&base);

    let err = client.create_employee(&payload("Hana")).await.unwrap_err();
    match err {
        ClientError::Validation(text) => assert_eq!(text, "firstName is required"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_refused_maps_to_http_error() {
    // Nothing listens on this port
    let client = client_for("http://127.0.0.1:9");

    let err = client.list_employees().await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
}
