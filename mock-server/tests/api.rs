use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Employee, DELETED_MESSAGE};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

const RAMNESH: &str = r#"{"firstName":"Ramnesh","lastName":"Tendulkar","email":"Ramnesh@gmail.com"}"#;

// --- list ---

#[tokio::test]
async fn list_employees_empty() {
    let resp = app()
        .oneshot(empty_request("GET", "/api/employees"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let employees: Vec<Employee> = body_json(resp).await;
    assert!(employees.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_employee_returns_201_with_id() {
    let resp = app()
        .oneshot(json_request("POST", "/api/employees", RAMNESH))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let employee: Employee = body_json(resp).await;
    assert_eq!(employee.id, 1);
    assert_eq!(employee.first_name, "Ramnesh");
    assert_eq!(employee.email, "Ramnesh@gmail.com");
}

#[tokio::test]
async fn create_employee_missing_field_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/api/employees", r#"{"firstName":"sai"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- get ---

#[tokio::test]
async fn get_employee_not_found() {
    let resp = app()
        .oneshot(empty_request("GET", "/api/employees/99"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_employee_bad_id_returns_400() {
    let resp = app()
        .oneshot(empty_request("GET", "/api/employees/not-a-number"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- update ---

#[tokio::test]
async fn update_employee_not_found() {
    let resp = app()
        .oneshot(json_request("PUT", "/api/employees/99", RAMNESH))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- delete ---

#[tokio::test]
async fn delete_employee_not_found() {
    let resp = app()
        .oneshot(empty_request("DELETE", "/api/employees/99"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- cors ---

#[tokio::test]
async fn cross_origin_requests_are_allowed() {
    let request = Request::builder()
        .uri("/api/employees")
        .header(http::header::ORIGIN, "http://localhost:3000")
        .body(String::new())
        .unwrap();
    let resp = app().oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get(http::header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create two
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/api/employees", RAMNESH))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Employee = body_json(resp).await;
    let id = created.id;

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/api/employees",
            r#"{"firstName":"sai","lastName":"Tendulkar","email":"sai@gmail.com"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let second: Employee = body_json(resp).await;
    assert_eq!(second.id, id + 1);

    // list: ordered by id
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/api/employees"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let employees: Vec<Employee> = body_json(resp).await;
    let ids: Vec<i64> = employees.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![id, second.id]);

    // get
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", &format!("/api/employees/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Employee = body_json(resp).await;
    assert_eq!(fetched, created);

    // update replaces all three fields
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            &format!("/api/employees/{id}"),
            r#"{"firstName":"Ram","lastName":"T","email":"ram@t.com"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Employee = body_json(resp).await;
    assert_eq!(updated.id, id);
    assert_eq!(updated.first_name, "Ram");
    assert_eq!(updated.last_name, "T");
    assert_eq!(updated.email, "ram@t.com");

    // delete acknowledges with a message
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", &format!("/api/employees/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await, DELETED_MESSAGE.as_bytes());

    // get after delete: 404
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", &format!("/api/employees/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // list after delete: only the second remains
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/api/employees"))
        .await
        .unwrap();
    let employees: Vec<Employee> = body_json(resp).await;
    assert_eq!(employees, vec![second]);
}
