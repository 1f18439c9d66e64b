use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::cors::{Any, CorsLayer};

pub const DELETED_MESSAGE: &str = "Employee deleted successfully";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// In-memory table. Ids are handed out sequentially from 1 and never reused.
#[derive(Debug, Default)]
pub struct Store {
    last_id: i64,
    employees: BTreeMap<i64, Employee>,
}

impl Store {
    pub fn insert(&mut self, input: EmployeeInput) -> Employee {
        self.last_id += 1;
        let employee = Employee {
            id: self.last_id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
        };
        self.employees.insert(employee.id, employee.clone());
        employee
    }
}

pub type Db = Arc<RwLock<Store>>;

type NotFound = (StatusCode, String);

fn not_found(id: i64) -> NotFound {
    (
        StatusCode::NOT_FOUND,
        format!("Employee is not exists with given id : {id}"),
    )
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    Router::new()
        .route("/api/employees", get(list_employees).post(create_employee))
        .route(
            "/api/employees/{id}",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .layer(cors)
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_employees(State(db): State<Db>) -> Json<Vec<Employee>> {
    let store = db.read().await;
    Json(store.employees.values().cloned().collect())
}

async fn create_employee(
    State(db): State<Db>,
    Json(input): Json<EmployeeInput>,
) -> (StatusCode, Json<Employee>) {
    let employee = db.write().await.insert(input);
    log::info!("created employee {}", employee.id);
    (StatusCode::CREATED, Json(employee))
}

async fn get_employee(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Employee>, NotFound> {
    let store = db.read().await;
    store
        .employees
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found(id))
}

async fn update_employee(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<EmployeeInput>,
) -> Result<Json<Employee>, NotFound> {
    let mut store = db.write().await;
    let employee = store.employees.get_mut(&id).ok_or_else(|| not_found(id))?;
    employee.first_name = input.first_name;
    employee.last_name = input.last_name;
    employee.email = input.email;
    log::info!("updated employee {id}");
    Ok(Json(employee.clone()))
}

async fn delete_employee(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<&'static str, NotFound> {
    let mut store = db.write().await;
    store.employees.remove(&id).ok_or_else(|| not_found(id))?;
    log::info!("deleted employee {id}");
    Ok(DELETED_MESSAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(first_name: &str) -> EmployeeInput {
        EmployeeInput {
            first_name: first_name.to_string(),
            last_name: "Tendulkar".to_string(),
            email: format!("{first_name}@gmail.com"),
        }
    }

    #[test]
    fn employee_serializes_camel_case() {
        let employee = Employee {
            id: 1,
            first_name: "Ramnesh".to_string(),
            last_name: "Tendulkar".to_string(),
            email: "ramnesh@gmail.com".to_string(),
        };
        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["firstName"], "Ramnesh");
        assert_eq!(json["lastName"], "Tendulkar");
        assert_eq!(json["email"], "ramnesh@gmail.com");
    }

    #[test]
    fn input_rejects_missing_field() {
        let result: Result<EmployeeInput, _> =
            serde_json::from_str(r#"{"firstName":"sai","lastName":"T"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn ids_are_sequential_and_not_reused() {
        let mut store = Store::default();
        assert_eq!(store.insert(input("sai")).id, 1);
        let second = store.insert(input("teja")).id;
        assert_eq!(second, 2);
        store.employees.remove(&second);
        assert_eq!(store.insert(input("reddy")).id, 3);
    }
}
