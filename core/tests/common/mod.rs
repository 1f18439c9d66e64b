#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use ems_core::{ApiError, App, ClientConfig, FormPage, HttpRequest, HttpResponse, ListPage, Page, Reporter, Transport};

pub const BASE_URL: &str = "http://api.test";

/// Answers requests from a script, in order, and records what was asked.
#[derive(Default)]
pub struct ScriptedTransport {
    script: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn respond(&self, status: u16, body: &str) -> &Self {
        self.script.borrow_mut().push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    pub fn fail(&self, error: ApiError) -> &Self {
        self.script.borrow_mut().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    /// "METHOD path" for each request, with the base URL stripped.
    pub fn calls(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|r| format!("{} {}", r.method.as_str(), r.path.trim_start_matches(BASE_URL)))
            .collect()
    }
}

impl Transport for ScriptedTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let line = format!("{} {}", request.method.as_str(), request.path);
        self.requests.borrow_mut().push(request);
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unscripted request: {line}"))
    }
}

#[derive(Default)]
pub struct Recorder {
    pub failures: RefCell<Vec<String>>,
    pub successes: RefCell<Vec<String>>,
}

impl Reporter for Recorder {
    fn failure(&self, context: &str, _error: &ApiError) {
        self.failures.borrow_mut().push(context.to_string());
    }

    fn success(&self, message: &str) {
        self.successes.borrow_mut().push(message.to_string());
    }
}

pub fn app<'a>(
    transport: &'a ScriptedTransport,
    reporter: &'a Recorder,
) -> App<&'a ScriptedTransport, &'a Recorder> {
    let config = ClientConfig::with_base_url(BASE_URL).unwrap();
    App::new(&config, transport, reporter)
}

pub fn list_page<T: Transport, R: Reporter>(app: &App<T, R>) -> ListPage {
    match app.page() {
        Page::List(page) => page,
        other => panic!("expected list page, got {other:?}"),
    }
}

pub fn form_page<T: Transport, R: Reporter>(app: &App<T, R>) -> FormPage {
    match app.page() {
        Page::Form(page) => page,
        other => panic!("expected form page, got {other:?}"),
    }
}

pub fn employee_json(id: i64, first: &str, last: &str, email: &str) -> String {
    serde_json::json!({"id": id, "firstName": first, "lastName": last, "email": email}).to_string()
}
