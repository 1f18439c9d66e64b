//! Client-side routes and the navigation capability handed to views.

use crate::types::EmployeeId;

pub const ROOT_PATH: &str = "/";
pub const LIST_PATH: &str = "/employees";
pub const ADD_PATH: &str = "/add-employee";
const EDIT_PREFIX: &str = "/edit-employee/";

/// A matched client-side route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    EmployeeList,
    AddEmployee,
    EditEmployee(EmployeeId),
}

impl Route {
    /// Match a path. Query strings, fragments and one trailing slash are
    /// ignored. Ids must be plain digits without a sign or leading zero, so
    /// an edit route's `path()` is exactly the path it matched. Returns
    /// `None` for anything unmatched.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => path,
        };
        match path {
            ROOT_PATH | LIST_PATH => Some(Route::EmployeeList),
            ADD_PATH => Some(Route::AddEmployee),
            _ => {
                let id = path.strip_prefix(EDIT_PREFIX)?;
                let canonical = !id.is_empty()
                    && id.bytes().all(|b| b.is_ascii_digit())
                    && (id == "0" || !id.starts_with('0'));
                if !canonical {
                    return None;
                }
                id.parse().ok().map(Route::EditEmployee)
            }
        }
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::EmployeeList => LIST_PATH.to_string(),
            Route::AddEmployee => ADD_PATH.to_string(),
            Route::EditEmployee(id) => format!("{EDIT_PREFIX}{id}"),
        }
    }
}

/// Something that can move the UI to another path.
pub trait Navigator {
    fn navigate(&mut self, path: &str);
}

/// In-memory browser history. Records every visited path and remembers the
/// most recent navigation until the host picks it up.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    pending: Option<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// The path navigated to since the last call, if any.
    pub fn take_pending(&mut self) -> Option<String> {
        self.pending.take()
    }
}

impl Navigator for History {
    fn navigate(&mut self, path: &str) {
        log::debug!("navigate to {path}");
        self.entries.push(path.to_string());
        self.pending = Some(path.to_string());
    }
}
