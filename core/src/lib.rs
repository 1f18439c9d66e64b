//! Headless front end for the employee management service.
//!
//! # Overview
//! Two pages (the employee table and the add/update form) expressed as
//! view-models, plus the pieces they lean on: a request builder/parser for
//! the REST API, presence validation, client-side routes, and an `App` host
//! that runs the event loop.
//!
//! # Design
//! - Views never perform I/O. They return `Pending` requests and accept the
//!   outcome later, keyed by ticket (host-does-IO pattern).
//! - `EmployeeClient` is stateless; every operation is a `build_*` /
//!   `parse_*` pair.
//! - Navigation and error reporting are capabilities passed into views
//!   (`Navigator`, `Reporter`) rather than ambient state.
//! - Remote failures are reported, never rendered. Validation errors are the
//!   only errors a page shows.

pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod report;
pub mod router;
pub mod transport;
pub mod types;
pub mod validation;
pub mod view;

pub use app::{Action, App, Page};
pub use client::EmployeeClient;
pub use config::{ClientConfig, ConfigError};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use report::{LogReporter, Reporter};
pub use router::{History, Navigator, Route};
pub use transport::{Transport, UreqTransport};
pub use types::{Employee, EmployeeId, EmployeeInput};
pub use validation::{validate, EmployeeForm, Field, ValidationErrors};
pub use view::{EmployeeRow, FieldView, FormMode, FormPage, FormView, ListPage, ListView, Pending, Ticket};
