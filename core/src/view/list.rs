//! The employee table page.

use crate::client::EmployeeClient;
use crate::report::Reporter;
use crate::router::{Navigator, Route, ADD_PATH};
use crate::types::{Employee, EmployeeId};

use super::{InFlight, Outcome, Pending, Ticket};

pub const LIST_TITLE: &str = "List of Employees";

pub const LIST_COLUMNS: [&str; 5] = [
    "Employee Id",
    "Employee First Name",
    "Employee Last Name",
    "Employee Email Id",
    "Actions",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListOp {
    Load,
    Delete(EmployeeId),
}

/// One table row: the record's id (for the row actions) and its four
/// visible cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRow {
    pub id: EmployeeId,
    pub cells: [String; 4],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPage {
    pub title: &'static str,
    pub columns: [&'static str; 5],
    pub rows: Vec<EmployeeRow>,
}

/// Holds whatever the last successful list call returned, in response order.
#[derive(Debug)]
pub struct ListView {
    client: EmployeeClient,
    employees: Vec<Employee>,
    in_flight: InFlight<ListOp>,
}

impl ListView {
    pub fn new(client: EmployeeClient) -> Self {
        Self {
            client,
            employees: Vec::new(),
            in_flight: InFlight::new(),
        }
    }

    /// Fetch the full collection.
    pub fn mount(&mut self) -> Pending {
        self.load()
    }

    pub fn add(&self, navigator: &mut dyn Navigator) {
        navigator.navigate(ADD_PATH);
    }

    pub fn edit(&self, id: EmployeeId, navigator: &mut dyn Navigator) {
        navigator.navigate(&Route::EditEmployee(id).path());
    }

    /// Ask the server to delete `id`. The list is refreshed only once the
    /// server acknowledges.
    pub fn delete(&mut self, id: EmployeeId) -> Pending {
        let request = self.client.build_delete_employee(id);
        self.in_flight.issue(ListOp::Delete(id), request)
    }

    /// Deliver the outcome for `ticket`. A successful delete yields the
    /// follow-up list request.
    pub fn on_response(
        &mut self,
        ticket: Ticket,
        outcome: Outcome,
        reporter: &dyn Reporter,
    ) -> Option<Pending> {
        match self.in_flight.complete(ticket)? {
            ListOp::Load => {
                match outcome.and_then(|response| self.client.parse_list_employees(response)) {
                    Ok(employees) => self.employees = employees,
                    Err(error) => reporter.failure("Error fetching employees", &error),
                }
                None
            }
            ListOp::Delete(id) => {
                match outcome.and_then(|response| self.client.parse_delete_employee(response)) {
                    Ok(()) => {
                        reporter.success(&format!("Employee {id} deleted successfully"));
                        Some(self.load())
                    }
                    Err(error) => {
                        reporter.failure(&format!("Error deleting employee {id}"), &error);
                        None
                    }
                }
            }
        }
    }

    pub fn unmount(&mut self) {
        self.in_flight.unmount();
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn page(&self) -> ListPage {
        ListPage {
            title: LIST_TITLE,
            columns: LIST_COLUMNS,
            rows: self
                .employees
                .iter()
                .map(|employee| EmployeeRow {
                    id: employee.id,
                    cells: [
                        employee.id.to_string(),
                        employee.first_name.clone(),
                        employee.last_name.clone(),
                        employee.email.clone(),
                    ],
                })
                .collect(),
        }
    }

    fn load(&mut self) -> Pending {
        let request = self.client.build_list_employees();
        self.in_flight.issue(ListOp::Load, request)
    }
}
