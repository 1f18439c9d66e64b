//! The add/update employee form.
//!
//! One view serves both pages. `FormMode` is decided once, from the route,
//! and only changes the title, whether the record is loaded on mount, and
//! which request `submit` issues.

use crate::client::EmployeeClient;
use crate::report::Reporter;
use crate::router::{Navigator, LIST_PATH};
use crate::types::EmployeeId;
use crate::validation::{validate, EmployeeForm, Field, ValidationErrors};

use super::{InFlight, Outcome, Pending, Ticket};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(EmployeeId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormOp {
    Load,
    Save,
}

/// Render state of a single input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: Field,
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    pub error: Option<String>,
    pub invalid: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPage {
    pub title: &'static str,
    pub fields: Vec<FieldView>,
}

#[derive(Debug)]
pub struct FormView {
    client: EmployeeClient,
    mode: FormMode,
    form: EmployeeForm,
    errors: ValidationErrors,
    in_flight: InFlight<FormOp>,
}

impl FormView {
    pub fn new(client: EmployeeClient, mode: FormMode) -> Self {
        Self {
            client,
            mode,
            form: EmployeeForm::default(),
            errors: ValidationErrors::default(),
            in_flight: InFlight::new(),
        }
    }

    /// In edit mode, fetch the record to pre-populate the fields.
    pub fn mount(&mut self) -> Option<Pending> {
        match self.mode {
            FormMode::Create => None,
            FormMode::Edit(id) => {
                let request = self.client.build_get_employee(id);
                Some(self.in_flight.issue(FormOp::Load, request))
            }
        }
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value.into());
    }

    /// Validate, then issue create or update with the values as typed.
    /// Returns `None` when validation fails or the payload cannot be built.
    pub fn submit(&mut self, reporter: &dyn Reporter) -> Option<Pending> {
        self.errors = validate(&self.form);
        if !self.errors.is_valid() {
            return None;
        }

        let input = self.form.to_input();
        log::debug!("submitting {input:?}");
        let built = match self.mode {
            FormMode::Create => self.client.build_create_employee(&input),
            FormMode::Edit(id) => self.client.build_update_employee(id, &input),
        };
        match built {
            Ok(request) => Some(self.in_flight.issue(FormOp::Save, request)),
            Err(error) => {
                reporter.failure(self.save_context(), &error);
                None
            }
        }
    }

    /// Deliver the outcome for `ticket`. A successful save navigates back to
    /// the list.
    pub fn on_response(
        &mut self,
        ticket: Ticket,
        outcome: Outcome,
        navigator: &mut dyn Navigator,
        reporter: &dyn Reporter,
    ) {
        let Some(op) = self.in_flight.complete(ticket) else {
            return;
        };
        match op {
            FormOp::Load => {
                match outcome.and_then(|response| self.client.parse_get_employee(response)) {
                    Ok(employee) => {
                        self.form = EmployeeForm {
                            first_name: employee.first_name,
                            last_name: employee.last_name,
                            email: employee.email,
                        };
                    }
                    Err(error) => reporter.failure("Error fetching employee details", &error),
                }
            }
            FormOp::Save => {
                let saved = outcome.and_then(|response| match self.mode {
                    FormMode::Create => self.client.parse_create_employee(response),
                    FormMode::Edit(_) => self.client.parse_update_employee(response),
                });
                match saved {
                    Ok(employee) => {
                        let verb = match self.mode {
                            FormMode::Create => "created",
                            FormMode::Edit(_) => "updated",
                        };
                        reporter.success(&format!("Employee {} {verb} successfully", employee.id));
                        navigator.navigate(LIST_PATH);
                    }
                    Err(error) => reporter.failure(self.save_context(), &error),
                }
            }
        }
    }

    pub fn unmount(&mut self) {
        self.in_flight.unmount();
    }

    pub fn values(&self) -> &EmployeeForm {
        &self.form
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn page(&self) -> FormPage {
        let title = match self.mode {
            FormMode::Create => "Add Employee",
            FormMode::Edit(_) => "Update Employee",
        };
        let fields = Field::ALL
            .into_iter()
            .map(|field| {
                let error = self.errors.get(field).map(str::to_string);
                FieldView {
                    field,
                    name: field.name(),
                    label: field.label(),
                    placeholder: field.placeholder(),
                    value: self.form.get(field).to_string(),
                    invalid: error.is_some(),
                    error,
                }
            })
            .collect();
        FormPage { title, fields }
    }

    fn save_context(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Error creating employee",
            FormMode::Edit(_) => "Error updating employee",
        }
    }
}
