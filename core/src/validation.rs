//! Presence validation for the employee form.
//!
//! `validate` is a pure function of the three field values. Every call
//! recomputes the whole error set, so a field that passes clears whatever
//! error it showed before.

use crate::types::EmployeeInput;

/// One of the three editable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
}

impl Field {
    /// Render order on the form.
    pub const ALL: [Field; 3] = [Field::FirstName, Field::LastName, Field::Email];

    /// Input name, matching the JSON field.
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name:",
            Field::LastName => "Last Name:",
            Field::Email => "Email:",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::FirstName => "Enter Employee First Name",
            Field::LastName => "Enter Employee Last Name",
            Field::Email => "Enter Employee Email",
        }
    }

    pub fn required_message(self) -> &'static str {
        match self {
            Field::FirstName => "First Name is required",
            Field::LastName => "Last Name is required",
            Field::Email => "Email is required",
        }
    }
}

/// Current, untrimmed values of the form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl EmployeeForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Email => self.email = value,
        }
    }

    /// Payload carrying the values as typed; trimming only gates validation.
    pub fn to_input(&self) -> EmployeeInput {
        EmployeeInput {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Per-field error messages; `None` means the field passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::FirstName => self.first_name.as_deref(),
            Field::LastName => self.last_name.as_deref(),
            Field::Email => self.email.as_deref(),
        }
    }

    pub fn is_valid(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_none())
    }
}

pub fn validate(form: &EmployeeForm) -> ValidationErrors {
    let check = |field: Field| {
        if form.get(field).trim().is_empty() {
            Some(field.required_message().to_string())
        } else {
            None
        }
    };
    ValidationErrors {
        first_name: check(Field::FirstName),
        last_name: check(Field::LastName),
        email: check(Field::Email),
    }
}
