//! Modal form state for the add/edit employee dialog
//!
//! Text fields buffer raw keystrokes; nothing is validated while typing.
//! Parsing into the typed wire payload happens once, at submit time.

use chrono::NaiveDate;
use thiserror::Error;
use tui_input::Input;

use shared::models::{Employee, EmployeeCreate};

/// Which operation the form will submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Form fields in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    DateOfBirth,
    DateOfJoining,
    Department,
    Position,
    Salary,
    ActiveStatus,
}

impl Field {
    /// Fields in display order
    pub const ALL: [Field; 10] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::PhoneNumber,
        Field::DateOfBirth,
        Field::DateOfJoining,
        Field::Department,
        Field::Position,
        Field::Salary,
        Field::ActiveStatus,
    ];

    /// Label shown next to the field
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::PhoneNumber => "Phone Number",
            Field::DateOfBirth => "Date of Birth",
            Field::DateOfJoining => "Date of Joining",
            Field::Department => "Department",
            Field::Position => "Position",
            Field::Salary => "Salary",
            Field::ActiveStatus => "Active Status",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Next field in display order, wrapping around
    pub fn next(self) -> Field {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous field in display order, wrapping around
    pub fn prev(self) -> Field {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

/// Error raised when the draft cannot become a typed payload
#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    /// Salary text is not a number
    #[error("salary '{0}' is not a number")]
    Salary(String),

    /// Date text is not ISO formatted
    #[error("{field} '{value}' is not a YYYY-MM-DD date")]
    Date { field: &'static str, value: String },

    /// Edit draft lost its record id
    #[error("draft has no record id")]
    MissingId,
}

/// Draft state behind the modal dialog
pub struct EmployeeForm {
    pub mode: FormMode,
    /// Server id of the record being edited; `None` for new drafts
    pub id: Option<i64>,
    pub first_name: Input,
    pub last_name: Input,
    pub email: Input,
    pub phone_number: Input,
    pub date_of_birth: Input,
    pub date_of_joining: Input,
    pub department: Input,
    pub position: Input,
    pub salary: Input,
    pub is_active: bool,
    /// Field currently receiving keystrokes
    pub focus: Field,
}

impl EmployeeForm {
    /// Empty draft for a new record
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            id: None,
            first_name: Input::default(),
            last_name: Input::default(),
            email: Input::default(),
            phone_number: Input::default(),
            date_of_birth: Input::default(),
            date_of_joining: Input::default(),
            department: Input::default(),
            position: Input::default(),
            salary: Input::default(),
            is_active: true,
            focus: Field::FirstName,
        }
    }

    /// Draft populated from an existing record
    pub fn edit(employee: &Employee) -> Self {
        Self {
            mode: FormMode::Edit,
            id: Some(employee.id),
            first_name: Input::new(employee.first_name.clone()),
            last_name: Input::new(employee.last_name.clone()),
            email: Input::new(employee.email.clone()),
            phone_number: Input::new(employee.phone_number.clone()),
            date_of_birth: Input::new(date_text(employee.date_of_birth)),
            date_of_joining: Input::new(date_text(employee.date_of_joining)),
            department: Input::new(employee.department.clone()),
            position: Input::new(employee.position.clone()),
            salary: Input::new(employee.salary.to_string()),
            is_active: employee.is_active,
            focus: Field::FirstName,
        }
    }

    /// Dialog title
    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add Employee",
            FormMode::Edit => "Edit Employee",
        }
    }

    /// Text input behind a field; `None` for the active-status toggle
    pub fn input(&self, field: Field) -> Option<&Input> {
        match field {
            Field::FirstName => Some(&self.first_name),
            Field::LastName => Some(&self.last_name),
            Field::Email => Some(&self.email),
            Field::PhoneNumber => Some(&self.phone_number),
            Field::DateOfBirth => Some(&self.date_of_birth),
            Field::DateOfJoining => Some(&self.date_of_joining),
            Field::Department => Some(&self.department),
            Field::Position => Some(&self.position),
            Field::Salary => Some(&self.salary),
            Field::ActiveStatus => None,
        }
    }

    fn input_mut(&mut self, field: Field) -> Option<&mut Input> {
        match field {
            Field::FirstName => Some(&mut self.first_name),
            Field::LastName => Some(&mut self.last_name),
            Field::Email => Some(&mut self.email),
            Field::PhoneNumber => Some(&mut self.phone_number),
            Field::DateOfBirth => Some(&mut self.date_of_birth),
            Field::DateOfJoining => Some(&mut self.date_of_joining),
            Field::Department => Some(&mut self.department),
            Field::Position => Some(&mut self.position),
            Field::Salary => Some(&mut self.salary),
            Field::ActiveStatus => None,
        }
    }

    /// Text input currently focused, if the focus is not on the toggle
    pub fn focused_input_mut(&mut self) -> Option<&mut Input> {
        self.input_mut(self.focus)
    }

    /// Move focus to the next field
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move focus to the previous field
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Flip the active-status toggle
    pub fn toggle_active(&mut self) {
        self.is_active = !self.is_active;
    }

    /// Parse the draft into a create payload
    pub fn to_create(&self) -> Result<EmployeeCreate, FormError> {
        Ok(EmployeeCreate {
            first_name: self.first_name.value().to_string(),
            last_name: self.last_name.value().to_string(),
            email: self.email.value().to_string(),
            phone_number: self.phone_number.value().to_string(),
            date_of_birth: parse_date("date of birth", self.date_of_birth.value())?,
            date_of_joining: parse_date("date of joining", self.date_of_joining.value())?,
            department: self.department.value().to_string(),
            position: self.position.value().to_string(),
            salary: parse_salary(self.salary.value())?,
            is_active: self.is_active,
        })
    }

    /// Parse the draft into the full record for an update
    pub fn to_employee(&self) -> Result<Employee, FormError> {
        let id = self.id.ok_or(FormError::MissingId)?;
        Ok(self.to_create()?.into_employee(id))
    }
}

fn date_text(date: Option<NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_default()
}

/// Blank means "no date"; anything else must be YYYY-MM-DD
fn parse_date(field: &'static str, value: &str) -> Result<Option<NaiveDate>, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value.parse().map(Some).map_err(|_| FormError::Date {
        field,
        value: value.to_string(),
    })
}

/// Blank means zero, matching how the backend stores an untouched draft
fn parse_salary(value: &str) -> Result<f64, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(0.0);
    }
    // f64 parsing accepts "inf" and "NaN"; neither has a JSON number form
    let salary: f64 = value
        .parse()
        .map_err(|_| FormError::Salary(value.to_string()))?;
    if !salary.is_finite() {
        return Err(FormError::Salary(value.to_string()));
    }
    Ok(salary)
}
