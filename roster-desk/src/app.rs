//! Application state and reducer
//!
//! State only changes inside this module. Key presses and network
//! completions come in, [`Effect`] values describing the I/O to perform
//! come out; the runner in [`crate::effects`] executes them. This keeps
//! every transition synchronous and testable without a terminal or a
//! server.

use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::widgets::TableState;
use tui_input::backend::crossterm::EventHandler;
use tui_logger::{TuiWidgetEvent, TuiWidgetState};

use roster_client::ClientError;
use shared::models::{Employee, EmployeeCreate};

use crate::form::{EmployeeForm, Field, FormMode};

/// Network calls requested by the reducer
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch the full employee list
    LoadEmployees,
    /// Create a record; the server assigns the id
    CreateEmployee(EmployeeCreate),
    /// Replace the record at `id` with the full payload
    UpdateEmployee { id: i64, employee: Employee },
    /// Delete the record at `id`
    DeleteEmployee { id: i64 },
}

/// Completions fed back into the reducer by the effect runner
#[derive(Debug)]
pub enum AppEvent {
    EmployeesLoaded(Result<Vec<Employee>, ClientError>),
    EmployeeCreated(Result<Employee, ClientError>),
    EmployeeUpdated(Result<Employee, ClientError>),
    EmployeeDeleted { id: i64, result: Result<(), ClientError> },
}

/// Terminal application state
pub struct App {
    /// Employee list as last confirmed by the backend
    pub employees: Vec<Employee>,
    /// Table cursor
    pub table: TableState,
    /// Modal draft; `Some` while the add/edit dialog is open
    pub modal: Option<EmployeeForm>,
    /// Most recent operation failure, shown in the footer
    pub last_error: Option<String>,
    /// Logger widget state
    pub logger_state: TuiWidgetState,
    /// Set when the user asks to quit
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            employees: Vec::new(),
            table: TableState::default(),
            modal: None,
            last_error: None,
            logger_state: TuiWidgetState::new(),
            should_quit: false,
        }
    }

    /// Effects to run on startup
    pub fn on_start(&self) -> Vec<Effect> {
        vec![Effect::LoadEmployees]
    }

    /// Record under the table cursor
    pub fn selected_employee(&self) -> Option<&Employee> {
        self.table.selected().and_then(|i| self.employees.get(i))
    }

    // ========== Key handling ==========

    /// Route a key press to the modal or the table view
    pub fn on_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        if self.modal.is_some() {
            self.on_modal_key(key)
        } else {
            self.on_table_key(key)
        }
    }

    fn on_table_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('a') => self.open_add_form(),
            KeyCode::Char('e') | KeyCode::Enter => self.open_edit_form(),
            KeyCode::Char('d') => return self.delete_selected(),
            KeyCode::Char('r') => return self.refresh(),
            KeyCode::Up => self.select_prev(),
            KeyCode::Down => self.select_next(),
            KeyCode::PageUp => self.logger_state.transition(TuiWidgetEvent::PrevPageKey),
            KeyCode::PageDown => self.logger_state.transition(TuiWidgetEvent::NextPageKey),
            _ => {}
        }
        Vec::new()
    }

    fn on_modal_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Esc => {
                self.close_modal();
                Vec::new()
            }
            KeyCode::Enter => self.submit_form(),
            _ => {
                if let Some(form) = self.modal.as_mut() {
                    match key.code {
                        KeyCode::Tab | KeyCode::Down => form.focus_next(),
                        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
                        _ if form.focus == Field::ActiveStatus => {
                            if matches!(
                                key.code,
                                KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right
                            ) {
                                form.toggle_active();
                            }
                        }
                        _ => {
                            if let Some(input) = form.focused_input_mut() {
                                input.handle_event(&Event::Key(key));
                            }
                        }
                    }
                }
                Vec::new()
            }
        }
    }

    // ========== User intents ==========

    /// Open the dialog with an empty draft
    pub fn open_add_form(&mut self) {
        self.modal = Some(EmployeeForm::create());
    }

    /// Open the dialog seeded from the selected record
    pub fn open_edit_form(&mut self) {
        if let Some(employee) = self.selected_employee() {
            self.modal = Some(EmployeeForm::edit(employee));
        }
    }

    /// Discard the draft without touching the list
    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Parse the draft and request the matching network call
    ///
    /// The dialog stays open until the backend confirms; a draft that does
    /// not parse fails locally in the same way a failed request would.
    pub fn submit_form(&mut self) -> Vec<Effect> {
        let Some(form) = &self.modal else {
            return Vec::new();
        };
        let parsed = match form.mode {
            FormMode::Edit => form.to_employee().map(|employee| Effect::UpdateEmployee {
                id: employee.id,
                employee,
            }),
            FormMode::Create => form.to_create().map(Effect::CreateEmployee),
        };
        match parsed {
            Ok(effect) => vec![effect],
            Err(e) => {
                self.fail(format!("Error saving employee: {e}"));
                Vec::new()
            }
        }
    }

    /// Request deletion of the selected record
    ///
    /// The row is only removed once the backend confirms.
    pub fn delete_selected(&mut self) -> Vec<Effect> {
        match self.selected_employee() {
            Some(employee) => vec![Effect::DeleteEmployee { id: employee.id }],
            None => Vec::new(),
        }
    }

    /// Re-fetch the full list from the backend
    pub fn refresh(&self) -> Vec<Effect> {
        vec![Effect::LoadEmployees]
    }

    /// Move the table cursor down
    pub fn select_next(&mut self) {
        if self.employees.is_empty() {
            return;
        }
        let i = match self.table.selected() {
            Some(i) => (i + 1).min(self.employees.len() - 1),
            None => 0,
        };
        self.table.select(Some(i));
    }

    /// Move the table cursor up
    pub fn select_prev(&mut self) {
        if self.employees.is_empty() {
            return;
        }
        let i = self.table.selected().map(|i| i.saturating_sub(1)).unwrap_or(0);
        self.table.select(Some(i));
    }

    // ========== Network completions ==========

    /// Fold a completed network call into the state
    ///
    /// Successful mutations merge the server's response into the local
    /// list. When the merge target is missing (or a created id already
    /// exists) the local copy has drifted from the server, so a full
    /// re-fetch is requested instead of guessing.
    pub fn on_event(&mut self, event: AppEvent) -> Vec<Effect> {
        match event {
            AppEvent::EmployeesLoaded(Ok(employees)) => {
                tracing::info!("Loaded {} employees", employees.len());
                self.employees = employees;
                self.last_error = None;
                self.clamp_selection();
            }
            AppEvent::EmployeesLoaded(Err(e)) => {
                self.fail(format!("Error fetching employees: {e}"));
            }
            AppEvent::EmployeeCreated(Ok(employee)) => {
                self.modal = None;
                self.last_error = None;
                if self.employees.iter().any(|e| e.id == employee.id) {
                    tracing::warn!(
                        "Created employee {} already present locally, re-fetching list",
                        employee.id
                    );
                    return vec![Effect::LoadEmployees];
                }
                tracing::info!("Created employee {}", employee.id);
                self.employees.push(employee);
                self.clamp_selection();
            }
            AppEvent::EmployeeCreated(Err(e)) => {
                self.fail(format!("Error saving employee: {e}"));
            }
            AppEvent::EmployeeUpdated(Ok(employee)) => {
                self.modal = None;
                self.last_error = None;
                match self.employees.iter_mut().find(|e| e.id == employee.id) {
                    Some(slot) => {
                        tracing::info!("Updated employee {}", employee.id);
                        *slot = employee;
                    }
                    None => {
                        tracing::warn!(
                            "Updated employee {} missing locally, re-fetching list",
                            employee.id
                        );
                        return vec![Effect::LoadEmployees];
                    }
                }
            }
            AppEvent::EmployeeUpdated(Err(e)) => {
                self.fail(format!("Error saving employee: {e}"));
            }
            AppEvent::EmployeeDeleted { id, result: Ok(()) } => {
                tracing::info!("Deleted employee {id}");
                self.last_error = None;
                self.employees.retain(|e| e.id != id);
                self.clamp_selection();
            }
            AppEvent::EmployeeDeleted { result: Err(e), .. } => {
                self.fail(format!("Error deleting employee: {e}"));
            }
        }
        Vec::new()
    }

    /// Keep the cursor on a real row
    fn clamp_selection(&mut self) {
        if self.employees.is_empty() {
            self.table.select(None);
        } else {
            let i = self
                .table
                .selected()
                .unwrap_or(0)
                .min(self.employees.len() - 1);
            self.table.select(Some(i));
        }
    }

    fn fail(&mut self, message: String) {
        tracing::error!("{message}");
        self.last_error = Some(message);
    }
}
