//! roster-desk - terminal console for employee records
//!
//! A ratatui front-end over the employee REST API: browse the roster in a
//! table, add and edit records in a modal form, delete with a keystroke,
//! and watch request logs in an in-app pane.
//!
//! The state machine lives in [`app`], network execution in [`effects`],
//! rendering in [`ui`]. The binary wires them to a terminal.

pub mod app;
pub mod config;
pub mod effects;
pub mod form;
pub mod ui;
