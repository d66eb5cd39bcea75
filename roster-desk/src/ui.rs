//! Terminal rendering
//!
//! Pure view over [`App`]: nothing here mutates state except the table
//! cursor handed to the stateful table widget.

use chrono::NaiveDate;
use ratatui::{prelude::*, widgets::*};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use crate::app::App;
use crate::form::{EmployeeForm, Field};

/// Label column width inside the modal form
const LABEL_WIDTH: u16 = 17;

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Employee table
            Constraint::Length(9), // Logs
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    draw_header(f, chunks[0], app);
    draw_table(f, chunks[1], app);
    draw_logs(f, chunks[2], app);
    draw_footer(f, chunks[3], app);

    if let Some(form) = &app.modal {
        draw_modal(f, form);
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let title = Paragraph::new(Line::from(vec![
        Span::raw(" Roster Desk "),
        Span::styled(" Employee Records ", Style::default().fg(Color::Yellow)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(title, area);

    if app.modal.is_none() {
        let help = Paragraph::new("a add | e edit | d delete | r reload | q quit ")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Right);
        f.render_widget(help, area);
    }
}

fn draw_table(f: &mut Frame, area: Rect, app: &mut App) {
    let header = Row::new([
        "First Name",
        "Last Name",
        "Email",
        "Phone",
        "DOB",
        "DOJ",
        "Department",
        "Position",
        "Salary",
        "Status",
    ])
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .employees
        .iter()
        .map(|e| {
            let status = if e.is_active { "Active" } else { "Inactive" };
            let status_style = if e.is_active {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Red)
            };
            Row::new(vec![
                Cell::from(e.first_name.clone()),
                Cell::from(e.last_name.clone()),
                Cell::from(e.email.clone()),
                Cell::from(e.phone_number.clone()),
                Cell::from(date_text(e.date_of_birth)),
                Cell::from(date_text(e.date_of_joining)),
                Cell::from(e.department.clone()),
                Cell::from(e.position.clone()),
                Cell::from(format!("{:.2}", e.salary)),
                Cell::from(Span::styled(status, status_style)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Min(20),
        Constraint::Length(14),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(14),
        Constraint::Length(14),
        Constraint::Length(10),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!(" Employees ({}) ", app.employees.len()))
                .borders(Borders::ALL),
        )
        .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    f.render_stateful_widget(table, area, &mut app.table);
}

fn draw_logs(f: &mut Frame, area: Rect, app: &App) {
    let logs = TuiLoggerWidget::default()
        .block(
            Block::default()
                .title(" Logs ")
                .border_style(Style::default().fg(Color::White).add_modifier(Modifier::DIM))
                .borders(Borders::ALL),
        )
        .output_separator('|')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .style(Style::default().fg(Color::White))
        .state(&app.logger_state);
    f.render_widget(logs, area);
}

fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let footer = match &app.last_error {
        Some(message) => {
            Paragraph::new(message.as_str()).style(Style::default().fg(Color::Red))
        }
        None => Paragraph::new(format!(" {} employees", app.employees.len()))
            .style(Style::default().fg(Color::DarkGray)),
    };
    f.render_widget(footer, area);
}

fn draw_modal(f: &mut Frame, form: &EmployeeForm) {
    let area = centered_rect(62, (Field::ALL.len() + 3) as u16, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", form.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); Field::ALL.len() + 1])
        .split(inner);

    for (i, field) in Field::ALL.iter().enumerate() {
        let focused = form.focus == *field;
        let label_style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let value = match form.input(*field) {
            Some(input) => input.value().to_string(),
            None => {
                if form.is_active {
                    "Active".to_string()
                } else {
                    "Inactive".to_string()
                }
            }
        };

        let line = Line::from(vec![
            Span::styled(format!("{:<width$}", field.label(), width = LABEL_WIDTH as usize), label_style),
            Span::raw(value),
        ]);
        f.render_widget(Paragraph::new(line), rows[i]);

        if focused {
            if let Some(input) = form.input(*field) {
                let width = rows[i].width.saturating_sub(LABEL_WIDTH);
                let scroll = input.visual_scroll(width as usize);
                f.set_cursor_position((
                    rows[i].x + LABEL_WIDTH + ((input.visual_cursor().max(scroll) - scroll) as u16),
                    rows[i].y,
                ));
            }
        }
    }

    let hint = Paragraph::new("Tab next | Enter save | Esc cancel | Space toggle status")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(hint, rows[Field::ALL.len()]);
}

/// Fixed-size rect centered inside `r`
fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + r.width.saturating_sub(width) / 2;
    let y = r.y + r.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(r.width),
        height: height.min(r.height),
    }
}

fn date_text(date: Option<NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_default()
}
