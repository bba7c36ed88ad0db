//! Dashboard rendering
//!
//! Draws the single-page layout: income form, suggested plan with its
//! allocation chart, the expense tracker with its category chart, and a
//! status line carrying the comparison and prediction state.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{BarChart, Block, Borders, Paragraph, Row, Table};
use ratatui::Frame;

use crate::models::format_with_symbol;
use crate::services::{Balance, PredictionState};

use super::app::{App, Field};

/// Render the whole dashboard
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // header
            Constraint::Length(3),  // income form
            Constraint::Min(12),    // plan and expenses
            Constraint::Length(3),  // expense form
            Constraint::Length(2),  // status
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_income_form(frame, app, chunks[1]);
    render_body(frame, app, chunks[2]);
    render_expense_form(frame, app, chunks[3]);
    render_status(frame, app, chunks[4]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(Span::styled(
        " Family Budget Planner ",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(header, area);
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title)
}

fn render_income_form(frame: &mut Frame, app: &App, area: Rect) {
    let fields = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let inputs = [
        ("Arecanut (yearly)", &app.arecanut_input, Field::Arecanut),
        ("Salary (yearly)", &app.salary_input, Field::Salary),
        ("Coconut (yearly)", &app.coconut_input, Field::Coconut),
    ];

    for (i, (title, value, field)) in inputs.into_iter().enumerate() {
        let widget = Paragraph::new(value.as_str())
            .block(field_block(title, app.focus == field));
        frame.render_widget(widget, fields[i]);
    }
}

fn render_body(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(area);

    render_plan_panel(frame, app, columns[0]);
    render_expense_panel(frame, app, columns[1]);
}

fn render_plan_panel(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(5)])
        .split(area);

    let symbol = app.currency_symbol.as_str();
    let mut lines: Vec<Line> = Vec::new();

    match app.session.plan() {
        Some(plan) => {
            lines.push(Line::from(format!(
                "Total Income: {}",
                format_with_symbol(plan.total_income, symbol)
            )));
            for (label, amount, _) in plan.allocations() {
                lines.push(Line::from(format!(
                    "  {:<10} {}",
                    label,
                    format_with_symbol(amount, symbol)
                )));
            }
        }
        None => {
            lines.push(Line::from("No plan yet."));
            lines.push(Line::from(
                "Fill in the income fields and press Enter to compute one.",
            ));
        }
    }

    let summary = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Suggested Yearly Plan"));
    frame.render_widget(summary, rows[0]);

    if let Some(plan) = app.session.plan() {
        let data: Vec<(&str, u64)> = plan
            .allocations()
            .into_iter()
            .map(|(label, amount, _)| (label, amount.max(0.0) as u64))
            .collect();

        let chart = BarChart::default()
            .block(Block::default().borders(Borders::ALL).title("Allocation"))
            .data(data.as_slice())
            .bar_width(10)
            .bar_gap(2)
            .bar_style(Style::default().fg(Color::Cyan))
            .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));
        frame.render_widget(chart, rows[1]);
    }
}

fn render_expense_panel(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(8)])
        .split(area);

    let symbol = app.currency_symbol.as_str();
    let summary = app.session.ledger_summary();

    let entries: Vec<Row> = app
        .session
        .expenses()
        .iter()
        .map(|entry| {
            Row::new(vec![
                entry.title.clone(),
                entry.category.to_string(),
                format_with_symbol(entry.amount, symbol),
            ])
        })
        .collect();

    let title = format!(
        "Expenses (total {})",
        format_with_symbol(summary.total_spent, symbol)
    );
    let table = Table::new(
        entries,
        [
            Constraint::Min(14),
            Constraint::Length(8),
            Constraint::Length(14),
        ],
    )
    .header(
        Row::new(vec!["Title", "Category", "Amount"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(table, rows[0]);

    let data: Vec<(&str, u64)> = summary
        .category_totals
        .iter()
        .map(|(category, total)| (category.name(), total.max(0.0) as u64))
        .collect();

    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title("By Category"))
        .data(data.as_slice())
        .bar_width(7)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Magenta))
        .value_style(Style::default().fg(Color::Black).bg(Color::Magenta));
    frame.render_widget(chart, rows[1]);
}

fn render_expense_form(frame: &mut Frame, app: &App, area: Rect) {
    let fields = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(2, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(area);

    let title = Paragraph::new(app.title_input.as_str())
        .block(field_block("Expense Title", app.focus == Field::Title));
    frame.render_widget(title, fields[0]);

    let amount = Paragraph::new(app.amount_input.as_str())
        .block(field_block("Amount", app.focus == Field::Amount));
    frame.render_widget(amount, fields[1]);

    let category = Paragraph::new(format!("< {} >", app.selected_category()))
        .block(field_block("Category", app.focus == Field::Category));
    frame.render_widget(category, fields[2]);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let symbol = app.currency_symbol.as_str();
    let mut spans: Vec<Span> = Vec::new();

    if let Some(comparison) = app.session.comparison() {
        let (label, color) = match comparison.label {
            Balance::Surplus => ("Surplus", Color::Green),
            Balance::Deficit => ("Deficit", Color::Red),
        };
        spans.push(Span::styled(
            format!("{}: {}  ", label, format_with_symbol(comparison.net, symbol)),
            Style::default().fg(color),
        ));
    }

    match app.session.prediction() {
        PredictionState::Idle => {}
        PredictionState::Pending => {
            spans.push(Span::raw("Predicting next month... "));
        }
        PredictionState::Ready(value) => {
            spans.push(Span::styled(
                format!("Predicted next month: {}  ", format_with_symbol(*value, symbol)),
                Style::default().fg(Color::Cyan),
            ));
        }
        PredictionState::Unavailable(reason) => {
            spans.push(Span::styled(
                format!("Prediction unavailable: {}  ", reason),
                Style::default().fg(Color::Red),
            ));
        }
    }

    if let Some(message) = &app.status_message {
        spans.push(Span::raw(message.clone()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), rows[0]);

    let help = Paragraph::new(
        "Tab: next field  Enter: submit  ←/→: category  Ctrl+P: predict  Esc: quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, rows[1]);
}
