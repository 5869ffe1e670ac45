use itertools::Itertools;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table},
};
use skytally_quantities::cost::Cost;

use crate::{
    form::session::{Field, Session},
    pricing::provider::Provider,
};

pub fn render(frame: &mut Frame, session: &Session) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(12),
            Constraint::Length(8),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], session);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(38), Constraint::Min(30)])
        .split(chunks[1]);
    render_form(frame, middle[0], session);
    render_chart(frame, middle[1], session);

    render_table(frame, chunks[2], session);
    render_status(frame, chunks[3], session);
}

fn render_header(frame: &mut Frame, area: Rect, session: &Session) {
    let platforms = session.rates.providers().map(Provider::full_name).join(", ");
    let lines = vec![
        Line::from(vec![
            Span::styled(
                "skytally",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" · cloud TCO across "),
            Span::raw(platforms),
        ]),
        Line::from(Span::styled(
            "Tab/Shift-Tab move · type to edit · ←/→ switch the OS · Enter calculate · Esc quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).block(Block::default().borders(Borders::ALL)), area);
}

fn render_form(frame: &mut Frame, area: Rect, session: &Session) {
    let focus = session.focus;
    let lines = vec![
        field_line("Compute hours", session.compute_hours.clone(), focus == Field::ComputeHours),
        field_line("Storage (GB)", session.storage_gb.clone(), focus == Field::StorageGb),
        field_line("Backup data (GB)", session.backup_data_gb.clone(), focus == Field::BackupGb),
        field_line(
            "Duration (months)",
            session.duration_months.clone(),
            focus == Field::DurationMonths,
        ),
        field_line("Operating system", session.os_type.to_string(), focus == Field::OsType),
        field_line("OS licenses", session.num_licenses.clone(), focus == Field::Licenses),
        Line::raw(""),
        calculate_line(focus == Field::Calculate),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Workload")),
        area,
    );
}

fn field_line(label: &'static str, value: String, focused: bool) -> Line<'static> {
    let marker = if focused { "▸ " } else { "  " };
    let value_style = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default().fg(Color::Yellow)
    };
    Line::from(vec![
        Span::raw(marker),
        Span::raw(format!("{label:<18}")),
        Span::styled(format!(" {value} "), value_style),
    ])
}

fn calculate_line(focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    };
    Line::from(vec![Span::raw("  "), Span::styled("[ Calculate ]", style)])
}

fn render_chart(frame: &mut Frame, area: Rect, session: &Session) {
    let block = Block::default().borders(Borders::ALL).title("Total cost of ownership");
    let Some(results) = session.results() else {
        frame.render_widget(
            Paragraph::new("No results yet. Fill in the workload and press Enter.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            area,
        );
        return;
    };

    let bars = results
        .iter()
        .map(|(provider, breakdown)| {
            let total = breakdown.total.round_to_cents();
            Bar::default()
                .label(Line::from(provider.to_string()))
                .value(to_bar_height(total))
                .text_value(total.to_string())
                .style(Style::default().fg(bar_color(provider)))
                .value_style(Style::default().fg(Color::Black).bg(bar_color(provider)))
        })
        .collect::<Vec<_>>();
    frame.render_widget(
        BarChart::default()
            .block(block)
            .bar_width(9)
            .bar_gap(2)
            .data(BarGroup::default().bars(&bars)),
        area,
    );
}

/// Bar heights are whole cents. Negative totals flatten to a zero-height bar,
/// while the table still carries the signed amount.
#[expect(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
fn to_bar_height(total: Cost) -> u64 {
    (total.0.max(0.0) * 100.0).round() as u64
}

const fn bar_color(provider: Provider) -> Color {
    match provider {
        Provider::Aws => Color::Red,
        Provider::Azure => Color::Blue,
        Provider::Gcp => Color::Yellow,
        Provider::Oracle => Color::Cyan,
    }
}

fn render_table(frame: &mut Frame, area: Rect, session: &Session) {
    let block = Block::default().borders(Borders::ALL).title("Breakdown");
    let Some(results) = session.results() else {
        frame.render_widget(
            Paragraph::new("The itemized breakdown shows up after the first calculation.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            area,
        );
        return;
    };

    let header = Row::new(
        ["Platform", "Compute", "Storage", "Archive", "Backup", "Networking", "OS", "Total"]
            .into_iter()
            .map(|title| {
                Cell::from(title)
                    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            }),
    );
    let rows = results.iter().map(|(provider, breakdown)| {
        Row::new(vec![
            Cell::from(provider.to_string()).style(Style::default().fg(bar_color(provider))),
            Cell::from(breakdown.compute.to_string()),
            Cell::from(breakdown.storage.to_string()),
            Cell::from(breakdown.archive.to_string()),
            Cell::from(breakdown.backup.to_string()),
            Cell::from(breakdown.networking.to_string()),
            Cell::from(breakdown.os.to_string()),
            Cell::from(breakdown.total.to_string())
                .style(Style::default().add_modifier(Modifier::BOLD)),
        ])
    });
    let widths = [
        Constraint::Length(10),
        Constraint::Length(9),
        Constraint::Length(9),
        Constraint::Length(9),
        Constraint::Length(9),
        Constraint::Length(11),
        Constraint::Length(9),
        Constraint::Length(10),
    ];
    frame.render_widget(
        Table::new(rows, widths).header(header).block(block).column_spacing(1),
        area,
    );
}

fn render_status(frame: &mut Frame, area: Rect, session: &Session) {
    let line = match session.results().and_then(|results| results.cheapest()) {
        Some((provider, breakdown)) => Line::from(vec![
            Span::styled("Cheapest platform: ", Style::default().fg(Color::Cyan)),
            Span::styled(
                format!("{provider} at {}", breakdown.total),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        ]),
        None => Line::from(Span::styled(
            "Waiting for the first calculation…",
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}
