//! TUI rendering — three-tab dashboard layout.
//!
//! ┌──────────────────────────────────────────────┐
//! │  🗽 Borocast    session 1a2b3c4d   3 preds   │
//! │  Prediction │ Dashboard │ Heatmap            │
//! ├──────────────────────────────────────────────┤
//! │  Complaint: Noise complaint from construc…   │
//! │  Predicted: Brooklyn (41%)                   │
//! │  ▁▃▂█▂  probability bars                     │
//! │  ── history ──                               │
//! │  Noise complaint from construct…  Brooklyn   │
//! ├──────────────────────────────────────────────┤
//! │  Predicted Brooklyn (41%)                    │
//! │  enter: predict  ctrl+e: example  esc: quit  │
//! └──────────────────────────────────────────────┘

use ratatui::{prelude::*, widgets::*};

use borocast_core::charts::{self, MOCK_COUNT_MAX};
use borocast_core::{Borough, EXAMPLE_COMPLAINTS};

use super::app::{App, Tab};

pub fn draw(f: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title
            Constraint::Length(1), // tabs
            Constraint::Min(10),   // body
            Constraint::Length(1), // status
            Constraint::Length(1), // keys
        ])
        .split(f.area());

    draw_title(f, rows[0], app);
    draw_tabs(f, rows[1], app);
    match app.tab() {
        Tab::Predict => draw_predict(f, rows[2], app),
        Tab::Dashboard => draw_dashboard(f, rows[2], app),
        Tab::Heatmap => draw_heatmap(f, rows[2], app),
    }
    draw_status(f, rows[3], app);
    draw_keys(f, rows[4], app);
}

fn draw_title(f: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let short_id: String = session.id().chars().take(8).collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Line::from(vec![
            Span::styled(" 🗽 Borocast ", Style::default().bold().fg(Color::Cyan)),
            Span::raw("  model: "),
            Span::styled(app.model_name().to_string(), Style::default().fg(Color::Yellow)),
            Span::styled(
                format!(
                    "  session {short_id}  {} prediction(s) ",
                    session.prediction_count()
                ),
                Style::default().fg(Color::DarkGray),
            ),
        ]));

    f.render_widget(block, area);
}

fn draw_tabs(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = Tab::ALL.iter().map(|t| Line::from(t.label())).collect();
    let tabs = Tabs::new(titles)
        .select(app.tab().index())
        .highlight_style(Style::default().bold().fg(Color::Cyan))
        .divider(" │ ");
    f.render_widget(tabs, area);
}

// ---------------------------------------------------------------------------
// Prediction tab
// ---------------------------------------------------------------------------

fn draw_predict(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // input
            Constraint::Min(8),    // probability chart
            Constraint::Length(9), // history
        ])
        .split(area);

    let input = Paragraph::new(app.input())
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Complaint Description "),
        );
    f.render_widget(input, rows[0]);

    match app.last_prediction() {
        Some(prediction) => {
            let data: Vec<(&str, u64)> = Borough::ALL
                .iter()
                .map(|b| {
                    (
                        b.short_label(),
                        (prediction.probabilities[b.index()] * 100.0).round() as u64,
                    )
                })
                .collect();

            let chart = BarChart::default()
                .block(Block::default().borders(Borders::ALL).title(format!(
                    " Predicted: {} ({:.0}%) — probabilities (%) ",
                    prediction.borough,
                    prediction.confidence() * 100.0
                )))
                .data(data.as_slice())
                .bar_width(5)
                .bar_gap(2)
                .max(100)
                .bar_style(Style::default().fg(Color::Cyan))
                .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));
            f.render_widget(chart, rows[1]);
        }
        None => {
            let hint = Paragraph::new(format!(
                "Press enter to predict the borough.\n\nctrl+e cycles {} example complaints.",
                EXAMPLE_COMPLAINTS.len()
            ))
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(" Prediction "));
            f.render_widget(hint, rows[1]);
        }
    }

    draw_history(f, rows[2], app);
}

fn draw_history(f: &mut Frame, area: Rect, app: &App) {
    let history = app.session().history();

    if history.is_empty() {
        let p = Paragraph::new("No predictions yet")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(" History "));
        f.render_widget(p, area);
        return;
    }

    let items: Vec<Row> = history
        .iter()
        .rev()
        .map(|record| {
            Row::new(vec![record.complaint.clone(), record.borough.to_string()])
        })
        .collect();

    let table = Table::new(items, [Constraint::Min(30), Constraint::Length(14)]).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" History ({} records, newest first) ", history.len())),
    );
    f.render_widget(table, area);
}

// ---------------------------------------------------------------------------
// Dashboard tab
// ---------------------------------------------------------------------------

fn draw_dashboard(f: &mut Frame, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let pie = charts::complaint_pie(app.dashboard_counts());
    let items: Vec<Row> = pie
        .slices
        .iter()
        .map(|slice| {
            Row::new(vec![
                slice.label.clone(),
                format!("{:>3}", slice.value as u64),
                format!("{:>4.1}%", slice.share * 100.0),
                share_bar(slice.share, 12),
            ])
        })
        .collect();

    let table = Table::new(
        items,
        [
            Constraint::Length(14),
            Constraint::Length(4),
            Constraint::Length(6),
            Constraint::Length(12),
        ],
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Complaint Distribution by Borough "),
    );
    f.render_widget(table, cols[0]);

    let data: Vec<(&str, u64)> = Borough::ALL
        .iter()
        .map(|b| (b.short_label(), app.dashboard_counts()[b.index()]))
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Total Complaints by Borough "),
        )
        .data(data.as_slice())
        .bar_width(5)
        .bar_gap(2)
        .max(MOCK_COUNT_MAX)
        .bar_style(Style::default().fg(Color::Green))
        .value_style(Style::default().fg(Color::Black).bg(Color::Green));
    f.render_widget(chart, cols[1]);
}

// ---------------------------------------------------------------------------
// Heatmap tab
// ---------------------------------------------------------------------------

fn draw_heatmap(f: &mut Frame, area: Rect, app: &App) {
    let heat = app.session().heatmap();

    let mut lines = vec![Line::from(Span::styled(
        "Geographic Heatmap of Complaint Density",
        Style::default().bold().fg(Color::Cyan),
    ))];
    lines.push(Line::from(""));

    if heat.is_empty() {
        lines.push(Line::from(Span::styled(
            "No heatmap data yet — make a prediction to populate the map.",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.push(Line::from(format!(
            "{} accumulated point(s) across {} borough markers",
            heat.point_count(),
            Borough::ALL.len()
        )));
        lines.push(Line::from(format!(
            "map cache: {}",
            if heat.cache_valid() {
                "current"
            } else {
                "stale — will rebuild on next save"
            }
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(
            "The map is a standalone HTML document; press s to save it and open it in a browser.",
        ));
    }

    if let Some(path) = app.last_export() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("last saved: {}", path.display()),
            Style::default().fg(Color::Green),
        )));
    }

    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Heatmap "));
    f.render_widget(p, area);
}

// ---------------------------------------------------------------------------
// Status + key bars
// ---------------------------------------------------------------------------

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let p = Paragraph::new(app.status().unwrap_or_default())
        .style(Style::default().fg(Color::Yellow));
    f.render_widget(p, area);
}

fn draw_keys(f: &mut Frame, area: Rect, app: &App) {
    let keys = match app.tab() {
        Tab::Predict => " type to edit   enter: predict   ctrl+e: example   ctrl+u: clear   tab: switch   esc: quit",
        Tab::Dashboard => " r: resample mock counts   tab: switch   esc: quit",
        Tab::Heatmap => " s: save map html   c: clear heatmap data   tab: switch   esc: quit",
    };
    let bar = Paragraph::new(keys).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(bar, area);
}

/// Render a share in [0, 1] as a fixed-width bar.
fn share_bar(share: f64, width: usize) -> String {
    let filled = (share.clamp(0.0, 1.0) * width as f64).round() as usize;
    let mut bar = String::with_capacity(width * 3);
    for i in 0..width {
        bar.push(if i < filled { '▰' } else { '▱' });
    }
    bar
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_bar_bounds() {
        assert_eq!(share_bar(0.0, 4), "▱▱▱▱");
        assert_eq!(share_bar(1.0, 4), "▰▰▰▰");
        assert_eq!(share_bar(0.5, 4), "▰▰▱▱");
    }

    #[test]
    fn share_bar_clamps() {
        assert_eq!(share_bar(7.0, 3), "▰▰▰");
        assert_eq!(share_bar(-0.5, 3), "▱▱▱");
    }
}
