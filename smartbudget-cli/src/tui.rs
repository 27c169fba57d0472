use anyhow::Result;
use chrono::NaiveDate;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span, Text},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph, Tabs,
    },
    Frame, Terminal,
};
use smartbudget_finance::{Dashboard, HealthLabel, Session};
use smartbudget_ingest::SampleOptions;
use std::io::{self, Stdout};
use std::path::PathBuf;

use crate::fmt::money;
use crate::report::source_label;

const TABS: [&str; 3] = ["Monthly balance", "By category", "Weekday pattern"];
const WEEKDAY_SHORT: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const WEEKDAY_COLORS: [Color; 7] = [
    Color::Rgb(0xff, 0x6b, 0x6b),
    Color::Rgb(0x4e, 0xcd, 0xc4),
    Color::Rgb(0x45, 0xb7, 0xd1),
    Color::Rgb(0xf9, 0xca, 0x24),
    Color::Rgb(0xf0, 0x93, 0x2b),
    Color::Rgb(0xeb, 0x4d, 0x4b),
    Color::Rgb(0x6c, 0x5c, 0xe7),
];
/// Short commit hash embedded by build.rs, "unknown" outside a git checkout
const BUILD_SHA: &str = env!("SMARTBUDGET_BUILD_SHA");
const INCOME: Color = Color::Green;
const EXPENSE: Color = Color::Rgb(0xff, 0x44, 0x44);

/// Startup options for the dashboard
pub struct DashboardOptions {
    pub now: NaiveDate,
    pub csv: Option<PathBuf>,
    pub sample: bool,
    pub sample_opts: SampleOptions,
    pub currency_symbol: String,
}

struct App {
    session: Session,
    now: NaiveDate,
    csv: Option<PathBuf>,
    sample_opts: SampleOptions,
    symbol: String,
    dashboard: Dashboard,
    tab: usize,
    status: String,
}

impl App {
    fn new(opts: DashboardOptions) -> Self {
        let session = Session::new();
        let dashboard = session.dashboard(opts.now);
        let mut app = Self {
            session,
            now: opts.now,
            csv: opts.csv,
            sample_opts: opts.sample_opts,
            symbol: opts.currency_symbol,
            dashboard,
            tab: 0,
            status: "Ready. Press s for sample data or r to import the CSV.".to_string(),
        };
        if app.csv.is_some() {
            app.reload_csv();
        } else if opts.sample {
            app.load_sample();
        }
        app
    }

    fn refresh(&mut self) {
        self.dashboard = self.session.dashboard(self.now);
    }

    fn load_sample(&mut self) {
        let summary = self.session.load_sample(self.now, self.sample_opts);
        self.refresh();
        self.status = format!("Sample data loaded: {} transactions", summary.loaded);
    }

    fn reload_csv(&mut self) {
        let Some(path) = self.csv.clone() else {
            self.status = "No CSV given (start with --csv <file>)".to_string();
            return;
        };
        match self.session.import_file(&path) {
            Ok(summary) => {
                self.refresh();
                self.status = format!(
                    "Imported {}: {} transactions ({} dropped)",
                    path.display(),
                    summary.loaded,
                    summary.dropped
                );
            }
            Err(e) => {
                tracing::warn!(error = %e, "import failed");
                self.status = format!("Import failed: {e}");
            }
        }
    }
}

pub fn run_dashboard(opts: DashboardOptions) -> Result<()> {
    let mut app = App::new(opts);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = dashboard_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn dashboard_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Tab | KeyCode::Right => app.tab = (app.tab + 1) % TABS.len(),
                    KeyCode::BackTab | KeyCode::Left => {
                        app.tab = (app.tab + TABS.len() - 1) % TABS.len()
                    }
                    KeyCode::Char('s') => app.load_sample(),
                    KeyCode::Char('r') => app.reload_csv(),
                    _ => {}
                }
            }
        }
    }
    Ok(())
}

fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(10), Constraint::Length(1)])
        .split(f.area());

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "SmartBudget",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  personal finance dashboard", Style::default().fg(Color::Gray)),
        Span::raw(format!("   as of {}", app.dashboard.as_of)),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
        .split(chunks[1]);

    draw_metrics(f, app, body[0]);
    draw_charts(f, app, body[1]);

    let status = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(40)])
        .split(chunks[2]);
    f.render_widget(
        Paragraph::new(format!(
            " {}  [{}]  Tab: chart  s: sample  r: import  q: quit",
            app.status,
            source_label(app.session.source())
        )),
        status[0],
    );
    f.render_widget(
        Paragraph::new(format!(
            "SmartBudget v{} ({}) ",
            env!("CARGO_PKG_VERSION"),
            BUILD_SHA
        ))
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::DarkGray)),
        status[1],
    );
}

fn score_color(label: HealthLabel) -> Color {
    match label {
        HealthLabel::Excellent => Color::Green,
        HealthLabel::Good => Color::Yellow,
        HealthLabel::NeedsAttention => Color::Rgb(0xff, 0x88, 0x00),
        HealthLabel::Critical => Color::Red,
        HealthLabel::InsufficientData => Color::Gray,
    }
}

fn draw_metrics(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Length(7), Constraint::Min(6)])
        .split(area);

    let dash = &app.dashboard;
    let health = &dash.health;
    let mut score_lines = vec![
        Line::from(Span::styled(
            health.score.to_string(),
            Style::default()
                .fg(score_color(health.label))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(health.label.as_str(), Style::default().fg(Color::Gray))),
    ];
    for p in &health.penalties {
        score_lines.push(Line::from(Span::styled(
            format!("-{} {}", p.points(), p.description()),
            Style::default().fg(Color::DarkGray),
        )));
    }
    f.render_widget(
        Paragraph::new(Text::from(score_lines))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Financial health")),
        rows[0],
    );

    let m = &dash.month;
    let balance_color = if m.balance >= 0.0 { INCOME } else { EXPENSE };
    let metric = |label: &str, value: String, color: Color| {
        Line::from(vec![
            Span::raw(format!("{label:<14}")),
            Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        ])
    };
    let metrics = vec![
        metric("Income", money(&app.symbol, m.income), INCOME),
        metric("Expenses", money(&app.symbol, m.expenses), EXPENSE),
        metric("Balance", money(&app.symbol, m.balance), balance_color),
        metric("Transactions", m.transactions.to_string(), Color::Gray),
    ];
    f.render_widget(
        Paragraph::new(Text::from(metrics)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Month {}", m.month)),
        ),
        rows[1],
    );

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Next month forecast: {}", money(&app.symbol, dash.forecast)),
            Style::default().fg(Color::Rgb(0xff, 0xaa, 0x00)).add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
    ];
    let top = dash.top_categories();
    if !top.is_empty() {
        lines.push(Line::raw("Biggest spending:"));
        for (i, c) in top.iter().enumerate() {
            lines.push(Line::raw(format!(
                "{}. {}: {}",
                i + 1,
                c.category,
                money(&app.symbol, c.total)
            )));
        }
    }
    f.render_widget(
        Paragraph::new(Text::from(lines))
            .block(Block::default().borders(Borders::ALL).title("Forecast")),
        rows[2],
    );
}

fn draw_charts(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    let tabs = Tabs::new(TABS.to_vec())
        .select(app.tab)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, rows[0]);

    if app.dashboard.transactions == 0 {
        f.render_widget(
            Paragraph::new("Waiting for data...")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            rows[1],
        );
        return;
    }

    match app.tab {
        0 => draw_balance_chart(f, app, rows[1]),
        1 => draw_category_chart(f, app, rows[1]),
        _ => draw_weekday_chart(f, app, rows[1]),
    }
}

fn draw_balance_chart(f: &mut Frame, app: &App, area: Rect) {
    let dash = &app.dashboard;
    let balances: Vec<(f64, f64)> = dash
        .monthly_balances
        .iter()
        .enumerate()
        .map(|(i, b)| (i as f64, b.balance))
        .collect();
    let trend: Vec<(f64, f64)> = dash
        .balance_trend
        .iter()
        .enumerate()
        .map(|(i, v)| (i as f64, *v))
        .collect();

    let values = balances.iter().chain(trend.iter()).map(|(_, y)| *y);
    let y_min = values.clone().fold(0.0f64, f64::min);
    let y_max = values.fold(0.0f64, f64::max);
    let pad = ((y_max - y_min) * 0.1).max(1.0);
    let (y_lo, y_hi) = (y_min - pad, y_max + pad);
    let x_max = (balances.len().saturating_sub(1)).max(1) as f64;

    let first = dash.monthly_balances.first().map(|b| b.month.to_string()).unwrap_or_default();
    let last = dash.monthly_balances.last().map(|b| b.month.to_string()).unwrap_or_default();

    let mut datasets = vec![Dataset::default()
        .name("balance")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&balances)];
    if !trend.is_empty() {
        datasets.push(
            Dataset::default()
                .name("trend")
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Yellow))
                .data(&trend),
        );
    }

    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title("Monthly balance"))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_max])
                .labels(vec![first, last]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([y_lo, y_hi])
                .labels(axis_labels(&app.symbol, y_lo, y_hi)),
        );
    f.render_widget(chart, area);
}

/// Labels for the bottom, middle and top of an axis. Ratatui spaces
/// them evenly, so the middle one is the midpoint of the bounds.
fn axis_labels(symbol: &str, lo: f64, hi: f64) -> Vec<String> {
    [lo, (lo + hi) / 2.0, hi]
        .into_iter()
        .map(|v| money(symbol, v))
        .collect()
}

fn draw_category_chart(f: &mut Frame, app: &App, area: Rect) {
    let totals = &app.dashboard.category_totals;
    let sum: f64 = totals.iter().map(|c| c.total).sum();

    let bars: Vec<Bar> = totals
        .iter()
        .map(|c| {
            let pct = if sum > 0.0 { c.total / sum * 100.0 } else { 0.0 };
            Bar::default()
                .label(Line::from(c.category.label()))
                .value(c.total.round() as u64)
                .text_value(format!("{} ({pct:.1}%)", money(&app.symbol, c.total)))
        })
        .collect();

    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title("Spending by category"))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Magenta))
        .value_style(Style::default().fg(Color::White))
        .data(BarGroup::default().bars(&bars));
    f.render_widget(chart, area);
}

fn draw_weekday_chart(f: &mut Frame, app: &App, area: Rect) {
    let bars: Vec<Bar> = app
        .dashboard
        .weekday_totals
        .iter()
        .zip(WEEKDAY_SHORT.iter().zip(WEEKDAY_COLORS))
        .map(|(w, (name, color))| {
            Bar::default()
                .label(Line::from(*name))
                .value(w.total.round() as u64)
                .style(Style::default().fg(color))
                .text_value(format!("{:.0}", w.total))
        })
        .collect();

    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title("Spending by weekday"))
        .bar_width(7)
        .bar_gap(2)
        .value_style(Style::default().fg(Color::Black).add_modifier(Modifier::BOLD))
        .data(BarGroup::default().bars(&bars));
    f.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_labels_follow_bounds() {
        assert_eq!(
            axis_labels("R$", -100.0, 500.0),
            vec!["-R$ 100.00", "R$ 200.00", "R$ 500.00"]
        );
        // symmetric range puts zero in the middle
        assert_eq!(axis_labels("R$", -50.0, 50.0)[1], "R$ 0.00");
    }

    #[test]
    fn test_build_sha_is_bare_commit_hash() {
        assert!(
            BUILD_SHA == "unknown"
                || (!BUILD_SHA.is_empty() && BUILD_SHA.chars().all(|c| c.is_ascii_hexdigit())),
            "{BUILD_SHA}"
        );
    }
}
