use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Sparkline},
    Frame,
};

use crate::analytics::DailyBudget;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_allowance, format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Summary cards
            Constraint::Length(3), // Insight
            Constraint::Min(10),   // Category chart
            Constraint::Length(3), // Daily net flow sparkline
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);
    render_insight(f, chunks[1], app);
    render_category_chart(f, chunks[2], app);
    render_flow_sparkline(f, chunks[3], app);
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let income_count = app.entries.iter().filter(|e| e.is_income()).count();
    let expense_count = app.entries.iter().filter(|e| e.is_expense()).count();

    render_card(
        f,
        cards[0],
        "Income",
        format_amount(app.totals.income),
        theme::GREEN,
        Some(format!("{income_count} entries")),
    );
    render_card(
        f,
        cards[1],
        "Expenses",
        format_amount(app.totals.expense),
        theme::RED,
        Some(format!("{expense_count} entries")),
    );
    render_card(
        f,
        cards[2],
        "Balance",
        format_amount(app.totals.balance),
        if app.totals.balance >= 0 {
            theme::GREEN
        } else {
            theme::RED
        },
        None,
    );

    let (value, color, subtitle) = match app.budget {
        None => (
            "n/a".to_string(),
            theme::TEXT_DIM,
            Some("current month only".to_string()),
        ),
        Some(DailyBudget::NoBasis) => (
            "$0.00".to_string(),
            theme::TEXT_DIM,
            Some("no income recorded".to_string()),
        ),
        Some(DailyBudget::OverBudget { deficit }) => (
            format_amount(deficit),
            theme::RED,
            Some("over budget".to_string()),
        ),
        Some(DailyBudget::Allowance(per_day)) => (
            format_allowance(per_day),
            theme::ACCENT,
            Some("per day left".to_string()),
        ),
    };
    render_card(f, cards[3], "Daily Budget", value, color, subtitle);
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: String,
    color: ratatui::style::Color,
    subtitle: Option<String>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    let sub_text = subtitle.unwrap_or_default();

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(sub_text, theme::dim_style())),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn render_insight(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            " Insight ",
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    let line = Line::from(vec![
        Span::raw(format!(" {} ", app.insight.icon)),
        Span::styled(app.insight.message, theme::insight_style()),
    ]);

    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_category_chart(f: &mut Frame, area: Rect, app: &App) {
    if app.charts.category_distribution.is_empty() {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                " Spending by Category ",
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            ));
        let msg = Paragraph::new(Line::from(Span::styled(
            "No spending this month. Add entries with :add",
            theme::dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let bars: Vec<Bar> = app
        .charts
        .category_distribution
        .iter()
        .take(10)
        .map(|(category, amount)| {
            let val = u64::try_from(*amount).unwrap_or(0);
            let label = truncate(category.as_str(), 10);
            Bar::default()
                .value(val)
                .label(Line::from(label))
                .style(Style::default().fg(theme::ACCENT))
                .value_style(
                    Style::default()
                        .fg(theme::TEXT)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::OVERLAY))
                .title(Span::styled(
                    " Spending by Category ",
                    Style::default()
                        .fg(theme::TEXT_DIM)
                        .add_modifier(Modifier::BOLD),
                )),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(10)
        .bar_gap(1)
        .bar_style(Style::default().fg(theme::ACCENT))
        .value_style(Style::default().fg(theme::TEXT));

    f.render_widget(chart, area);
}

fn render_flow_sparkline(f: &mut Frame, area: Rect, app: &App) {
    // Sparklines take unsigned data; shift so the worst day sits at zero.
    let floor = app
        .charts
        .daily_net_flow
        .iter()
        .map(|(_, net)| *net)
        .min()
        .unwrap_or(0)
        .min(0);
    let data: Vec<u64> = app
        .charts
        .daily_net_flow
        .iter()
        .map(|(_, net)| u64::try_from(net - floor).unwrap_or(0))
        .collect();

    let sparkline = Sparkline::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::OVERLAY))
                .title(Span::styled(
                    " Daily Net Flow ",
                    Style::default()
                        .fg(theme::TEXT_DIM)
                        .add_modifier(Modifier::BOLD),
                )),
        )
        .data(&data)
        .style(Style::default().fg(theme::YELLOW));

    f.render_widget(sparkline, area);
}
