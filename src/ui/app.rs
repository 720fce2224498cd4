use anyhow::Result;
use chrono::Local;

use crate::analytics::{
    aggregate, build_chart_series, filter_by_period, project_for_view, select_insight,
    sort_for_display, ChartSeries, DailyBudget, Insight, Totals,
};
use crate::db::Database;
use crate::models::{Entry, PeriodKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Entries,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Dashboard, Self::Entries]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Entries => write!(f, "Entries"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone)]
pub(crate) enum PendingAction {
    DeleteEntry { id: i64, text: String },
    ResetLedger,
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    /// Month in view; `None` shows the whole ledger.
    pub(crate) period: Option<PeriodKey>,

    // Dashboard figures, all derived from the current view
    pub(crate) totals: Totals,
    /// `None` unless the month in view is the one today falls in.
    pub(crate) budget: Option<DailyBudget>,
    pub(crate) charts: ChartSeries,
    pub(crate) insight: Insight,

    // Entries
    pub(crate) all_entries: Vec<Entry>,
    /// The slice of `all_entries` inside `period`, newest first.
    pub(crate) entries: Vec<Entry>,
    pub(crate) entry_index: usize,
    pub(crate) entry_scroll: usize,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,
            period: Some(PeriodKey::current()),

            totals: Totals::default(),
            budget: None,
            charts: ChartSeries::default(),
            insight: select_insight(0, 0, &[], &mut rand::thread_rng()),

            all_entries: Vec::new(),
            entries: Vec::new(),
            entry_index: 0,
            entry_scroll: 0,

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        }
    }

    /// Reload the ledger snapshot, re-scope it to the month in view and
    /// clamp the cursor to the result.
    pub(crate) fn refresh_entries(&mut self, db: &Database) -> Result<()> {
        self.all_entries = db.get_entries(None)?;
        let mut view = filter_by_period(&self.all_entries, self.period);
        sort_for_display(&mut view);
        self.entries = view;
        if self.entry_index >= self.entries.len() && !self.entries.is_empty() {
            self.entry_index = self.entries.len() - 1;
        }
        Ok(())
    }

    /// Recompute every dashboard figure from a fresh snapshot. Which
    /// insight rule fires depends only on the data; its phrasing may
    /// vary between refreshes.
    pub(crate) fn refresh_dashboard(&mut self, db: &Database) -> Result<()> {
        self.refresh_entries(db)?;
        self.totals = aggregate(&self.entries);
        self.budget = project_for_view(
            self.period,
            self.totals.income,
            self.totals.expense,
            Local::now().date_naive(),
        );
        self.charts = build_chart_series(&self.entries);
        self.insight = select_insight(
            self.totals.income,
            self.totals.expense,
            &self.entries,
            &mut rand::thread_rng(),
        );
        Ok(())
    }

    /// Rows the entries table can show; kept in step with the frame by
    /// the draw loop.
    pub(crate) fn entry_page(&self) -> usize {
        self.visible_rows.max(1)
    }

    pub(crate) fn period_label(&self) -> String {
        self.period
            .map_or_else(|| "All time".into(), |p| p.to_string())
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
