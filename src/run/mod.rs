mod cli;
mod tui;

pub(crate) use cli::{as_cli, expand_home};
pub(crate) use tui::as_tui;
