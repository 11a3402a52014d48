//! Menu state of the simulated conversation

use super::option::Report;
use super::script;
use serde::{Deserialize, Serialize};

/// Which menu the simulated bot is currently showing.
///
/// The state always determines the option set of the last bot message in
/// the transcript (see [`MenuState::option_ids`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MenuState {
    /// Three top-level categories
    #[default]
    Root,
    SalesMenu,
    UsersMenu,
    DbMenu,
    /// A report is on screen; offers download or back
    ReportView { report: Report },
    /// Download confirmed; only restart is offered
    Downloaded,
    /// An unrecognized id was selected; generic menu
    Fallback,
}

impl MenuState {
    /// Short name for logs and notifications
    pub fn name(&self) -> &'static str {
        match self {
            MenuState::Root => "root",
            MenuState::SalesMenu => "sales_menu",
            MenuState::UsersMenu => "users_menu",
            MenuState::DbMenu => "db_menu",
            MenuState::ReportView { .. } => "report_view",
            MenuState::Downloaded => "downloaded",
            MenuState::Fallback => "fallback",
        }
    }

    /// Option ids the bot offers in this state
    pub fn option_ids(&self) -> Vec<String> {
        script::options_for(self)
            .into_iter()
            .map(|option| option.id)
            .collect()
    }
}
