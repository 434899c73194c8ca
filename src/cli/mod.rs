//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod add;
pub mod category;
pub mod config;
pub mod create;
pub mod filter;
pub mod status;

pub use add::{handle_add_command, AddArgs};
pub use category::handle_categories_command;
pub use config::handle_config_command;
pub use create::{handle_create_command, CreateArgs};
pub use filter::{handle_filter_command, FilterArgs};
pub use status::{handle_status_command, StatusArgs};

use chrono::{Local, NaiveDate};

/// Today's date in local time
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}
