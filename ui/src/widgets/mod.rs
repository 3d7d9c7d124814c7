// This file makes the widget modules available to the rest of the application.

pub mod account_summary;
pub mod signal_table;
