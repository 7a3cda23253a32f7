//! Terminal counter: a single view whose only control adds one to a count.

pub mod cli;
pub mod config;
pub mod logging;
pub mod shutdown;
pub mod ui;
