pub mod config;
pub mod logging;

pub mod extract;
pub mod format;
pub mod pair;
pub mod reader;
pub mod url_model;
