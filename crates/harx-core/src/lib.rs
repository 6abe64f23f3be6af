pub mod config;
pub mod logging;

pub mod content;
pub mod error;
pub mod extract;
pub mod har;
pub mod storage;
pub mod url_model;

pub use error::ExtractError;
