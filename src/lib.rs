pub mod cli;
pub mod domain;
pub mod fetch;
pub mod notebook;
pub mod utils;
