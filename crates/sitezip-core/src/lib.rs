pub mod config;
pub mod logging;

pub mod archive;
pub mod exchange;
pub mod export;
pub mod har;
pub mod site_path;
