pub mod csv_loader;
pub mod edition_config;
pub mod logging;
pub mod report;
pub mod sample;
