pub mod driver;
pub mod driver_config;
pub mod report;

pub use driver::{run_driver, DriverOutcome, DEMONSTRATIONS};
pub use driver_config::{ConfigError, DriverConfig, OutputFormat};
pub use report::ValidationReport;
