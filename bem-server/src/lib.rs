mod app;
mod config;
mod report;
mod version;

pub use app::{run, Exit};
pub use config::{load, AppConfig};
pub use report::{Report, VerdictView};
pub use version::version;
