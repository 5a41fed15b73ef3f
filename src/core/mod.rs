mod error;
mod logger;
mod params;
mod record;

pub use error::FnProxyError;
pub use logger::setup_logging;
pub use params::{IntParam, TestDataParams};
pub use record::Record;
