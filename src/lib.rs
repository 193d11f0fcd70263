pub mod constants;
pub mod types;
pub mod error;
pub mod image_utils;
pub mod favicon;
pub mod convert;
pub mod logging;

pub use error::{AssetError, MechanismError};
pub use favicon::generate_favicons;
pub use convert::{default_mechanisms, report_summary, run_conversions, ConvertSummary, Mechanism};
