mod favicon;
mod convert;
mod manifest;

pub use favicon::{FaviconConfig, FaviconReport, GeneratedFile, PngTarget};
pub use convert::{ConvertJob, IconConvertConfig};
pub use manifest::{ManifestIcon, WebManifest};
