mod settings;

pub use config::FileFormat;
pub use settings::{CatalogSettings, ErrorKindConfig};
