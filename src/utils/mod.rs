pub mod file;
pub mod naming;
pub mod logging;

pub use file::{copy_into, ensure_directory_exists, extensionless_files};
pub use naming::{clean_name, derive_filename};
pub use logging::init_logging;
