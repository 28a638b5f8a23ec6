pub mod json;
pub mod logging;
pub mod text;

pub use json::{display_string, is_truthy, to_spaced_json};
pub use logging::init_logging;
pub use text::{TRUNCATION_MARKER, char_prefix, trim_text, truncate};
