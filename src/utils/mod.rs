//! Shared helpers: W3C dates, XML escaping, message formatting.

pub mod date;
pub mod text;

pub use date::{W3cDateTime, is_w3c_datetime};
pub use text::{escape_xml, format_decimal, plural_count, plural_s};
