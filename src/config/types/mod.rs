//! Configuration utility types.
//!
//! | Module  | Purpose                                   |
//! |---------|-------------------------------------------|
//! | `error` | ConfigError, aggregated diagnostics       |
//! | `field` | Field paths used to point at bad options  |

mod error;
mod field;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use field::{FieldPath, fields};
