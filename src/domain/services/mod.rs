//! Domain Services
//!
//! Stateless helpers used while composing headers.

mod svg_check;
mod template;

pub use svg_check::{check_well_formed, MalformedXml};
pub use template::{HeaderTemplate, GENERATED_MARKER, INCLUDE_GUARD};
