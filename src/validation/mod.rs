//! Input validation framework
//!
//! Pure validators for every field value that crosses the boundary between
//! the operator, the database and the bot. Each validator trims and
//! normalizes before matching and returns the normalized form on success.

pub mod checksum;
pub mod fields;
pub mod result;

pub use checksum::fiscal_code_check_char;
pub use fields::{
    sanitize_printable, validate_date, validate_fiscal_code, validate_order_id, validate_time,
};
pub use result::ValidationResult;
