//! Small pure helpers shared across services.

mod sanitize;

pub use sanitize::{sanitize_input, MAX_INPUT_LEN};
