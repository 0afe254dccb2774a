//! Form state for the store creation view

mod field;
mod form_state;

pub use field::*;
pub use form_state::*;
