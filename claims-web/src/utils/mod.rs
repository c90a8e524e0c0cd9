//! Helpers that do not depend on the DOM.

pub mod constants;
pub mod format;
