//! Output formatting for recommendation reports

pub mod console;
pub mod formatter;
