//! Store maintenance: integrity check and export.

mod check;
mod export;

pub use check::handle_check;
pub use export::handle_export;
