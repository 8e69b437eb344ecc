//! Per-note password protection commands.

mod protect;
mod unlock;

pub use protect::handle_protect;
pub use unlock::handle_unlock;
