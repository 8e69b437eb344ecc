//! Command handlers, one module per command group.

mod assist;
mod init;
mod maintenance;
mod misc;
mod notes;
mod protection;

pub use assist::handle_summarize;
pub use init::handle_init;
pub use maintenance::{handle_check, handle_export};
pub use misc::handle_completions;
pub use notes::{
    handle_delete, handle_edit, handle_list, handle_new, handle_pin, handle_search, handle_show,
};
pub use protection::{handle_protect, handle_unlock};
