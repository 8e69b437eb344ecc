//! Note lifecycle commands.

mod delete;
mod edit;
mod list;
mod new;
mod pin;
mod search;
mod show;

pub use delete::handle_delete;
pub use edit::handle_edit;
pub use list::handle_list;
pub use new::handle_new;
pub use pin::handle_pin;
pub use search::handle_search;
pub use show::handle_show;
