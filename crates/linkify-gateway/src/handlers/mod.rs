mod fallback;
mod link;

pub use fallback::{fallback_handler, HOME_PAGE};
pub use link::{
    clear_all_handler, list_all_handler, list_private_handler, list_public_handler,
    is_shorten_path, redirect_handler, shorten_handler,
};
