pub mod artwork;
pub mod callback;
pub mod keyboard;
pub mod menu;
pub mod text;

pub use artwork::{format_caption, send_artwork, send_results};
pub use callback::callback_handler;
pub use keyboard::{artist_keyboard, language_keyboard, main_menu_keyboard, period_keyboard};
pub use menu::{help, random_artwork, show_main_menu, start};
pub use text::handle_search_text;
