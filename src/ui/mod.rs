pub mod layout;
mod menu;
mod quiz;
mod result;

pub use layout::{calculate_quiz_chunks, calculate_result_chunks};
pub use menu::draw_menu;
pub use quiz::{draw_quit_confirmation, draw_quiz};
pub use result::draw_result;
