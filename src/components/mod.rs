//! UI Components
//!
//! One Leptos component per widget.

mod carousel;
mod guessing_game;
mod todo_list;

pub use carousel::Carousel;
pub use guessing_game::GuessingGame;
pub use todo_list::TodoList;
