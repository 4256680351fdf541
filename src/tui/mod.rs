mod app;
pub mod board;
pub mod command;
mod input;
pub mod keymap;

pub use app::{dispatch, App, Dispatch};
pub use board::BoardState;
pub use command::{Command, Effect};
pub use input::{InputBuffer, InputMode, DEFAULT_CHAR_LIMIT};
