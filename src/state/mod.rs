//! Application state module

mod app_state;
mod board;
mod forms;
mod toast;

pub use app_state::*;
pub use board::*;
pub use forms::*;
pub use toast::*;
