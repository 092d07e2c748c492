//! Application state module

mod animation;
mod app_state;
mod forms;

pub use animation::*;
pub use app_state::*;
pub use forms::*;
