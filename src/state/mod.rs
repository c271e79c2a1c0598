//! Application state module

mod app_state;
mod forms;
mod toggles;

pub use app_state::*;
pub use forms::*;
pub use toggles::*;
