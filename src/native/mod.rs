//! Native side - what the canvas widget hands us.

mod events;
mod keycode;

pub use events::*;
pub use keycode::Keycode;
