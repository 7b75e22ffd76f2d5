//! Host side - the multimedia library's normalized event model.

mod keysym;
mod queue;

pub use keysym::{Key, Keysym, Modifiers};
pub use queue::{ButtonState, DEFAULT_HOST_QUEUE_LEN, EventSink, HostEvent, HostEventQueue};
