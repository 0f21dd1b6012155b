// Generation module - the simulated AI assistant
//
// Nothing here talks to a network. A request is validated, the session goes
// busy, a fixed body is picked by mode and handed back after a fixed delay.
//
// - mode:       content category (text, image, code)
// - canned:     the one literal body per mode
// - controller: idle/busy state machine and the last response
// - error:      typed trigger errors

mod canned;
mod controller;
mod error;
mod mode;

pub use canned::canned_response;
pub use controller::{DemoSession, GenerationState, PendingGeneration, Response, DEFAULT_LATENCY};
pub use error::GenerationError;
pub use mode::Mode;
