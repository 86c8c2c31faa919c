//! Background tasks that feed results back into the event loop.

pub mod push;
pub mod refresh;
