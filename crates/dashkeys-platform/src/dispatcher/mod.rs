//! Global shortcut dispatch.
//!
//! The [`Dispatcher`] sits between host keydown events and the shortcut
//! registry. Every event yields a [`DispatchOutcome`] so the host binding
//! layer and the logs can see what happened.

mod processor;
mod types;

#[cfg(test)]
mod tests;

pub use processor::Dispatcher;
pub use types::DispatchOutcome;
