//! Segment Builder
//!
//! Terminal form for naming a user segment, attaching an ordered list of
//! schema attributes and submitting the result to a remote endpoint.
//!
//! Pure core (`model`, `state`) with an impure shell (`submit`, `view`,
//! `logging`, `config`).

pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod submit;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
