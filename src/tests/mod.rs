//! Internal test modules - whitebox tests with crate access
//!
//! Drive a `TuiApp<TestBackend>` with key events and assert on both the
//! builder state and the rendered screen.

mod notification_timing;
