//! Shared helpers for bridging DOM events into the editor engine.

pub mod canvas_input;
