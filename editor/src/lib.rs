//! Canvas annotation engine for the picmark image editor.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of the drawing surface: translating raw DOM input events
//! into annotation-path and view mutations, maintaining the clamped pan/zoom
//! transform between screen space and image space, and rendering the image
//! plus its point overlay. The host UI layer is responsible only for wiring
//! DOM events to the editor and shipping the finished point list to the save
//! relay.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level editor and testable [`engine::EditorCore`] |
//! | [`view`] | Fit/pan/zoom transform and coordinate conversions |
//! | [`path`] | Ordered annotation-point store and polygon-closure test |
//! | [`input`] | Input event types and the pan-gesture state |
//! | [`render`] | Image + overlay rendering |
//! | [`consts`] | Shared constants (closure tolerance, zoom step, styling) |

pub mod consts;
pub mod engine;
pub mod input;
pub mod path;
pub mod render;
pub mod view;
