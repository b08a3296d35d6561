//! Domain services used by HTTP routes.
//!
//! Service modules own the outbound side of the save flow so route handlers
//! can stay focused on protocol translation.

pub mod relay;
