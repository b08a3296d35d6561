//! Network layer: the save call to the relay.

pub mod api;
