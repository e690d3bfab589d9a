//! Connection handlers

pub mod websocket;
