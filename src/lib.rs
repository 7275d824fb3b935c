//! Solar - current weather for any location, in the terminal
//!
//! Unidirectional store: actions go through a pure reducer, which declares
//! effects; the binary runs effects as async tasks.

pub mod action;
pub mod api;
pub mod components;
pub mod condition;
pub mod config;
pub mod effect;
pub mod logging;
pub mod reducer;
pub mod sprites;
pub mod state;
pub mod viewport;
