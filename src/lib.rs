//! Grid snake engine driven by host frames and key input.
//!
//! [`engine::Engine`] is the host-facing entry point: build it with a
//! [`surface::Surface`], forward keys to `control`, call `play` once per
//! frame. [`game::GameState`] is the headless simulation underneath.

pub mod canvas;
pub mod config;
pub mod engine;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod rules;
pub mod snake;
pub mod surface;
pub mod terminal_runtime;
pub mod ui;
