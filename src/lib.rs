//! VimQuest: a small terminal arcade game with vim-style modal controls.
//!
//! The library holds every piece of game logic so it can be driven by tests;
//! the binary only owns the terminal and the fixed-rate loop.

pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod error;
pub mod input;
pub mod levels;
pub mod player;
pub mod screen;
pub mod viewport;
