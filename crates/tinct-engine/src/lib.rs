//! Tinct engine crate.
//!
//! Color and blend handling for a batched 2D renderer: which blend equation
//! composites a texture correctly given its alpha encoding, and how a
//! `0xRRGGBB` tint plus alpha becomes the color a vertex carries.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`paint`] | `BlendMode`, correction table, tint premultiplication, `Color`, hex helpers |
//! | [`render`] | `wgpu` blend states, batched vertex format |
//! | [`logging`] | `init_logging`, `LoggingConfig` |
//!
//! # Quick start
//!
//! ```rust
//! use tinct_engine::paint::{BlendMode, correct_blend_mode, premultiply_tint};
//!
//! assert_eq!(correct_blend_mode(BlendMode::AddNpm, false), BlendMode::Add);
//! assert_eq!(premultiply_tint(0xFFFFFF, 0.5), 0x7F80_8080);
//! ```

pub mod logging;
pub mod paint;
pub mod render;
