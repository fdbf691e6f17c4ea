//! OBZ.ai branding components for Dioxus layouts.
//!
//! The binary entry point lives in `main.rs`; this root re-exports the
//! components so tests and host layouts can import them.

#[allow(non_snake_case)]
pub mod components;
pub mod constants;
