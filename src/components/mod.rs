//! The components module contains all shared components for our app.

mod app;
mod icons;

pub use app::*;
pub use icons::*;
