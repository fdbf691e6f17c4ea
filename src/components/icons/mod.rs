use dioxus::prelude::*;

mod logo;

pub use logo::*;

/// Props shared by every icon component.
///
/// Host layouts pass the same shape to any icon. Components that render a
/// fixed asset (the logos) accept it and ignore it.
#[derive(Props, Clone, PartialEq, Default, Debug)]
pub struct IconProps {
    #[props(default)]
    pub class: String,
    /// Edge length in pixels, 0 when unset.
    #[props(default)]
    pub size: u32,
    #[props(default)]
    pub title: String,
}
