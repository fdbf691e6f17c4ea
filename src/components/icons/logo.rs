use dioxus::logger::tracing::trace;
use dioxus::prelude::*;

use super::IconProps;
use crate::constants::{LOGO_ALT, LOGO_CLASS, LOGO_DARK_BACKGROUND_WIDTH, LOGO_URL};

/// Brand mark for light surfaces such as the header bar.
///
/// Takes `IconProps` so it can sit wherever an icon is expected; the props
/// are not read and the markup never changes.
pub fn OhifLogo(_props: IconProps) -> Element {
    trace!("rendering logo (default variant)");

    rsx! {
        img { src: LOGO_URL, class: LOGO_CLASS, alt: LOGO_ALT }
    }
}

/// Brand mark for dark surfaces. Fixed pixel width, no padding classes.
pub fn OhifLogoColorDarkBackground(_props: IconProps) -> Element {
    trace!("rendering logo (dark background variant)");

    rsx! {
        img { src: LOGO_URL, width: LOGO_DARK_BACKGROUND_WIDTH, alt: LOGO_ALT }
    }
}
