//! Fixed branding values shared by the logo components.

/// Remote location of the OBZ.ai brand mark.
pub const LOGO_URL: &str = "https://obz.ai/logo/obzai-logo-dark.png";

pub const LOGO_ALT: &str = "OBZ.ai Logo";

/// Height and padding for the default (light context) logo.
pub const LOGO_CLASS: &str = "h-8 px-2 py-1";

/// Fixed width for the dark-background logo.
pub const LOGO_DARK_BACKGROUND_WIDTH: &str = "200px";
