use crate::components::{OhifLogo, OhifLogoColorDarkBackground};
use dioxus::logger::tracing::info;
use dioxus::prelude::*;

/// Preview shell: each logo variant on the surface it is meant for.
#[component]
pub fn App() -> Element {
    use_hook(|| info!("branding preview mounted"));

    rsx! {
        div { class: "min-h-screen flex flex-col bg-zinc-100",
            header { class: "flex items-center gap-3 bg-white border-b border-zinc-200 px-4 py-2",
                OhifLogo {}
                span { class: "text-sm text-zinc-500", "Light header" }
            }
            section { class: "flex flex-1 flex-col items-center justify-center gap-4 bg-zinc-950 p-8",
                OhifLogoColorDarkBackground {}
                span { class: "text-sm text-zinc-400", "Dark background" }
            }
        }
    }
}
