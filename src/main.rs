use dioxus::logger::tracing::Level;
use obzai_branding::components::App;

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {err}");
    }
    dioxus::launch(App);
}
