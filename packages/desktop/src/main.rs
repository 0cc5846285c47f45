use dioxus::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    // VOYAGES_BACKEND_URL may come from a local .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting Vessel Tracker desktop");
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new().with_window(
                dioxus::desktop::WindowBuilder::new()
                    .with_title("Vessel Tracker")
                    .with_inner_size(dioxus::desktop::LogicalSize::new(1024.0, 768.0)),
            ),
        )
        .launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        ui::AppShell {}
    }
}
