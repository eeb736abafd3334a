use dioxus::prelude::*;
use dioxus_i18n::prelude::use_init_i18n;

mod app_state;
mod components;
mod config;
mod error;
mod i18n;
mod logging;
mod models;
mod services;

use app_state::AppState;
use components::{
    HomeScreen, NavigationBar, NoticeBanner, ReportFoundScreen, ReportMissingScreen,
    SettingsScreen,
};
use models::Notice;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    logging::init_logging();
    log::info!("Starting Reunite {}", env!("CARGO_PKG_VERSION"));
    dioxus::launch(App);
}

/// Screen navigation
#[derive(Clone, PartialEq, Debug)]
pub enum Screen {
    Home,
    ReportMissing,
    ReportFound,
    Settings,
}

#[component]
fn App() -> Element {
    use_init_i18n(i18n::init_i18n);
    use_context_provider(|| Signal::new(AppState::load()));
    use_context_provider(|| Signal::new(None::<Notice>));
    let mut current_screen = use_signal(|| Screen::Home);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div { style: "display: flex; flex-direction: column; height: 100vh; font-family: sans-serif;",

            NoticeBanner {}

            // Main Content
            div { style: "flex: 1; overflow-y: auto;",
                match current_screen() {
                    Screen::Home => rsx! {
                        HomeScreen { on_navigate: move |s| current_screen.set(s) }
                    },
                    Screen::ReportMissing => rsx! {
                        ReportMissingScreen { on_navigate: move |s| current_screen.set(s) }
                    },
                    Screen::ReportFound => rsx! {
                        ReportFoundScreen { on_navigate: move |s| current_screen.set(s) }
                    },
                    Screen::Settings => rsx! {
                        SettingsScreen { on_navigate: move |s| current_screen.set(s) }
                    },
                }
            }

            // Bottom Navigation Bar
            NavigationBar {
                current_screen: current_screen(),
                on_navigate: move |screen| current_screen.set(screen),
            }
        }
    }
}
