use crate::Screen;
use dioxus::prelude::*;
use dioxus_i18n::t;

fn tab_style(active: bool) -> &'static str {
    if active {
        "flex: 1; padding: 12px; margin: 0 5px; border: none; border-radius: 8px; cursor: pointer; font-size: 14px; text-align: center; background: #1e3a5f; color: #ffffff;"
    } else {
        "flex: 1; padding: 12px; margin: 0 5px; border: none; border-radius: 8px; cursor: pointer; font-size: 14px; text-align: center; background: #ffffff; color: #333;"
    }
}

#[component]
pub fn NavigationBar(current_screen: Screen, on_navigate: EventHandler<Screen>) -> Element {
    let nav_style = "display: flex; justify-content: space-around; padding: 10px; background: #f0f0f0; border-top: 1px solid #ddd;";

    rsx! {
        div {
            style: "{nav_style}",

            button {
                style: tab_style(matches!(current_screen, Screen::Home)),
                onclick: move |_| on_navigate.call(Screen::Home),
                "🏠 "
                {t!("nav-home")}
            }

            button {
                style: tab_style(matches!(current_screen, Screen::ReportMissing)),
                onclick: move |_| on_navigate.call(Screen::ReportMissing),
                "🔎 "
                {t!("nav-missing")}
            }

            button {
                style: tab_style(matches!(current_screen, Screen::ReportFound)),
                onclick: move |_| on_navigate.call(Screen::ReportFound),
                "🧒 "
                {t!("nav-found")}
            }

            button {
                style: tab_style(matches!(current_screen, Screen::Settings)),
                onclick: move |_| on_navigate.call(Screen::Settings),
                "⚙️ "
                {t!("nav-settings")}
            }
        }
    }
}
