use crate::app_state::AppState;
use crate::components::ServiceStatusCard;
use crate::config;
use crate::Screen;
use dioxus::prelude::*;
use dioxus_i18n::t;

#[component]
pub fn HomeScreen(on_navigate: EventHandler<Screen>) -> Element {
    let app = use_context::<Signal<AppState>>();
    let problem = app.read().problem.clone();

    rsx! {
        div { style: "padding: 16px; max-width: 600px; margin: 0 auto; min-height: 100vh; background: #f5f5f5;",
            h1 { style: "color: #1e3a5f; text-align: center; margin-bottom: 8px; margin-top: 48px; font-size: 26px; font-weight: 700;",
                "🛡️ "
                {t!("app-title")}
            }
            p { style: "text-align: center; color: #555; margin: 0 0 24px 0; font-size: 14px;",
                {t!("app-subtitle")}
            }

            if let Some(problem) = problem {
                div { class: "card-header",
                    h2 { style: "margin: 0 0 12px 0; font-size: 18px; color: #333;", {t!("home-status")} }
                    p { style: "font-size: 14px; color: #c33; margin: 0;", "⚠️ {problem}" }
                }
            }

            div { class: "card", style: "margin-bottom: 16px;",
                h2 { style: "margin: 0 0 16px 0; font-size: 18px; color: #333;", {t!("home-quick-actions")} }
                div { style: "display: flex; flex-direction: column; gap: 12px;",
                    button {
                        class: "btn-primary",
                        style: "padding: 16px; font-size: 16px; display: flex; align-items: center; justify-content: center;",
                        onclick: move |_| on_navigate.call(Screen::ReportMissing),
                        "🔎 "
                        {t!("home-report-missing")}
                    }
                    button {
                        class: "btn-success",
                        style: "padding: 16px; font-size: 16px; display: flex; align-items: center; justify-content: center;",
                        onclick: move |_| on_navigate.call(Screen::ReportFound),
                        "🧒 "
                        {t!("home-report-found")}
                    }
                }
            }

            ServiceStatusCard {}

            div { class: "card", style: "margin-bottom: 16px;",
                button {
                    class: "btn-secondary",
                    style: "width: 100%; padding: 16px; font-size: 16px; display: flex; align-items: center; justify-content: center;",
                    onclick: move |_| on_navigate.call(Screen::Settings),
                    "⚙️ "
                    {t!("nav-settings")}
                }
            }

            div { style: "background: #f8f9fa; padding: 16px; margin: 16px 0 96px 0; border-radius: 8px; border: 1px solid #e0e0e0;",
                h3 { style: "margin: 0 0 12px 0; font-size: 14px; color: #666; font-weight: 600;",
                    "ℹ️ "
                    {t!("home-system-info")}
                }
                p { style: "font-size: 12px; color: #666; margin: 4px 0;",
                    "OS: {std::env::consts::OS}"
                }
                p { style: "font-size: 12px; color: #666; margin: 4px 0;",
                    "Arch: {std::env::consts::ARCH}"
                }
                p { style: "font-size: 11px; color: #888; margin: 4px 0; word-break: break-all;",
                    "Config: {config::get_config_path().display()}"
                }
            }
        }
    }
}
