use crate::app_state::AppState;
use crate::config::{self, AppConfig, SERVICE_URL_ENV};
use crate::Screen;
use dioxus::prelude::*;
use dioxus_i18n::t;

#[component]
pub fn SettingsScreen(on_navigate: EventHandler<Screen>) -> Element {
    let mut app = use_context::<Signal<AppState>>();
    let mut service_url = use_signal(|| app.peek().config.service_url.clone());
    // Ok = confirmation, Err = problem
    let mut status = use_signal(|| None::<Result<String, String>>);
    let env_override = std::env::var(SERVICE_URL_ENV).ok().filter(|v| !v.trim().is_empty());

    let mut apply = move |cfg: AppConfig| {
        let state = AppState::from_config(cfg.clone());
        if let Some(problem) = state.problem.clone() {
            status.set(Some(Err(problem)));
            return;
        }
        match config::save_config(&cfg) {
            Ok(()) => {
                log::info!("Service URL changed to {}", cfg.service_url);
                app.set(state);
                status.set(Some(Ok(t!("settings-saved"))));
            }
            Err(e) => {
                log::error!("Saving configuration failed: {}", e);
                status.set(Some(Err(e.user_message())));
            }
        }
    };

    let save = move |_| {
        let mut cfg = app.peek().config.clone();
        cfg.service_url = service_url().trim().to_string();
        apply(cfg);
    };

    let restore_defaults = move |_| {
        let defaults = AppConfig::default();
        service_url.set(defaults.service_url.clone());
        apply(defaults);
    };

    rsx! {
        div { style: "padding: 16px; max-width: 600px; margin: 0 auto;",
            h1 { style: "color: #1e3a5f; font-size: 24px; font-weight: 700; margin: 0 0 24px 0;",
                "⚙️ "
                {t!("settings-title")}
            }

            match status() {
                Some(Ok(message)) => rsx! {
                    div { style: "background: #efe; border: 1px solid #cfc; color: #3a3; padding: 12px; margin-bottom: 16px; border-radius: 8px; font-size: 14px;",
                        "✅ {message}"
                    }
                },
                Some(Err(message)) => rsx! {
                    div { style: "background: #fee; border: 1px solid #fcc; color: #c33; padding: 12px; margin-bottom: 16px; border-radius: 8px; font-size: 14px;",
                        "⚠️ {message}"
                    }
                },
                None => rsx! {},
            }

            div { class: "card",
                div { style: "margin-bottom: 20px;",
                    label { style: "display: block; margin-bottom: 6px; font-weight: 600; color: #333; font-size: 14px;",
                        {t!("settings-service-url")}
                    }
                    input {
                        r#type: "url",
                        class: "input",
                        placeholder: "http://localhost:5000",
                        value: "{service_url}",
                        oninput: move |e| service_url.set(e.value()),
                    }
                    p { style: "margin: 4px 0 0 0; font-size: 12px; color: #666;",
                        {t!("settings-service-url-hint")}
                    }
                    if let Some(value) = env_override {
                        p { style: "margin: 8px 0 0 0; font-size: 12px; color: #b45309;",
                            {t!("settings-env-override", var: SERVICE_URL_ENV, value: value)}
                        }
                    }
                }

                div { style: "display: flex; gap: 12px;",
                    button { class: "btn-success", style: "flex: 1; padding: 14px;", onclick: save,
                        "💾 "
                        {t!("action-save")}
                    }
                    button { class: "btn-secondary", style: "flex: 1; padding: 14px;", onclick: restore_defaults,
                        {t!("action-restore-defaults")}
                    }
                }
            }

            div { style: "margin-top: 16px; margin-bottom: 96px;",
                button {
                    class: "btn-primary",
                    style: "width: 100%; padding: 12px;",
                    onclick: move |_| on_navigate.call(Screen::Home),
                    "🏠 "
                    {t!("nav-home")}
                }
            }
        }
    }
}
