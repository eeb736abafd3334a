use crate::app_state::AppState;
use dioxus::prelude::*;
use dioxus_i18n::t;

#[derive(Clone, PartialEq)]
enum ServiceStatus {
    Checking,
    Reachable(u16),
    Unreachable(String),
    NotConfigured,
}

/// Shows whether the matching service answers. Rechecks whenever the
/// configured client changes.
#[component]
pub fn ServiceStatusCard() -> Element {
    let app = use_context::<Signal<AppState>>();
    let mut status = use_signal(|| ServiceStatus::Checking);

    let mut check = move || {
        let client = app.read().client.clone();
        status.set(ServiceStatus::Checking);
        spawn(async move {
            let result = match client {
                None => ServiceStatus::NotConfigured,
                Some(client) => match client.ping().await {
                    Ok(code) => ServiceStatus::Reachable(code),
                    Err(e) => {
                        log::warn!("Matching service not reachable: {}", e);
                        ServiceStatus::Unreachable(e.to_string())
                    }
                },
            };
            status.set(result);
        });
    };

    use_effect(move || check());

    let service_url = app.read().config.service_url.clone();

    rsx! {
        div { class: "card", style: "margin-bottom: 16px;",
            h2 { style: "margin: 0 0 12px 0; font-size: 18px; color: #333;",
                {t!("service-status-title")}
            }
            p { style: "font-size: 12px; color: #666; margin: 0 0 12px 0; word-break: break-all;",
                "{service_url}"
            }
            match status() {
                ServiceStatus::Checking => rsx! {
                    div { style: "display: flex; align-items: center; gap: 12px;",
                        div { style: "font-size: 24px;", "🔄" }
                        p { style: "margin: 0; font-weight: 600; font-size: 14px;", {t!("service-checking")} }
                    }
                },
                ServiceStatus::Reachable(code) => rsx! {
                    div { style: "display: flex; align-items: center; gap: 12px;",
                        div { style: "font-size: 24px;", "✅" }
                        p { style: "margin: 0; font-weight: 600; font-size: 14px; color: #2e7d32;",
                            {t!("service-online", status: code)}
                        }
                    }
                },
                ServiceStatus::Unreachable(error) => rsx! {
                    div {
                        div { style: "display: flex; align-items: center; gap: 12px; margin-bottom: 12px;",
                            div { style: "font-size: 24px;", "❌" }
                            div {
                                p { style: "margin: 0; font-weight: 600; font-size: 14px; color: #c62828;",
                                    {t!("service-offline")}
                                }
                                p { style: "margin: 0; font-size: 12px; color: #666;", "{error}" }
                            }
                        }
                        button { class: "btn-primary", style: "width: 100%;", onclick: move |_| check(),
                            "🔄 "
                            {t!("action-retry")}
                        }
                    }
                },
                ServiceStatus::NotConfigured => rsx! {
                    p { style: "margin: 0; font-size: 14px; color: #c62828;", {t!("service-not-configured")} }
                },
            }
        }
    }
}
