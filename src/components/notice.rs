use crate::models::Notice;
use dioxus::prelude::*;
use dioxus_i18n::t;
use std::time::Duration;

/// How long a notice stays on screen
const NOTICE_DISPLAY: Duration = Duration::from_secs(6);

/// Transient notification for the latest submission outcome.
///
/// Reads the `Signal<Option<Notice>>` context. A newer notice replaces the
/// current one; each notice clears itself only if it is still the one shown.
#[component]
pub fn NoticeBanner() -> Element {
    let mut notice = use_context::<Signal<Option<Notice>>>();

    use_effect(move || {
        if let Some(current) = notice() {
            spawn(async move {
                tokio::time::sleep(NOTICE_DISPLAY).await;
                let still_shown = notice
                    .peek()
                    .as_ref()
                    .is_some_and(|n| n.created_at == current.created_at);
                if still_shown {
                    notice.set(None);
                }
            });
        }
    });

    let Some(current) = notice() else {
        return rsx! {};
    };

    let style = if current.is_destructive() {
        "background: #fee; border: 1px solid #fcc; color: #c33; padding: 12px 16px; margin: 12px; border-radius: 8px; font-size: 14px; box-shadow: 0 2px 6px rgba(0,0,0,0.1);"
    } else {
        "background: #efe; border: 1px solid #cfc; color: #276127; padding: 12px 16px; margin: 12px; border-radius: 8px; font-size: 14px; box-shadow: 0 2px 6px rgba(0,0,0,0.1);"
    };
    let shown_at = current
        .created_at
        .format(&t!("notice-time-format"))
        .to_string();

    rsx! {
        div { style: "{style}",
            div { style: "display: flex; justify-content: space-between; align-items: center; gap: 12px;",
                strong { "{current.title}" }
                button {
                    style: "background: none; border: none; font-size: 16px; cursor: pointer; color: inherit;",
                    onclick: move |_| notice.set(None),
                    "✕"
                }
            }
            p { style: "margin: 6px 0 0 0;", "{current.description}" }
            p { style: "margin: 4px 0 0 0; font-size: 11px; opacity: 0.7;", "{shown_at}" }
        }
    }
}
