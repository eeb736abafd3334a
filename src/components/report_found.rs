use crate::app_state::AppState;
use crate::components::form_parts::{FieldError, PhotoPreviews, HINT_STYLE, LABEL_STYLE};
use crate::components::MatchResultCard;
use crate::error::AppError;
use crate::models::{fields, FoundFormState, Notice, Severity};
use crate::Screen;
use dioxus::prelude::*;
use dioxus_i18n::t;

#[component]
pub fn ReportFoundScreen(on_navigate: EventHandler<Screen>) -> Element {
    let app = use_context::<Signal<AppState>>();
    let mut notice = use_context::<Signal<Option<Notice>>>();
    let controller = use_hook(|| app.peek().controller());
    let mut form = use_signal(FoundFormState::new);
    let mut pick_error = use_signal(|| None::<String>);

    let pick_photo = move |_| {
        spawn(async move {
            match photo_selection::pick_image().await {
                Ok(Some(photo)) => {
                    pick_error.set(None);
                    form.write().select_photos(vec![photo]);
                }
                Ok(None) => {}
                Err(e) => {
                    log::warn!("Photo selection failed: {}", e);
                    pick_error.set(Some(t!("error-photo-pick", error: AppError::from(e).user_message())));
                }
            }
        });
    };

    let submit = move |_| {
        let Some(controller) = controller.clone() else {
            notice.set(Some(Notice::new(
                "Error",
                t!("error-service-unavailable"),
                Severity::Destructive,
            )));
            return;
        };
        if !form.write().begin_submission() {
            return;
        }
        let (draft, photo) = {
            let state = form.read();
            (state.draft.clone(), state.photos.first().cloned())
        };

        spawn(async move {
            let outcome = controller.submit_found(&draft, photo.as_ref()).await;
            form.write().finish_submission(&outcome);
            if let Some(n) = outcome.notice() {
                notice.set(Some(n));
            }
        });
    };

    let (draft, errors, previews, last_match, in_flight) = {
        let state = form.read();
        (
            state.draft.clone(),
            state.errors.clone(),
            state.previews.clone(),
            state.last_match.clone(),
            state.in_flight,
        )
    };
    let error_for = |field: &str| errors.get(field).map(str::to_string);
    let mole_hint = draft.mentions_mole();

    rsx! {
        div { style: "padding: 16px; max-width: 600px; margin: 0 auto;",
            div { style: "display: flex; align-items: center; margin-bottom: 24px;",
                h1 { style: "color: #1e3a5f; font-size: 24px; font-weight: 700; margin: 0;",
                    "🧒 "
                    {t!("found-title")}
                }
            }

            if let Some(report) = last_match {
                MatchResultCard { report }
            }

            div { class: "card",
                div { style: "display: flex; gap: 12px;",
                    div { style: "flex: 1; margin-bottom: 20px;",
                        label { style: LABEL_STYLE, {t!("field-found-child-name")} }
                        input {
                            class: "input",
                            placeholder: t!("field-found-child-name-placeholder"),
                            value: "{draft.child_name}",
                            oninput: move |e| form.write().draft.child_name = e.value(),
                        }
                    }
                    div { style: "flex: 1; margin-bottom: 20px;",
                        label { style: LABEL_STYLE, {t!("field-reporter-name")} }
                        input {
                            class: "input",
                            placeholder: t!("field-reporter-name-placeholder"),
                            value: "{draft.reporter_name}",
                            oninput: move |e| form.write().draft.reporter_name = e.value(),
                        }
                        FieldError { message: error_for(fields::REPORTER_NAME) }
                    }
                }

                div { style: "margin-bottom: 20px;",
                    label { style: LABEL_STYLE, {t!("field-reporter-phone")} }
                    input {
                        r#type: "tel",
                        class: "input",
                        placeholder: t!("field-phone-placeholder"),
                        value: "{draft.reporter_phone}",
                        oninput: move |e| form.write().draft.reporter_phone = e.value(),
                    }
                    FieldError { message: error_for(fields::REPORTER_PHONE) }
                }

                div { style: "margin-bottom: 20px;",
                    label { style: LABEL_STYLE, {t!("field-found-location")} }
                    input {
                        class: "input",
                        placeholder: t!("field-found-location-placeholder"),
                        value: "{draft.location}",
                        oninput: move |e| form.write().draft.location = e.value(),
                    }
                    FieldError { message: error_for(fields::LOCATION) }
                }

                div { style: "margin-bottom: 20px;",
                    label { style: LABEL_STYLE, {t!("field-details")} }
                    textarea {
                        class: "input",
                        style: "min-height: 80px; resize: vertical; font-family: inherit;",
                        placeholder: t!("field-details-placeholder"),
                        value: "{draft.details}",
                        oninput: move |e| form.write().draft.details = e.value(),
                    }
                    if mole_hint {
                        p { style: "margin: 4px 0 0 0; font-size: 12px; color: #1e3a5f;",
                            "🔍 "
                            {t!("field-details-mole-detected")}
                        }
                    } else {
                        p { style: HINT_STYLE, {t!("field-details-hint")} }
                    }
                }

                div { style: "margin-bottom: 20px;",
                    label { style: LABEL_STYLE, {t!("field-found-photo")} }
                    button {
                        class: "btn-secondary",
                        style: "padding: 10px 16px;",
                        disabled: in_flight,
                        onclick: pick_photo,
                        "📷 "
                        {t!("action-choose-photo")}
                    }
                    FieldError { message: error_for(fields::FOUND_PHOTO) }
                    if let Some(err) = pick_error() {
                        FieldError { message: Some(err) }
                    }
                }

                PhotoPreviews { previews, label: t!("photo-preview-label") }

                button {
                    class: "btn-primary",
                    style: "width: 100%; padding: 14px; margin-top: 8px;",
                    disabled: in_flight,
                    onclick: submit,
                    if in_flight {
                        {t!("action-submitting")}
                    } else {
                        {t!("action-submit-found")}
                    }
                }
            }

            div { style: "margin-top: 16px; display: flex; gap: 12px; margin-bottom: 96px;",
                button {
                    class: "btn-secondary",
                    style: "flex: 1; padding: 12px;",
                    onclick: move |_| on_navigate.call(Screen::ReportMissing),
                    "🔎 "
                    {t!("found-switch-to-missing")}
                }
            }
        }
    }
}
