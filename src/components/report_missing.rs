use crate::app_state::AppState;
use crate::components::form_parts::{FieldError, PhotoPreviews, HINT_STYLE, LABEL_STYLE};
use crate::error::AppError;
use crate::models::{fields, MissingFormState, Notice, Severity, SkinColor};
use crate::Screen;
use dioxus::prelude::*;
use dioxus_i18n::t;

#[component]
pub fn ReportMissingScreen(on_navigate: EventHandler<Screen>) -> Element {
    let app = use_context::<Signal<AppState>>();
    let mut notice = use_context::<Signal<Option<Notice>>>();
    let controller = use_hook(|| app.peek().controller());
    let mut form = use_signal(MissingFormState::new);
    let mut pick_error = use_signal(|| None::<String>);

    let pick_photos = move |_| {
        spawn(async move {
            match photo_selection::pick_images().await {
                // Dialog cancelled: keep the current selection
                Ok(photos) if photos.is_empty() => {}
                Ok(photos) => {
                    log::debug!("{} photos selected for missing-child report", photos.len());
                    pick_error.set(None);
                    form.write().select_photos(photos);
                }
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
        // Values and the live photo selection as they are right now
        let (draft, photos) = {
            let state = form.read();
            (state.draft.clone(), state.photos.clone())
        };

        spawn(async move {
            let outcome = controller.submit_missing(&draft, &photos).await;
            form.write().finish_submission(&outcome);
            if let Some(n) = outcome.notice() {
                notice.set(Some(n));
            }
        });
    };

    let (draft, errors, previews, photo_count, in_flight) = {
        let state = form.read();
        (
            state.draft.clone(),
            state.errors.clone(),
            state.previews.clone(),
            state.photos.len(),
            state.in_flight,
        )
    };
    let error_for = |field: &str| errors.get(field).map(str::to_string);

    rsx! {
        div { style: "padding: 16px; max-width: 600px; margin: 0 auto;",
            div { style: "display: flex; align-items: center; margin-bottom: 24px;",
                h1 { style: "color: #1e3a5f; font-size: 24px; font-weight: 700; margin: 0;",
                    "🔎 "
                    {t!("missing-title")}
                }
            }

            div { class: "card",
                div { style: "margin-bottom: 20px;",
                    label { style: LABEL_STYLE, {t!("field-child-name")} }
                    input {
                        class: "input",
                        placeholder: t!("field-child-name-placeholder"),
                        value: "{draft.child_name}",
                        oninput: move |e| form.write().draft.child_name = e.value(),
                    }
                    FieldError { message: error_for(fields::CHILD_NAME) }
                }

                div { style: "display: flex; gap: 12px;",
                    div { style: "flex: 1; margin-bottom: 20px;",
                        label { style: LABEL_STYLE, {t!("field-age")} }
                        input {
                            r#type: "number",
                            class: "input",
                            min: "1",
                            placeholder: t!("field-age-placeholder"),
                            value: "{draft.age}",
                            oninput: move |e| form.write().draft.age = e.value(),
                        }
                        FieldError { message: error_for(fields::AGE) }
                    }
                    div { style: "flex: 1; margin-bottom: 20px;",
                        label { style: LABEL_STYLE, {t!("field-height")} }
                        input {
                            r#type: "number",
                            class: "input",
                            min: "1",
                            step: "0.1",
                            placeholder: t!("field-height-placeholder"),
                            value: "{draft.height}",
                            oninput: move |e| form.write().draft.height = e.value(),
                        }
                        FieldError { message: error_for(fields::HEIGHT) }
                    }
                }

                div { style: "margin-bottom: 20px;",
                    label { style: LABEL_STYLE, {t!("field-skin-color")} }
                    select {
                        class: "input",
                        value: "{draft.skin_color}",
                        onchange: move |e| form.write().draft.skin_color = e.value(),
                        option { value: "", selected: draft.skin_color.is_empty(), {t!("field-skin-color-placeholder")} }
                        for color in SkinColor::all() {
                            option {
                                key: "{color.as_str()}",
                                value: color.as_str(),
                                selected: draft.skin_color == color.as_str(),
                                "{color.display_name()}"
                            }
                        }
                    }
                    FieldError { message: error_for(fields::SKIN_COLOR) }
                }

                div { style: "margin-bottom: 20px;",
                    label { style: LABEL_STYLE, {t!("field-last-seen")} }
                    input {
                        class: "input",
                        placeholder: t!("field-last-seen-placeholder"),
                        value: "{draft.location}",
                        oninput: move |e| form.write().draft.location = e.value(),
                    }
                    FieldError { message: error_for(fields::LOCATION) }
                }

                div { style: "margin-bottom: 20px;",
                    label { style: LABEL_STYLE, {t!("field-features")} }
                    textarea {
                        class: "input",
                        style: "min-height: 80px; resize: vertical; font-family: inherit;",
                        placeholder: t!("field-features-placeholder"),
                        value: "{draft.distinguishing_features}",
                        oninput: move |e| form.write().draft.distinguishing_features = e.value(),
                    }
                    p { style: HINT_STYLE, {t!("field-features-hint")} }
                }

                div { style: "display: flex; gap: 12px;",
                    div { style: "flex: 1; margin-bottom: 20px;",
                        label { style: LABEL_STYLE, {t!("field-parent-phone")} }
                        input {
                            r#type: "tel",
                            class: "input",
                            placeholder: t!("field-phone-placeholder"),
                            value: "{draft.parent_phone}",
                            oninput: move |e| form.write().draft.parent_phone = e.value(),
                        }
                        FieldError { message: error_for(fields::PARENT_PHONE) }
                    }
                    div { style: "flex: 1; margin-bottom: 20px;",
                        label { style: LABEL_STYLE, {t!("field-police-contact")} }
                        input {
                            r#type: "tel",
                            class: "input",
                            placeholder: t!("field-police-placeholder"),
                            value: "{draft.police_contact}",
                            oninput: move |e| form.write().draft.police_contact = e.value(),
                        }
                        FieldError { message: error_for(fields::POLICE_CONTACT) }
                    }
                }

                div { style: "margin-bottom: 20px;",
                    label { style: LABEL_STYLE, {t!("field-photos")} }
                    div { style: "display: flex; gap: 12px; align-items: center;",
                        button {
                            class: "btn-secondary",
                            style: "padding: 10px 16px;",
                            disabled: in_flight,
                            onclick: pick_photos,
                            "📷 "
                            {t!("action-choose-photos")}
                        }
                        if photo_count > 0 {
                            span { style: "font-size: 13px; color: #555;",
                                {t!("photos-selected", count: photo_count)}
                            }
                            button {
                                style: "background: none; border: none; color: #c33; cursor: pointer; font-size: 13px;",
                                disabled: in_flight,
                                onclick: move |_| form.write().clear_photos(),
                                {t!("action-clear-photos")}
                            }
                        }
                    }
                    FieldError { message: error_for(fields::PHOTOS) }
                    if let Some(err) = pick_error() {
                        FieldError { message: Some(err) }
                    }
                    p { style: HINT_STYLE, {t!("field-photos-hint")} }
                }

                PhotoPreviews { previews, label: t!("photos-preview-label") }

                button {
                    class: "btn-primary",
                    style: "width: 100%; padding: 14px; margin-top: 8px;",
                    disabled: in_flight,
                    onclick: submit,
                    if in_flight {
                        {t!("action-submitting")}
                    } else {
                        {t!("action-submit-missing")}
                    }
                }
            }

            div { style: "margin-top: 16px; display: flex; gap: 12px; margin-bottom: 96px;",
                button {
                    class: "btn-secondary",
                    style: "flex: 1; padding: 12px;",
                    onclick: move |_| on_navigate.call(Screen::ReportFound),
                    "🧒 "
                    {t!("missing-switch-to-found")}
                }
            }
        }
    }
}
