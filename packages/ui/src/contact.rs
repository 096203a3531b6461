use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

const FORMS_CSS: Asset = asset!("/assets/styling/forms.css");

/// Delay used to simulate a submission round-trip. Nothing is sent anywhere.
const SUBMIT_DELAY_MS: u32 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContactTab {
    Message,
    Quote,
}

#[component]
pub fn ContactPage() -> Element {
    let lang = crate::use_lang()();
    let mut tab = use_signal(|| ContactTab::Message);

    rsx! {
        document::Link { rel: "stylesheet", href: FORMS_CSS }

        section { class: "page_hero",
            h1 { {crate::t(lang, "contact.title")} }
            p { {crate::t(lang, "contact.subtitle")} }
        }

        section { class: "page_section",
            div { class: "contact_grid",
                ContactInfoCard {}

                div { class: "panel contact_forms",
                    div { class: "tabs",
                        button {
                            class: if tab() == ContactTab::Message { "tab active" } else { "tab" },
                            onclick: move |_| tab.set(ContactTab::Message),
                            {crate::t(lang, "contact.tab.message")}
                        }
                        button {
                            class: if tab() == ContactTab::Quote { "tab active" } else { "tab" },
                            onclick: move |_| tab.set(ContactTab::Quote),
                            {crate::t(lang, "contact.tab.quote")}
                        }
                    }

                    match tab() {
                        ContactTab::Message => rsx! {
                            MessageForm {}
                        },
                        ContactTab::Quote => rsx! {
                            QuoteForm {}
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn ContactInfoCard() -> Element {
    let lang = crate::use_lang()();

    let rows = [
        ("📍", crate::t(lang, "contact.info.address"), crate::t(lang, "contact.info.address.value")),
        ("📞", crate::t(lang, "contact.info.phone"), "+964 (0) 1234 5678".to_string()),
        ("✉", crate::t(lang, "contact.info.email"), "info@edarris.com".to_string()),
        ("🕑", crate::t(lang, "contact.info.hours"), crate::t(lang, "contact.info.hours.value")),
    ];

    rsx! {
        div { class: "panel contact_info",
            h2 { {crate::t(lang, "contact.info.title")} }
            p { class: "hint", {crate::t(lang, "contact.info.subtitle")} }
            for (glyph , title, value) in rows {
                div { class: "info_row",
                    span { class: "info_glyph", {glyph} }
                    div {
                        h4 { {title} }
                        p { class: "hint", {value} }
                    }
                }
            }
        }
    }
}

#[component]
fn MessageForm() -> Element {
    let lang = crate::use_lang()();
    let toasts = crate::use_toasts();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut company = use_signal(String::new);
    let mut message = use_signal(String::new);

    let mut submitting = use_signal(|| false);
    let mut status = use_signal(String::new);

    let message_ph = crate::t(lang, "contact.form.message_ph");

    rsx! {
        label { {crate::t(lang, "contact.form.name")} }
        input { value: "{name}", oninput: move |e| name.set(e.value()) }

        label { {crate::t(lang, "contact.form.email")} }
        input { r#type: "email", value: "{email}", oninput: move |e| email.set(e.value()) }

        label { {crate::t(lang, "contact.form.phone")} }
        input { r#type: "tel", value: "{phone}", oninput: move |e| phone.set(e.value()) }

        label { {crate::t(lang, "contact.form.company")} }
        input { value: "{company}", oninput: move |e| company.set(e.value()) }

        label { {crate::t(lang, "contact.form.message")} }
        textarea {
            value: "{message}",
            oninput: move |e| message.set(e.value()),
            placeholder: "{message_ph}",
            rows: 6,
        }

        button {
            class: "btn primary",
            disabled: submitting(),
            onclick: move |_| {
                if submitting() {
                    return;
                }
                if !required_filled(&[&name(), &email(), &message()]) {
                    status.set(crate::t(lang, "contact.form.required"));
                    return;
                }
                submitting.set(true);
                status.set(String::new());
                let toasts = toasts.clone();
                spawn(async move {
                    TimeoutFuture::new(SUBMIT_DELAY_MS).await;
                    status.set(crate::t(lang, "contact.form.success"));
                    toasts
                        .success(
                            crate::t(lang, "common.success"),
                            Some(crate::t(lang, "contact.form.success")),
                        );
                    name.set(String::new());
                    email.set(String::new());
                    phone.set(String::new());
                    company.set(String::new());
                    message.set(String::new());
                    submitting.set(false);
                });
            },
            if submitting() {
                {crate::t(lang, "contact.form.sending")}
            } else {
                {crate::t(lang, "contact.form.submit")}
            }
        }

        if !status().is_empty() {
            p { class: "hint form_status", "{status}" }
        }
    }
}

#[component]
fn QuoteForm() -> Element {
    let lang = crate::use_lang()();
    let toasts = crate::use_toasts();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut company = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut quantity = use_signal(String::new);
    let mut timeline = use_signal(|| "flexible".to_string());

    let mut submitting = use_signal(|| false);
    let mut status = use_signal(String::new);

    let quantity_ph = crate::t(lang, "quote.quantity_ph");

    rsx! {
        label { {crate::t(lang, "contact.form.name")} }
        input { value: "{name}", oninput: move |e| name.set(e.value()) }

        label { {crate::t(lang, "contact.form.email")} }
        input { r#type: "email", value: "{email}", oninput: move |e| email.set(e.value()) }

        label { {crate::t(lang, "contact.form.company")} }
        input { value: "{company}", oninput: move |e| company.set(e.value()) }

        label { {crate::t(lang, "quote.category")} }
        select {
            value: "{category}",
            onchange: move |e| category.set(e.value()),
            option { value: "", disabled: true, selected: category().is_empty(), "—" }
            for cat in crate::CATEGORIES {
                option {
                    value: "{cat.id}",
                    selected: category() == cat.id,
                    {crate::t(lang, cat.title_key)}
                }
            }
        }

        label { {crate::t(lang, "quote.quantity")} }
        input { value: "{quantity}", oninput: move |e| quantity.set(e.value()), placeholder: "{quantity_ph}" }

        label { {crate::t(lang, "quote.timeline")} }
        select {
            value: "{timeline}",
            onchange: move |e| timeline.set(e.value()),
            for (id , key) in TIMELINES {
                option { value: "{id}", selected: timeline() == id, {crate::t(lang, key)} }
            }
        }

        button {
            class: "btn primary",
            disabled: submitting(),
            onclick: move |_| {
                if submitting() {
                    return;
                }
                if !required_filled(&[&name(), &email(), &category()]) {
                    status.set(crate::t(lang, "contact.form.required"));
                    return;
                }
                submitting.set(true);
                status.set(String::new());
                let toasts = toasts.clone();
                spawn(async move {
                    TimeoutFuture::new(SUBMIT_DELAY_MS).await;
                    status.set(crate::t(lang, "quote.success"));
                    toasts
                        .success(
                            crate::t(lang, "common.success"),
                            Some(crate::t(lang, "quote.success")),
                        );
                    name.set(String::new());
                    email.set(String::new());
                    company.set(String::new());
                    category.set(String::new());
                    quantity.set(String::new());
                    timeline.set("flexible".to_string());
                    submitting.set(false);
                });
            },
            if submitting() {
                {crate::t(lang, "contact.form.sending")}
            } else {
                {crate::t(lang, "quote.submit")}
            }
        }

        if !status().is_empty() {
            p { class: "hint form_status", "{status}" }
        }
    }
}

const TIMELINES: [(&str, &str); 4] = [
    ("urgent", "quote.timeline.urgent"),
    ("month", "quote.timeline.month"),
    ("quarter", "quote.timeline.quarter"),
    ("flexible", "quote.timeline.flexible"),
];

/// A form is ready when every required field has non-whitespace content.
fn required_filled(fields: &[&str]) -> bool {
    fields.iter().all(|field| !field.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{t, Lang};

    #[test]
    fn required_fields_must_be_non_blank() {
        assert!(required_filled(&["Alia", "alia@acme.example", "Hello"]));
        assert!(!required_filled(&["Alia", "", "Hello"]));
        assert!(!required_filled(&["   ", "alia@acme.example", "Hello"]));
        assert!(required_filled(&[]));
    }

    #[test]
    fn timeline_keys_are_translated_in_both_languages() {
        for (_, key) in TIMELINES {
            for lang in [Lang::En, Lang::Ar] {
                assert_ne!(t(lang, key), key);
            }
        }
    }
}
