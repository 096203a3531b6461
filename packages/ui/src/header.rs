use dioxus::prelude::*;

use crate::Lang;

const SITE_CSS: Asset = asset!("/assets/styling/site.css");

/// Site-wide header:
/// - brand block linking home
/// - nav links with the current page highlighted (`current_path` from the router)
/// - language dropdown (globe button → English / العربية)
/// - quote CTA
/// - collapsible nav on narrow screens
#[component]
pub fn SiteHeader(current_path: String) -> Element {
    let lang_sig = crate::use_lang();
    let lang = lang_sig();

    let mut menu_open = use_signal(|| false);
    let mut lang_open = use_signal(|| false);

    let nav = [
        ("/", crate::t(lang, "nav.home")),
        ("/about", crate::t(lang, "nav.about")),
        ("/contact", crate::t(lang, "nav.contact")),
    ];

    rsx! {
        document::Link { rel: "stylesheet", href: SITE_CSS }

        header { class: "site_header",
            div { class: "site_header_inner",
                a { class: "brand", href: "/",
                    span { class: "brand_mark", "eD" }
                    span { class: "brand_text",
                        span { class: "brand_name", {crate::t(lang, "brand.name")} }
                        span { class: "brand_tagline", {crate::t(lang, "brand.tagline")} }
                    }
                }

                nav { class: "nav_links",
                    for (href , label) in nav.clone() {
                        a {
                            class: if current_path == href { "nav_link active" } else { "nav_link" },
                            href,
                            {label}
                        }
                    }
                }

                div { class: "header_actions",
                    div { class: "lang_menu",
                        button {
                            class: "btn lang_btn",
                            onclick: move |_| {
                                let next = !lang_open();
                                lang_open.set(next);
                            },
                            span { class: "lang_globe", "🌐" }
                            span { class: "lang_label", {lang.short_label()} }
                        }
                        if lang_open() {
                            div { class: "dropdown",
                                span { class: "dropdown_hint", {crate::t(lang, "common.language")} }
                                for choice in [Lang::En, Lang::Ar] {
                                    button {
                                        class: if choice == lang { "dropdown_item selected" } else { "dropdown_item" },
                                        onclick: move |_| {
                                            crate::set_lang(lang_sig, choice);
                                            lang_open.set(false);
                                        },
                                        {choice.native_name()}
                                    }
                                }
                            }
                        }
                    }

                    a { class: "btn primary quote_btn", href: "/contact", {crate::t(lang, "nav.quote")} }

                    button {
                        class: "menu_toggle",
                        onclick: move |_| {
                            let next = !menu_open();
                            menu_open.set(next);
                        },
                        if menu_open() { "✕" } else { "☰" }
                    }
                }
            }

            if menu_open() {
                nav { class: "mobile_nav",
                    for (href , label) in nav {
                        a {
                            class: if current_path == href { "nav_link active" } else { "nav_link" },
                            href,
                            onclick: move |_| menu_open.set(false),
                            {label}
                        }
                    }
                }
            }
        }
    }
}
