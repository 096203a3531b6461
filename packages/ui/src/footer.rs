use dioxus::prelude::*;

use crate::CATEGORIES;

const SITE_CSS: Asset = asset!("/assets/styling/site.css");

#[component]
pub fn SiteFooter() -> Element {
    let lang = crate::use_lang()();

    let quick_links = [
        ("/", crate::t(lang, "nav.home")),
        ("/about", crate::t(lang, "nav.about")),
        ("/contact", crate::t(lang, "nav.contact")),
        ("/contact", crate::t(lang, "nav.quote")),
    ];

    rsx! {
        document::Link { rel: "stylesheet", href: SITE_CSS }

        footer { class: "site_footer",
            div { class: "footer_inner",
                div { class: "footer_brand",
                    div { class: "brand",
                        span { class: "brand_mark", "eD" }
                        span { class: "brand_text",
                            span { class: "brand_name", {crate::t(lang, "brand.name")} }
                            span { class: "brand_tagline", {crate::t(lang, "brand.tagline")} }
                        }
                    }
                    p { class: "footer_blurb", {crate::t(lang, "hero.subtitle")} }
                    ul { class: "footer_contact",
                        li { {crate::t(lang, "contact.info.address.value")} }
                        li { "+964 (0) 1234 5678" }
                        li { "info@edarris.com" }
                    }
                }

                div { class: "footer_col",
                    h4 { {crate::t(lang, "footer.links")} }
                    ul {
                        for (href , label) in quick_links {
                            li {
                                a { href, {label} }
                            }
                        }
                    }
                }

                div { class: "footer_col",
                    h4 { {crate::t(lang, "footer.products")} }
                    ul {
                        for cat in CATEGORIES {
                            li { key: "{cat.id}", {crate::t(lang, cat.title_key)} }
                        }
                    }
                }
            }

            div { class: "footer_bottom",
                p { {crate::t(lang, "footer.rights")} }
            }
        }
    }
}
