use dioxus::prelude::*;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

#[component]
pub fn Hero() -> Element {
    let lang = crate::use_lang()();
    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        section { id: "hero",
            div { class: "hero_inner",
                h1 { {crate::t(lang, "hero.title")} }
                p { class: "hero_subtitle", {crate::t(lang, "hero.subtitle")} }

                div { class: "cta_row",
                    a { class: "btn primary", href: "#categories", {crate::t(lang, "hero.cta")} }
                    a { class: "btn", href: "/contact", {crate::t(lang, "hero.contact")} }
                }
            }
        }
    }
}
