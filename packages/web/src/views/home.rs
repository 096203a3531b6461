use dioxus::prelude::*;
use ui::{Hero, ProductGrid};

#[component]
pub fn Home() -> Element {
    let lang = ui::use_lang()();

    rsx! {
        Hero {}

        section { id: "categories", class: "page_section",
            div { class: "section_intro",
                h2 { {ui::t(lang, "home.categories.title")} }
                p { class: "hint", {ui::t(lang, "home.categories.subtitle")} }
            }
            ProductGrid {}
        }
    }
}
