use dioxus::prelude::*;

const CARDS_CSS: Asset = asset!("/assets/styling/cards.css");

/// A product category on the home page. Titles and descriptions are
/// translation keys so the cards re-render on language switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductCategory {
    pub id: &'static str,
    pub title_key: &'static str,
    pub description_key: &'static str,
    pub glyph: &'static str,
}

pub const CATEGORIES: [ProductCategory; 4] = [
    ProductCategory {
        id: "office",
        title_key: "products.office.title",
        description_key: "products.office.description",
        glyph: "🖊",
    },
    ProductCategory {
        id: "education",
        title_key: "products.education.title",
        description_key: "products.education.description",
        glyph: "🎓",
    },
    ProductCategory {
        id: "printshop",
        title_key: "products.printshop.title",
        description_key: "products.printshop.description",
        glyph: "🖨",
    },
    ProductCategory {
        id: "packaging",
        title_key: "products.packaging.title",
        description_key: "products.packaging.description",
        glyph: "📦",
    },
];

#[component]
pub fn ProductGrid() -> Element {
    let lang = crate::use_lang()();
    rsx! {
        document::Link { rel: "stylesheet", href: CARDS_CSS }

        div { class: "card_grid",
            for cat in CATEGORIES {
                div { class: "product_card cat_{cat.id}", key: "{cat.id}",
                    div { class: "card_head",
                        span { class: "card_glyph", "{cat.glyph}" }
                        h3 { {crate::t(lang, cat.title_key)} }
                    }
                    p { class: "card_desc", {crate::t(lang, cat.description_key)} }
                    div { class: "card_actions",
                        a { class: "btn primary", href: "/contact", {crate::t(lang, "products.quote")} }
                        a { class: "btn", href: "/about", {crate::t(lang, "products.learn")} }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{t, Lang};

    #[test]
    fn category_ids_are_distinct() {
        for (i, a) in CATEGORIES.iter().enumerate() {
            for b in &CATEGORIES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn every_category_key_is_translated_in_both_languages() {
        for cat in CATEGORIES {
            for lang in [Lang::En, Lang::Ar] {
                assert_ne!(t(lang, cat.title_key), cat.title_key);
                assert_ne!(t(lang, cat.description_key), cat.description_key);
            }
        }
    }
}
