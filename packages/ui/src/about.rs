use dioxus::prelude::*;

const CARDS_CSS: Asset = asset!("/assets/styling/cards.css");

const STATS: [(&str, &str); 4] = [
    ("500+", "about.stats.clients"),
    ("50+", "about.stats.schools"),
    ("10+", "about.stats.years"),
    ("24/7", "about.stats.support"),
];

const VALUES: [(&str, &str, &str); 3] = [
    ("🏅", "about.values.quality", "about.values.quality.text"),
    ("🤝", "about.values.service", "about.values.service.text"),
    ("🚚", "about.values.reliability", "about.values.reliability.text"),
];

#[component]
pub fn AboutPage() -> Element {
    let lang = crate::use_lang()();

    rsx! {
        document::Link { rel: "stylesheet", href: CARDS_CSS }

        section { class: "page_hero",
            h1 { {crate::t(lang, "about.title")} }
            p { {crate::t(lang, "about.subtitle")} }
        }

        section { class: "page_section",
            div { class: "split",
                div { class: "panel",
                    h2 { {crate::t(lang, "about.mission.title")} }
                    p { {crate::t(lang, "about.mission.text")} }
                }
                div { class: "panel",
                    h2 { {crate::t(lang, "about.vision.title")} }
                    p { {crate::t(lang, "about.vision.text")} }
                }
            }
        }

        section { class: "page_section stats_band",
            div { class: "stats_row",
                for (number , label_key) in STATS {
                    div { class: "stat",
                        span { class: "stat_number", {number} }
                        span { class: "stat_label", {crate::t(lang, label_key)} }
                    }
                }
            }
        }

        section { class: "page_section",
            h2 { class: "section_title", {crate::t(lang, "about.values.title")} }
            div { class: "card_grid values_grid",
                for (glyph , title_key, text_key) in VALUES {
                    div { class: "product_card value_card", key: "{title_key}",
                        div { class: "card_head",
                            span { class: "card_glyph", {glyph} }
                            h3 { {crate::t(lang, title_key)} }
                        }
                        p { class: "card_desc", {crate::t(lang, text_key)} }
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
    fn stat_and_value_keys_are_translated_in_both_languages() {
        for (_, key) in STATS {
            for lang in [Lang::En, Lang::Ar] {
                assert_ne!(t(lang, key), key);
            }
        }
        for (_, title, text) in VALUES {
            for lang in [Lang::En, Lang::Ar] {
                assert_ne!(t(lang, title), title);
                assert_ne!(t(lang, text), text);
            }
        }
    }
}
