use dioxus::prelude::*;

use views::{About, Contact, Home};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/contact")]
    Contact {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();
    eprintln!(
        "startup: default language={} dir={}",
        ui::DEFAULT_LANG.code(),
        ui::DEFAULT_LANG.dir().as_str()
    );
    dioxus::launch(App);
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {info}");
    }));
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::BrandTheme {}
        ui::I18nProvider {
            ui::ToastProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Shared page frame: header on top, routed page in the middle, footer below.
/// The current path is handed to the header so it can mark the active link.
#[component]
fn SiteLayout() -> Element {
    let route = use_route::<Route>();
    let current_path = route.to_string();

    rsx! {
        ui::SiteHeader { current_path }
        main { class: "site_main", Outlet::<Route> {} }
        ui::SiteFooter {}
    }
}
