//! This crate contains all shared UI for the workspace.

mod hero;
pub use hero::Hero;

mod header;
pub use header::SiteHeader;

mod footer;
pub use footer::SiteFooter;

mod products;
pub use products::{ProductCategory, ProductGrid, CATEGORIES};

mod about;
pub use about::AboutPage;

mod contact;
pub use contact::ContactPage;

mod theme;
pub use theme::BrandTheme;

mod toast;
pub use toast::{use_toasts, ToastProvider};

mod i18n;
pub use i18n::{set_lang, t, use_lang, Dir, I18nProvider, Lang, DEFAULT_LANG};
