use dioxus::prelude::*;

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Ar,
}

/// Writing direction of the active language, mirrored onto the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Ltr,
    Rtl,
}

impl Dir {
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Ltr => "ltr",
            Dir::Rtl => "rtl",
        }
    }
}

/// Every session starts in English; the choice is never persisted.
pub const DEFAULT_LANG: Lang = Lang::En;

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ar => "ar",
        }
    }

    /// Name of the language in the language itself, for the selector menu.
    pub fn native_name(self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Ar => "العربية",
        }
    }

    pub fn short_label(self) -> &'static str {
        match self {
            Lang::En => "EN",
            Lang::Ar => "عر",
        }
    }

    pub fn dir(self) -> Dir {
        match self {
            Lang::Ar => Dir::Rtl,
            Lang::En => Dir::Ltr,
        }
    }
}

/// Provide `Signal<Lang>` to the component tree and push the default
/// direction onto the document root once after mount. After that,
/// `set_lang` owns the side effect.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let lang = use_signal(|| DEFAULT_LANG);
    use_context_provider(|| lang);

    use_effect(move || {
        // peek: apply once, without subscribing this effect to changes.
        apply_direction(lang.peek().dir());
    });

    rsx! { {children} }
}

pub fn use_lang() -> Signal<Lang> {
    if let Some(sig) = try_use_context::<Signal<Lang>>() {
        return sig;
    }

    // Fallback for mis-ordered providers to avoid panics in production.
    eprintln!("startup: missing I18nProvider context, using local Lang::En signal");
    use_signal(|| DEFAULT_LANG)
}

/// Switch the active language. The language value is written first and the
/// document direction is updated in the same call, so no observer sees the
/// new language with a stale direction. Re-selecting the active language is
/// a no-op.
pub fn set_lang(mut lang: Signal<Lang>, next: Lang) {
    let Some((value, dir)) = switch(*lang.peek(), next) else {
        return;
    };
    lang.set(value);
    apply_direction(dir);
}

/// Pure transition behind `set_lang`: `None` when `next` is already active,
/// otherwise the value to store and the direction to apply, in that order.
fn switch(current: Lang, next: Lang) -> Option<(Lang, Dir)> {
    if current == next {
        return None;
    }
    Some((next, next.dir()))
}

fn apply_direction(dir: Dir) {
    let js = direction_script(dir);
    spawn(async move {
        let _ = document::eval(&js).await;
    });
}

/// Script that sets `dir` on the document root and swaps the `ltr`/`rtl`
/// classes, keeping them mutually exclusive.
fn direction_script(dir: Dir) -> String {
    let apply = dir.as_str();
    let remove = match dir {
        Dir::Ltr => Dir::Rtl.as_str(),
        Dir::Rtl => Dir::Ltr.as_str(),
    };
    format!(
        r#"(function(){{ var root = document.documentElement; root.setAttribute("dir", "{apply}"); root.classList.remove("{remove}"); root.classList.add("{apply}"); return ""; }})()"#
    )
}

/// Translate a key for a given language. A missing key resolves to the key
/// string itself, in any language.
pub fn t(lang: Lang, key: &str) -> String {
    match (lang, key) {
        // Brand / nav
        (Lang::En, "brand.name") => "eDarris".to_string(),
        (Lang::Ar, "brand.name") => "إي دارس".to_string(),
        (Lang::En, "brand.tagline") => "Office & Education Supplies".to_string(),
        (Lang::Ar, "brand.tagline") => "مستلزمات المكاتب والتعليم".to_string(),
        (Lang::En, "nav.home") => "Home".to_string(),
        (Lang::Ar, "nav.home") => "الرئيسية".to_string(),
        (Lang::En, "nav.about") => "About Us".to_string(),
        (Lang::Ar, "nav.about") => "معلومات عنا".to_string(),
        (Lang::En, "nav.contact") => "Contact".to_string(),
        (Lang::Ar, "nav.contact") => "اتصل بنا".to_string(),
        (Lang::En, "nav.quote") => "Get Quote".to_string(),
        (Lang::Ar, "nav.quote") => "طلب عرض سعر".to_string(),

        // Hero
        (Lang::En, "hero.title") => "Professional B2B Office & Education Supplies".to_string(),
        (Lang::Ar, "hero.title") => "مستلزمات المكاتب والتعليم المهنية للشركات".to_string(),
        (Lang::En, "hero.subtitle") => "Your trusted partner for quality office supplies, educational materials, and business solutions across Iraq and MENA region.".to_string(),
        (Lang::Ar, "hero.subtitle") => "شريكك الموثوق لمستلزمات المكاتب عالية الجودة والمواد التعليمية وحلول الأعمال في العراق ومنطقة الشرق الأوسط.".to_string(),
        (Lang::En, "hero.cta") => "Explore Our Products".to_string(),
        (Lang::Ar, "hero.cta") => "استكشف منتجاتنا".to_string(),
        (Lang::En, "hero.contact") => "Contact Us".to_string(),
        (Lang::Ar, "hero.contact") => "اتصل بنا".to_string(),

        // Home / categories
        (Lang::En, "home.categories.title") => "Our Product Categories".to_string(),
        (Lang::Ar, "home.categories.title") => "فئات منتجاتنا".to_string(),
        (Lang::En, "home.categories.subtitle") => "Comprehensive B2B solutions for all your office and educational needs".to_string(),
        (Lang::Ar, "home.categories.subtitle") => "حلول شاملة للشركات لجميع احتياجاتكم المكتبية والتعليمية".to_string(),

        // Product categories
        (Lang::En, "products.office.title") => "Office Stationery".to_string(),
        (Lang::Ar, "products.office.title") => "القرطاسية المكتبية".to_string(),
        (Lang::En, "products.office.description") => "Complete range of office supplies including notebooks, pens, desk organizers, and professional stationery items for modern businesses.".to_string(),
        (Lang::Ar, "products.office.description") => "مجموعة كاملة من مستلزمات المكاتب تشمل الدفاتر والأقلام ومنظمات المكاتب والقرطاسية المهنية للشركات الحديثة.".to_string(),
        (Lang::En, "products.education.title") => "Education Supplies".to_string(),
        (Lang::Ar, "products.education.title") => "المستلزمات التعليمية".to_string(),
        (Lang::En, "products.education.description") => "Comprehensive educational materials, school supplies, and learning tools designed to enhance the educational experience.".to_string(),
        (Lang::Ar, "products.education.description") => "مواد تعليمية شاملة ومستلزمات مدرسية وأدوات تعلم مصممة لتعزيز التجربة التعليمية.".to_string(),
        (Lang::En, "products.printshop.title") => "Print-Shop Consumables".to_string(),
        (Lang::Ar, "products.printshop.title") => "مستهلكات المطابع".to_string(),
        (Lang::En, "products.printshop.description") => "High-quality printing materials, ink cartridges, toners, and professional papers for all your printing needs.".to_string(),
        (Lang::Ar, "products.printshop.description") => "مواد طباعة عالية الجودة وخراطيش حبر وأحبار وأوراق مهنية لجميع احتياجات الطباعة.".to_string(),
        (Lang::En, "products.packaging.title") => "Packaging Raw Materials".to_string(),
        (Lang::Ar, "products.packaging.title") => "مواد التغليف الخام".to_string(),
        (Lang::En, "products.packaging.description") => "Durable packaging solutions including boxes, containers, wrapping materials, and shipping supplies.".to_string(),
        (Lang::Ar, "products.packaging.description") => "حلول تغليف متينة تشمل الصناديق والحاويات ومواد التغليف ومستلزمات الشحن.".to_string(),
        (Lang::En, "products.quote") => "Request Quote".to_string(),
        (Lang::Ar, "products.quote") => "طلب عرض سعر".to_string(),
        (Lang::En, "products.learn") => "Learn More".to_string(),
        (Lang::Ar, "products.learn") => "اقرأ المزيد".to_string(),

        // About
        (Lang::En, "about.title") => "About eDarris".to_string(),
        (Lang::Ar, "about.title") => "عن إي دارس".to_string(),
        (Lang::En, "about.subtitle") => "Leading B2B Supplier in Iraq & MENA".to_string(),
        (Lang::Ar, "about.subtitle") => "المورد الرائد للشركات في العراق والشرق الأوسط".to_string(),
        (Lang::En, "about.mission.title") => "Our Mission".to_string(),
        (Lang::Ar, "about.mission.title") => "مهمتنا".to_string(),
        (Lang::En, "about.mission.text") => "To provide businesses and educational institutions with high-quality supplies and exceptional service, supporting growth and success across the region.".to_string(),
        (Lang::Ar, "about.mission.text") => "تزويد الشركات والمؤسسات التعليمية بمستلزمات عالية الجودة وخدمة استثنائية، لدعم النمو والنجاح في جميع أنحاء المنطقة.".to_string(),
        (Lang::En, "about.vision.title") => "Our Vision".to_string(),
        (Lang::Ar, "about.vision.title") => "رؤيتنا".to_string(),
        (Lang::En, "about.vision.text") => "To be the most trusted and reliable partner for B2B office and educational supplies in the MENA region.".to_string(),
        (Lang::Ar, "about.vision.text") => "أن نكون الشريك الأكثر ثقة وموثوقية لمستلزمات المكاتب والتعليم للشركات في منطقة الشرق الأوسط.".to_string(),
        (Lang::En, "about.values.title") => "Our Values".to_string(),
        (Lang::Ar, "about.values.title") => "قيمنا".to_string(),
        (Lang::En, "about.values.quality") => "Quality".to_string(),
        (Lang::Ar, "about.values.quality") => "الجودة".to_string(),
        (Lang::En, "about.values.quality.text") => "We source only the best products from trusted manufacturers.".to_string(),
        (Lang::Ar, "about.values.quality.text") => "نحن نحصل على أفضل المنتجات من الشركات المصنعة الموثوقة فقط.".to_string(),
        (Lang::En, "about.values.service") => "Service".to_string(),
        (Lang::Ar, "about.values.service") => "الخدمة".to_string(),
        (Lang::En, "about.values.service.text") => "Exceptional customer service is at the heart of everything we do.".to_string(),
        (Lang::Ar, "about.values.service.text") => "خدمة العملاء الاستثنائية هي في قلب كل ما نقوم به.".to_string(),
        (Lang::En, "about.values.reliability") => "Reliability".to_string(),
        (Lang::Ar, "about.values.reliability") => "الموثوقية".to_string(),
        (Lang::En, "about.values.reliability.text") => "Dependable delivery and consistent product availability.".to_string(),
        (Lang::Ar, "about.values.reliability.text") => "تسليم موثوق وتوفر منتجات ثابت.".to_string(),
        (Lang::En, "about.stats.clients") => "Business Clients".to_string(),
        (Lang::Ar, "about.stats.clients") => "عميل من الشركات".to_string(),
        (Lang::En, "about.stats.schools") => "Educational Institutions".to_string(),
        (Lang::Ar, "about.stats.schools") => "مؤسسة تعليمية".to_string(),
        (Lang::En, "about.stats.years") => "Years of Excellence".to_string(),
        (Lang::Ar, "about.stats.years") => "سنوات من التميز".to_string(),
        (Lang::En, "about.stats.support") => "Customer Support".to_string(),
        (Lang::Ar, "about.stats.support") => "دعم العملاء".to_string(),

        // Contact page
        (Lang::En, "contact.title") => "Contact Us".to_string(),
        (Lang::Ar, "contact.title") => "اتصل بنا".to_string(),
        (Lang::En, "contact.subtitle") => "Get in touch for quotes and inquiries".to_string(),
        (Lang::Ar, "contact.subtitle") => "تواصل معنا للحصول على عروض الأسعار والاستفسارات".to_string(),
        (Lang::En, "contact.tab.message") => "Send a Message".to_string(),
        (Lang::Ar, "contact.tab.message") => "إرسال رسالة".to_string(),
        (Lang::En, "contact.tab.quote") => "Request a Quote".to_string(),
        (Lang::Ar, "contact.tab.quote") => "طلب عرض سعر".to_string(),
        (Lang::En, "contact.form.name") => "Full Name".to_string(),
        (Lang::Ar, "contact.form.name") => "الاسم الكامل".to_string(),
        (Lang::En, "contact.form.email") => "Email Address".to_string(),
        (Lang::Ar, "contact.form.email") => "عنوان البريد الإلكتروني".to_string(),
        (Lang::En, "contact.form.phone") => "Phone Number".to_string(),
        (Lang::Ar, "contact.form.phone") => "رقم الهاتف".to_string(),
        (Lang::En, "contact.form.company") => "Company Name".to_string(),
        (Lang::Ar, "contact.form.company") => "اسم الشركة".to_string(),
        (Lang::En, "contact.form.message") => "Message".to_string(),
        (Lang::Ar, "contact.form.message") => "الرسالة".to_string(),
        (Lang::En, "contact.form.message_ph") => "How can we help?".to_string(),
        (Lang::Ar, "contact.form.message_ph") => "كيف يمكننا مساعدتكم؟".to_string(),
        (Lang::En, "contact.form.submit") => "Send Message".to_string(),
        (Lang::Ar, "contact.form.submit") => "إرسال الرسالة".to_string(),
        (Lang::En, "contact.form.sending") => "Sending…".to_string(),
        (Lang::Ar, "contact.form.sending") => "جاري الإرسال…".to_string(),
        (Lang::En, "contact.form.required") => "Please fill in your name, email, and message.".to_string(),
        (Lang::Ar, "contact.form.required") => "يرجى إدخال الاسم والبريد الإلكتروني والرسالة.".to_string(),
        (Lang::En, "contact.form.success") => "Thank you for your message! We will get back to you soon.".to_string(),
        (Lang::Ar, "contact.form.success") => "شكراً لرسالتكم! سنتواصل معكم قريباً.".to_string(),
        (Lang::En, "contact.info.title") => "Contact Information".to_string(),
        (Lang::Ar, "contact.info.title") => "معلومات الاتصال".to_string(),
        (Lang::En, "contact.info.subtitle") => "Get in touch with our team for any inquiries or support".to_string(),
        (Lang::Ar, "contact.info.subtitle") => "تواصلوا مع فريقنا لأي استفسار أو دعم".to_string(),
        (Lang::En, "contact.info.address") => "Address".to_string(),
        (Lang::Ar, "contact.info.address") => "العنوان".to_string(),
        (Lang::En, "contact.info.address.value") => "Baghdad, Iraq — Business District".to_string(),
        (Lang::Ar, "contact.info.address.value") => "بغداد، العراق — الحي التجاري".to_string(),
        (Lang::En, "contact.info.phone") => "Phone".to_string(),
        (Lang::Ar, "contact.info.phone") => "الهاتف".to_string(),
        (Lang::En, "contact.info.email") => "Email".to_string(),
        (Lang::Ar, "contact.info.email") => "البريد الإلكتروني".to_string(),
        (Lang::En, "contact.info.hours") => "Business Hours".to_string(),
        (Lang::Ar, "contact.info.hours") => "ساعات العمل".to_string(),
        (Lang::En, "contact.info.hours.value") => "Sun - Thu: 8:00 AM - 6:00 PM".to_string(),
        (Lang::Ar, "contact.info.hours.value") => "الأحد - الخميس: 8:00 صباحاً - 6:00 مساءً".to_string(),

        // Quote form
        (Lang::En, "quote.title") => "Request a Quote".to_string(),
        (Lang::Ar, "quote.title") => "طلب عرض سعر".to_string(),
        (Lang::En, "quote.category") => "Product Category".to_string(),
        (Lang::Ar, "quote.category") => "فئة المنتج".to_string(),
        (Lang::En, "quote.quantity") => "Estimated Quantity".to_string(),
        (Lang::Ar, "quote.quantity") => "الكمية المقدرة".to_string(),
        (Lang::En, "quote.quantity_ph") => "e.g. 500 units".to_string(),
        (Lang::Ar, "quote.quantity_ph") => "مثال: 500 وحدة".to_string(),
        (Lang::En, "quote.timeline") => "Required Timeline".to_string(),
        (Lang::Ar, "quote.timeline") => "الإطار الزمني المطلوب".to_string(),
        (Lang::En, "quote.timeline.urgent") => "Urgent (1-2 weeks)".to_string(),
        (Lang::Ar, "quote.timeline.urgent") => "عاجل (أسبوع إلى أسبوعين)".to_string(),
        (Lang::En, "quote.timeline.month") => "Within a month".to_string(),
        (Lang::Ar, "quote.timeline.month") => "خلال شهر".to_string(),
        (Lang::En, "quote.timeline.quarter") => "Within a quarter".to_string(),
        (Lang::Ar, "quote.timeline.quarter") => "خلال ثلاثة أشهر".to_string(),
        (Lang::En, "quote.timeline.flexible") => "Flexible".to_string(),
        (Lang::Ar, "quote.timeline.flexible") => "مرن".to_string(),
        (Lang::En, "quote.submit") => "Submit Quote Request".to_string(),
        (Lang::Ar, "quote.submit") => "إرسال طلب عرض السعر".to_string(),
        (Lang::En, "quote.success") => "Thank you for your quote request! We will prepare a detailed quote and send it to you within 24 hours.".to_string(),
        (Lang::Ar, "quote.success") => "شكراً لطلبكم! سنعد عرض سعر مفصلاً ونرسله إليكم خلال 24 ساعة.".to_string(),

        // Footer
        (Lang::En, "footer.links") => "Quick Links".to_string(),
        (Lang::Ar, "footer.links") => "روابط سريعة".to_string(),
        (Lang::En, "footer.products") => "Our Products".to_string(),
        (Lang::Ar, "footer.products") => "منتجاتنا".to_string(),
        (Lang::En, "footer.rights") => "© 2025 eDarris Office & Education Supplies. All rights reserved.".to_string(),
        (Lang::Ar, "footer.rights") => "© 2025 إي دارس لمستلزمات المكاتب والتعليم. جميع الحقوق محفوظة.".to_string(),

        // Common
        (Lang::En, "common.loading") => "Loading…".to_string(),
        (Lang::Ar, "common.loading") => "جاري التحميل…".to_string(),
        (Lang::En, "common.error") => "An error occurred".to_string(),
        (Lang::Ar, "common.error") => "حدث خطأ".to_string(),
        (Lang::En, "common.success") => "Success!".to_string(),
        (Lang::Ar, "common.success") => "نجح!".to_string(),
        (Lang::En, "common.language") => "Language".to_string(),
        (Lang::Ar, "common.language") => "اللغة".to_string(),
        (Lang::En, "common.dismiss") => "Dismiss".to_string(),
        (Lang::Ar, "common.dismiss") => "إغلاق".to_string(),

        // A miss resolves to the key itself, in any language.
        (_, _) => key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_registered_strings_per_language() {
        assert_eq!(t(Lang::En, "nav.home"), "Home");
        assert_eq!(t(Lang::Ar, "nav.home"), "الرئيسية");
        assert_eq!(t(Lang::En, "quote.submit"), "Submit Quote Request");
        assert_eq!(t(Lang::Ar, "quote.submit"), "إرسال طلب عرض السعر");
    }

    #[test]
    fn missing_key_resolves_to_the_key_itself() {
        assert_eq!(
            t(Lang::En, "this.key.does.not.exist"),
            "this.key.does.not.exist"
        );
        assert_eq!(
            t(Lang::Ar, "this.key.does.not.exist"),
            "this.key.does.not.exist"
        );
    }

    #[test]
    fn arabic_is_the_only_rtl_language() {
        assert_eq!(Lang::Ar.dir(), Dir::Rtl);
        assert_eq!(Lang::En.dir(), Dir::Ltr);
        assert_eq!(Dir::Rtl.as_str(), "rtl");
        assert_eq!(Dir::Ltr.as_str(), "ltr");
    }

    #[test]
    fn switching_yields_the_new_value_with_its_direction() {
        assert_eq!(switch(Lang::En, Lang::Ar), Some((Lang::Ar, Dir::Rtl)));
        assert_eq!(switch(Lang::Ar, Lang::En), Some((Lang::En, Dir::Ltr)));
    }

    #[test]
    fn reselecting_the_active_language_is_a_no_op() {
        // The guard makes a repeated `set_lang` leave both the stored value
        // and the direction side effect untouched.
        assert_eq!(switch(Lang::En, Lang::En), None);
        assert_eq!(switch(Lang::Ar, Lang::Ar), None);
    }

    #[test]
    fn applied_direction_always_matches_the_stored_language() {
        for current in [Lang::En, Lang::Ar] {
            for next in [Lang::En, Lang::Ar] {
                if let Some((value, dir)) = switch(current, next) {
                    assert_eq!(value, next);
                    assert_eq!(dir, value.dir());
                }
            }
        }
    }

    #[test]
    fn direction_script_swaps_classes_exclusively() {
        let rtl = direction_script(Dir::Rtl);
        assert!(rtl.contains(r#"setAttribute("dir", "rtl")"#));
        assert!(rtl.contains(r#"classList.remove("ltr")"#));
        assert!(rtl.contains(r#"classList.add("rtl")"#));

        let ltr = direction_script(Dir::Ltr);
        assert!(ltr.contains(r#"setAttribute("dir", "ltr")"#));
        assert!(ltr.contains(r#"classList.remove("rtl")"#));
        assert!(ltr.contains(r#"classList.add("ltr")"#));
    }

    #[test]
    fn switching_language_switches_the_string_and_direction() {
        let mut lang = DEFAULT_LANG;
        assert_eq!(t(lang, "nav.home"), "Home");
        assert_eq!(lang.dir(), Dir::Ltr);

        lang = Lang::Ar;
        assert_eq!(t(lang, "nav.home"), "الرئيسية");
        assert_eq!(lang.dir(), Dir::Rtl);
    }
}
