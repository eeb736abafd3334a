use dioxus_i18n::prelude::*;

/// English is the only bundled locale
pub fn init_i18n() -> I18nConfig {
    I18nConfig::new(unic_langid::langid!("en-US")).with_locale(Locale::new_static(
        unic_langid::langid!("en-US"),
        include_str!("../locales/en-US.ftl"),
    ))
}
