//! Localization for `nametrend-ui`.
//!
//! Messages live in `i18n/<lang-id>/nametrend-ui.ftl` (embedded with
//! `rust-embed`); `en-US` is the fallback and the reference key set. Lookups go
//! through the `t!` macro, which wraps `i18n-embed-fl`'s compile-time checked
//! `fl!` against the shared [`LOADER`].
//!
//! ```ignore
//! crate::i18n::init(); // idempotent
//! let label = t!("nav-explorer");
//! let notice = t!("notice-duplicate", name = "Alice");
//! ```
//!
//! Desktop picks the OS locale list, the web build `navigator.languages`.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-explorer")
///     t!("notice-duplicate", name = "Alice")
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/en-US/{DOMAIN}.ftl`
const DOMAIN: &str = "nametrend-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().unwrap_or_default();
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        // Plain text for attribute values and CSV-adjacent labels.
        LOADER.set_use_isolating(false);
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            tracing::warn!(error = %err, "language selection failed; using fallback");
        }
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()), // Silently ignore invalid tags.
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Subscribes the calling component to the shell's language signal so it
/// re-renders in place after [`set_language`]. Component state survives the
/// switch; only the text changes.
pub fn use_language() -> String {
    dioxus::prelude::try_use_context::<dioxus::prelude::Signal<String>>()
        .map(|code| code())
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn requested_languages()-> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn fallback_language_is_present() {
        assert!(available_languages().iter().any(|l| l == "en-US"));
    }

    #[test]
    fn basic_lookup_works() {
        init();
        let s = fl!(&*LOADER, "nav-explorer");
        assert_eq!(s, "Explorer");
    }

    #[test]
    fn dynamic_language_switch_reverts_on_failure() {
        init();
        let before = fl!(&*LOADER, "nav-explorer");
        let _ = set_language("zz-ZZ");
        let after = fl!(&*LOADER, "nav-explorer");
        assert_eq!(before, after);
    }
}
