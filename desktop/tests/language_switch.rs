#![cfg(test)]
//! A language change must re-render the explorer, not remount it; a keyed
//! wrapper around the router would rebuild `NameExplorer` from scratch and
//! drop the selection along with every loaded dataset.

const MAIN_RS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/src/main.rs"));

#[test]
fn router_is_not_keyed_on_the_language() {
    assert!(
        !MAIN_RS.contains("key: \"{lang_code()}\""),
        "routed subtree is keyed on the language and would remount on change"
    );
}

#[test]
fn language_signal_is_shared_as_context() {
    assert!(MAIN_RS.contains("use_context_provider(|| lang_code)"));
}
