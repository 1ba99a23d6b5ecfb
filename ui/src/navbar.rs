use dioxus::prelude::*;

/// Bare link container for platforms that have not registered a `NavBuilder`.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        nav { class: "navbar__links", {children} }
    }
}
