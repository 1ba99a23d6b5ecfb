use dioxus::prelude::*;

use crate::explorer::NameExplorer;

#[component]
pub fn Explorer() -> Element {
    rsx! {
        NameExplorer {}
    }
}
