use dioxus::prelude::*;

use crate::client::components::Page;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx!(
        Title { "Not Found | Guildhall" }
        Page { class: "flex items-center justify-center",
            p { "This page does not exist." }
        }
    )
}
