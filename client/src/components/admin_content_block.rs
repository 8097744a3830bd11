//! Page wrapper for admin screens: sets the document title and hosts content.

#[cfg(test)]
#[path = "admin_content_block_test.rs"]
mod admin_content_block_test;

use leptos::prelude::*;
use leptos_meta::Title;

pub(crate) fn document_title(title: &str) -> String {
    format!("{title} | Panel")
}

#[component]
pub fn AdminContentBlock(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <Title text=document_title(&title)/>
        <div class="admin-content">{children()}</div>
    }
}
