//! Empty-state illustration for admin lists with no rows.

use leptos::prelude::*;

const NOT_FOUND_SVG: &str = "/assets/svgs/not_found.svg";

#[component]
pub fn NoItems() -> impl IntoView {
    view! {
        <div class="no-items">
            <div class="no-items__art">
                <img class="no-items__image" src=NOT_FOUND_SVG alt="No Items"/>
            </div>
            <p class="no-items__text">"No items could be found, it's almost like they are hiding."</p>
        </div>
    }
}
