//! Renders flash notices, optionally limited to one namespace.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the context-provided `FlashState`. The region element is always
//! emitted, even with no notices, so pages keep a stable layout.

use leptos::prelude::*;

use crate::state::flash::{FlashMessage, FlashState};

#[component]
pub fn FlashMessageRender(#[prop(optional, into)] by_key: Option<String>) -> impl IntoView {
    let flashes = expect_context::<RwSignal<FlashState>>();
    let messages = move || flashes.with(|f| f.by_key(by_key.as_deref()));

    view! {
        <div class="flash-region" role="status" aria-live="polite">
            <For
                each=messages
                key=|message| message.id
                children=move |message: FlashMessage| {
                    let id = message.id;
                    view! {
                        <div class=format!("flash flash--{}", message.kind.as_class())>
                            {message.title.map(|title| view! { <span class="flash__title">{title}</span> })}
                            <span class="flash__message">{message.message}</span>
                            <button
                                class="flash__dismiss"
                                type="button"
                                title="Dismiss"
                                on:click=move |_| flashes.update(|f| f.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
