//! "New Role" header action and its create dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dialog posts to the role API and appends the created role to the shared
//! `RolesState`, so the list page shows it without a refetch. Dialog errors go
//! to the `"role:create"` notice namespace, rendered inside the dialog only.

#[cfg(test)]
#[path = "new_role_button_test.rs"]
mod new_role_button_test;

use leptos::prelude::*;

use crate::components::flash_message_render::FlashMessageRender;
use crate::state::flash::FlashState;
use crate::state::roles::RolesState;
use crate::util::activation::ActivationGuard;

/// Notice namespace for the create dialog.
pub const CREATE_FLASH_KEY: &str = "role:create";

pub(crate) const NAME_MAX_LEN: usize = 64;
pub(crate) const DESCRIPTION_MAX_LEN: usize = 255;

/// Trim and bounds-check dialog input before it is sent.
///
/// Limits count `char`s like the server does. The inputs carry no HTML
/// `maxlength`, which counts UTF-16 units and would cut emoji names short.
pub(crate) fn validate_new_role_input(name: &str, description: &str) -> Result<(String, String), &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("A role name is required.");
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err("Role names may not be longer than 64 characters.");
    }
    let description = description.trim();
    if description.chars().count() > DESCRIPTION_MAX_LEN {
        return Err("Role descriptions may not be longer than 255 characters.");
    }
    Ok((name.to_owned(), description.to_owned()))
}

/// Header button that opens the create-role dialog.
#[component]
pub fn NewRoleButton() -> impl IntoView {
    let show = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    let on_open = move |_| {
        name.set(String::new());
        description.set(String::new());
        show.set(true);
    };
    let on_close = Callback::new(move |()| show.set(false));

    view! {
        <button class="btn btn--primary admin-page__action" type="button" on:click=on_open>
            "New Role"
        </button>
        <Show when=move || show.get()>
            <CreateRoleDialog name=name description=description on_close=on_close/>
        </Show>
    }
}

/// Modal dialog for creating a role.
#[component]
fn CreateRoleDialog(name: RwSignal<String>, description: RwSignal<String>, on_close: Callback<()>) -> impl IntoView {
    let roles = expect_context::<RwSignal<RolesState>>();
    let flashes = expect_context::<RwSignal<FlashState>>();
    let submitting = RwSignal::new(false);

    let guard = ActivationGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.deactivate()
    });

    flashes.update(|f| f.clear_flashes(Some(CREATE_FLASH_KEY)));

    let close = Callback::new(move |()| {
        flashes.update(|f| f.clear_flashes(Some(CREATE_FLASH_KEY)));
        on_close.run(());
    });

    let submit = Callback::new(move |()| {
        if submitting.get_untracked() {
            return;
        }
        flashes.update(|f| f.clear_flashes(Some(CREATE_FLASH_KEY)));

        let (role_name, role_description) =
            match validate_new_role_input(&name.get_untracked(), &description.get_untracked()) {
                Ok(input) => input,
                Err(message) => {
                    flashes.update(|f| {
                        f.add_error(CREATE_FLASH_KEY, message);
                    });
                    return;
                }
            };

        submitting.set(true);

        #[cfg(feature = "hydrate")]
        {
            let guard = guard.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_role(&role_name, &role_description).await {
                    Ok(role) => {
                        log::debug!("created role {} ({})", role.id, role.name);
                        // Appended even when the dialog has already closed.
                        roles.update(|s| s.append_role(role));
                        if guard.is_active() {
                            submitting.set(false);
                            close.run(());
                        }
                    }
                    Err(err) => {
                        log::error!("failed to create role: {err:?}");
                        if guard.is_active() {
                            flashes.update(|f| {
                                f.clear_and_add_http_error(CREATE_FLASH_KEY, &err);
                            });
                            submitting.set(false);
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (roles, &guard, role_name, role_description);
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"New Role"</h2>
                <FlashMessageRender by_key=CREATE_FLASH_KEY/>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            name.set(event_target_value(&ev));
                        }
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input dialog__input--multiline"
                        rows="4"
                        prop:value=move || description.get()
                        on:input=move |ev| {
                            description.set(event_target_value(&ev));
                        }
                    ></textarea>
                </label>
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| close.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        type="button"
                        prop:disabled=move || submitting.get()
                        on:click=move |_| submit.run(())
                    >
                        "Create Role"
                    </button>
                </div>
            </div>
        </div>
    }
}
