//! Admin roles page: fetch the role list on mount and render it as a table.
//!
//! SYSTEM CONTEXT
//! ==============
//! The role collection lives in the shared `RolesState` signal; this page only
//! owns a `loading` flag for its own mount. Each mount clears the page's
//! `"roles"` notices, refetches, and replaces the collection wholesale.
//!
//! ERROR HANDLING
//! ==============
//! A failed fetch is logged and surfaced as a dismissible notice in the
//! `"roles"` namespace. The page then falls through to its empty state; it
//! never retries on its own.

#[cfg(test)]
#[path = "roles_test.rs"]
mod roles_test;

use leptos::prelude::*;

use crate::components::admin_content_block::AdminContentBlock;
use crate::components::flash_message_render::FlashMessageRender;
use crate::components::new_role_button::NewRoleButton;
use crate::components::no_items::NoItems;
use crate::components::spinner::{Spinner, SpinnerSize};
#[cfg(any(test, feature = "hydrate"))]
use crate::net::http::{HttpError, http_error_to_human};
use crate::state::flash::FlashState;
use crate::state::roles::{Role, RoleListViewState, RolesState};
use crate::util::activation::ActivationGuard;

/// Notice namespace owned by this page.
pub const ROLES_FLASH_KEY: &str = "roles";

/// Writes performed by one activation of the roles page.
///
/// The browser implementation writes Leptos signals; tests use plain state.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) trait RoleListSink {
    fn role_count(&self) -> usize;
    fn set_loading(&self, loading: bool);
    fn set_roles(&self, roles: Vec<Role>);
    fn clear_notices(&self, key: &str);
    fn add_error(&self, key: &str, message: &str);
}

#[cfg(feature = "hydrate")]
#[derive(Clone, Copy)]
struct SignalSink {
    roles: RwSignal<RolesState>,
    flashes: RwSignal<FlashState>,
    loading: RwSignal<bool>,
}

#[cfg(feature = "hydrate")]
impl RoleListSink for SignalSink {
    fn role_count(&self) -> usize {
        self.roles.with_untracked(|s| s.data.len())
    }

    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }

    fn set_roles(&self, roles: Vec<Role>) {
        self.roles.update(|s| s.set_roles(roles));
    }

    fn clear_notices(&self, key: &str) {
        self.flashes.update(|f| f.clear_flashes(Some(key)));
    }

    fn add_error(&self, key: &str, message: &str) {
        self.flashes.update(|f| {
            f.add_error(key, message);
        });
    }
}

/// One activation of the page: show the spinner only when there is nothing
/// to show yet, clear stale notices, then apply the fetch result.
///
/// `fetch` is not polled until the notices are cleared. If `guard` has been
/// deactivated by the time it resolves, the result is dropped untouched.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) async fn load_roles<S, F>(sink: &S, guard: &ActivationGuard, fetch: F)
where
    S: RoleListSink,
    F: Future<Output = Result<Vec<Role>, HttpError>>,
{
    sink.set_loading(sink.role_count() == 0);
    sink.clear_notices(ROLES_FLASH_KEY);

    let result = fetch.await;
    if !guard.is_active() {
        log::debug!("roles page unmounted before fetch resolved; dropping result");
        return;
    }

    match result {
        Ok(roles) => sink.set_roles(roles),
        Err(err) => {
            log::error!("failed to load roles: {err:?}");
            sink.add_error(ROLES_FLASH_KEY, &http_error_to_human(&err));
        }
    }
    sink.set_loading(false);
}

/// Roles page: header with the create action, the notice region, then the
/// role table or its placeholder.
#[component]
pub fn RolesPage() -> impl IntoView {
    let roles = expect_context::<RwSignal<RolesState>>();
    let flashes = expect_context::<RwSignal<FlashState>>();
    // Prior rows stay visible on remount while the refresh runs.
    let loading = RwSignal::new(roles.with_untracked(RolesState::is_empty));

    let guard = ActivationGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.deactivate()
    });

    #[cfg(feature = "hydrate")]
    {
        let sink = SignalSink { roles, flashes, loading };
        leptos::task::spawn_local(async move {
            load_roles(&sink, &guard, crate::net::api::fetch_roles()).await;
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (flashes, guard);

    let view_state = move || roles.with(|s| RoleListViewState::resolve(loading.get(), &s.data));

    view! {
        <AdminContentBlock title="Roles">
            <div class="admin-page__header">
                <div class="admin-page__heading">
                    <h2 class="admin-page__title">"Roles"</h2>
                    <p class="admin-page__subtitle">"Soon™"</p>
                </div>

                <NewRoleButton/>
            </div>

            <FlashMessageRender by_key=ROLES_FLASH_KEY/>

            <div class="admin-card">
                {move || render_view_state(view_state())}
            </div>
        </AdminContentBlock>
    }
}

fn render_view_state(state: RoleListViewState) -> AnyView {
    match state {
        RoleListViewState::Loading => render_loading().into_any(),
        RoleListViewState::Empty => view! { <NoItems/> }.into_any(),
        RoleListViewState::Populated(rows) => render_table(rows).into_any(),
    }
}

fn render_loading() -> impl IntoView {
    view! {
        <div class="admin-card__loading">
            <Spinner size=SpinnerSize::Base/>
        </div>
    }
}

fn render_table(rows: Vec<Role>) -> impl IntoView {
    view! {
        <div class="admin-table__wrap">
            <table class="admin-table">
                <thead>
                    <tr>
                        <th class="admin-table__head admin-table__head--first">"ID"</th>
                        <th class="admin-table__head">"Name"</th>
                        <th class="admin-table__head admin-table__head--last">"Description"</th>
                    </tr>
                </thead>
                <tbody class="admin-table__body">
                    <For
                        each=move || rows.clone()
                        key=|role| role.id
                        children=move |role: Role| render_row(role)
                    />
                </tbody>
            </table>
        </div>
    }
}

fn render_row(role: Role) -> impl IntoView {
    view! {
        <tr class="admin-table__row">
            <td class="admin-table__cell admin-table__cell--first">{role.id}</td>
            <td class="admin-table__cell">{role.name}</td>
            <td class="admin-table__cell admin-table__cell--last">{role.description.unwrap_or_default()}</td>
        </tr>
    }
}
