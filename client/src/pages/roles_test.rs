use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::FutureExt;
use futures::channel::oneshot;
use futures::executor::block_on;

use super::*;

/// App-level stores that outlive a single page mount.
#[derive(Default)]
struct Stores {
    roles: RefCell<RolesState>,
    flashes: RefCell<FlashState>,
}

/// One page mount: shared stores plus its own `loading` flag.
struct FakeSink {
    stores: Rc<Stores>,
    loading: Cell<bool>,
}

impl FakeSink {
    fn mount(stores: &Rc<Stores>) -> Self {
        Self { stores: Rc::clone(stores), loading: Cell::new(true) }
    }

    fn view_state(&self) -> RoleListViewState {
        RoleListViewState::resolve(self.loading.get(), &self.stores.roles.borrow().data)
    }

    fn notices(&self, key: &str) -> Vec<String> {
        self.stores
            .flashes
            .borrow()
            .by_key(Some(key))
            .into_iter()
            .map(|m| m.message)
            .collect()
    }
}

impl RoleListSink for FakeSink {
    fn role_count(&self) -> usize {
        self.stores.roles.borrow().data.len()
    }

    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }

    fn set_roles(&self, roles: Vec<Role>) {
        self.stores.roles.borrow_mut().set_roles(roles);
    }

    fn clear_notices(&self, key: &str) {
        self.stores.flashes.borrow_mut().clear_flashes(Some(key));
    }

    fn add_error(&self, key: &str, message: &str) {
        self.stores.flashes.borrow_mut().add_error(key, message);
    }
}

fn admin() -> Role {
    Role { id: 1, name: "Admin".to_owned(), description: Some("Full access".to_owned()) }
}

fn server_error() -> HttpError {
    HttpError::Status {
        status: 500,
        body: r#"{"errors":[{"code":"HttpException","status":"500","detail":"Server Error"}]}"#.to_owned(),
    }
}

type FetchResult = Result<Vec<Role>, HttpError>;

/// A fetch that stays pending until the returned sender fires.
fn pending_fetch() -> (oneshot::Sender<FetchResult>, impl Future<Output = FetchResult>) {
    let (tx, rx) = oneshot::channel::<FetchResult>();
    let fetch = async move { rx.await.unwrap_or_else(|_| Err(HttpError::Network("cancelled".to_owned()))) };
    (tx, fetch)
}

#[test]
fn successful_fetch_renders_rows() {
    let stores = Rc::new(Stores::default());
    let sink = FakeSink::mount(&stores);
    let guard = ActivationGuard::new();

    block_on(load_roles(&sink, &guard, async { Ok::<_, HttpError>(vec![admin()]) }));

    assert!(!sink.loading.get());
    assert_eq!(sink.view_state(), RoleListViewState::Populated(vec![admin()]));
    let roles = stores.roles.borrow();
    let row = &roles.data[0];
    assert_eq!((row.id, row.name.as_str(), row.description.as_deref()), (1, "Admin", Some("Full access")));
}

#[test]
fn empty_fetch_renders_empty_state() {
    let stores = Rc::new(Stores::default());
    let sink = FakeSink::mount(&stores);

    block_on(load_roles(&sink, &ActivationGuard::new(), async { Ok::<_, HttpError>(Vec::new()) }));

    assert_eq!(sink.view_state(), RoleListViewState::Empty);
    assert!(sink.notices(ROLES_FLASH_KEY).is_empty());
}

#[test]
fn failed_fetch_shows_humanized_notice() {
    let stores = Rc::new(Stores::default());
    let sink = FakeSink::mount(&stores);

    block_on(load_roles(&sink, &ActivationGuard::new(), async { Err::<Vec<Role>, _>(server_error()) }));

    assert_eq!(sink.notices(ROLES_FLASH_KEY), vec!["Server Error".to_owned()]);
    assert_eq!(sink.view_state(), RoleListViewState::Empty);
    assert!(!sink.loading.get());
}

#[test]
fn failed_fetch_keeps_previous_rows() {
    let stores = Rc::new(Stores::default());
    stores.roles.borrow_mut().set_roles(vec![admin()]);
    let sink = FakeSink::mount(&stores);

    let offline = HttpError::Network("offline".to_owned());
    block_on(load_roles(&sink, &ActivationGuard::new(), async { Err::<Vec<Role>, _>(offline) }));

    assert_eq!(sink.view_state(), RoleListViewState::Populated(vec![admin()]));
    assert_eq!(sink.notices(ROLES_FLASH_KEY), vec!["Network Error: offline".to_owned()]);
}

#[test]
fn loading_shows_before_fetch_resolves() {
    let stores = Rc::new(Stores::default());
    let sink = FakeSink::mount(&stores);
    let guard = ActivationGuard::new();
    let (tx, fetch) = pending_fetch();

    let mut activation = Box::pin(load_roles(&sink, &guard, fetch));
    assert!(activation.as_mut().now_or_never().is_none());
    assert_eq!(sink.view_state(), RoleListViewState::Loading);

    tx.send(Ok(vec![admin()])).unwrap();
    block_on(activation);
    assert_eq!(sink.view_state(), RoleListViewState::Populated(vec![admin()]));
}

#[test]
fn refresh_keeps_prior_rows_visible() {
    let stores = Rc::new(Stores::default());
    stores.roles.borrow_mut().set_roles(vec![admin()]);
    let sink = FakeSink::mount(&stores);
    let guard = ActivationGuard::new();
    let (tx, fetch) = pending_fetch();

    let mut activation = Box::pin(load_roles(&sink, &guard, fetch));
    assert!(activation.as_mut().now_or_never().is_none());
    assert!(!sink.loading.get());
    assert_eq!(sink.view_state(), RoleListViewState::Populated(vec![admin()]));

    let support = Role { id: 2, name: "Support".to_owned(), description: None };
    tx.send(Ok(vec![support.clone()])).unwrap();
    block_on(activation);
    assert_eq!(sink.view_state(), RoleListViewState::Populated(vec![support]));
}

#[test]
fn remount_fetches_once_more_with_its_own_loading_cycle() {
    let stores = Rc::new(Stores::default());
    let calls = Cell::new(0_usize);
    let fetch = |roles: Vec<Role>| {
        calls.set(calls.get() + 1);
        async move { Ok::<_, HttpError>(roles) }
    };

    let first = FakeSink::mount(&stores);
    let first_guard = ActivationGuard::new();
    block_on(load_roles(&first, &first_guard, fetch(vec![admin()])));
    first_guard.deactivate();
    assert_eq!(calls.get(), 1);

    let second = FakeSink::mount(&stores);
    assert!(second.loading.get());
    let second_guard = ActivationGuard::new();
    block_on(load_roles(&second, &second_guard, fetch(Vec::new())));

    assert_eq!(calls.get(), 2);
    assert!(!second.loading.get());
    assert_eq!(second.view_state(), RoleListViewState::Empty);
    // The first mount's flag is untouched by the second activation.
    assert!(!first.loading.get());
}

#[test]
fn activation_clears_own_notices_before_fetch_resolves() {
    let stores = Rc::new(Stores::default());
    stores.flashes.borrow_mut().add_error(ROLES_FLASH_KEY, "stale");
    stores.flashes.borrow_mut().add_error("users", "unrelated");
    let sink = FakeSink::mount(&stores);
    let guard = ActivationGuard::new();
    let (tx, fetch) = pending_fetch();

    let mut activation = Box::pin(load_roles(&sink, &guard, fetch));
    assert!(activation.as_mut().now_or_never().is_none());
    assert!(sink.notices(ROLES_FLASH_KEY).is_empty());
    assert_eq!(sink.notices("users"), vec!["unrelated".to_owned()]);

    tx.send(Ok(Vec::new())).unwrap();
    block_on(activation);
}

#[test]
fn result_after_unmount_is_dropped() {
    let stores = Rc::new(Stores::default());
    let sink = FakeSink::mount(&stores);
    let guard = ActivationGuard::new();
    let (tx, fetch) = pending_fetch();

    let mut activation = Box::pin(load_roles(&sink, &guard, fetch));
    assert!(activation.as_mut().now_or_never().is_none());
    guard.deactivate();

    tx.send(Ok(vec![admin()])).unwrap();
    block_on(activation);

    assert!(stores.roles.borrow().is_empty());
    assert!(sink.loading.get());
    assert!(sink.notices(ROLES_FLASH_KEY).is_empty());
}

#[test]
fn failure_after_unmount_adds_no_notice() {
    let stores = Rc::new(Stores::default());
    let sink = FakeSink::mount(&stores);
    let guard = ActivationGuard::new();
    guard.deactivate();

    block_on(load_roles(&sink, &guard, async { Err::<Vec<Role>, _>(server_error()) }));

    assert!(sink.notices(ROLES_FLASH_KEY).is_empty());
}

#[cfg(feature = "ssr")]
mod render {
    use super::*;

    /// Server-render the page against the given shared stores.
    fn render_page(roles: Vec<Role>, flashes: FlashState) -> String {
        let owner = Owner::new();
        owner.with(|| {
            leptos_meta::provide_meta_context();
            let mut state = RolesState::default();
            state.set_roles(roles);
            provide_context(RwSignal::new(state));
            provide_context(RwSignal::new(flashes));
            view! { <RolesPage/> }.to_html()
        })
    }

    fn render_state(state: RoleListViewState) -> String {
        Owner::new().with(|| render_view_state(state).to_html())
    }

    #[test]
    fn first_mount_renders_spinner_with_header_and_notice_region() {
        let mut flashes = FlashState::default();
        flashes.add_error(ROLES_FLASH_KEY, "Server Error");

        let html = render_page(Vec::new(), flashes);

        assert!(html.contains("spinner spinner--base"));
        assert!(!html.contains("<table"));
        assert!(html.contains("New Role"));
        assert!(html.contains("Soon™"));
        assert!(html.contains(r#"class="flash-region""#));
        assert!(html.contains("Server Error"));
    }

    #[test]
    fn notice_region_and_create_control_render_without_notices() {
        let html = render_page(Vec::new(), FlashState::default());

        assert!(html.contains(r#"class="flash-region""#));
        assert!(html.contains("New Role"));
    }

    #[test]
    fn remount_with_known_roles_renders_rows_not_spinner() {
        let html = render_page(vec![admin()], FlashState::default());

        assert!(!html.contains("spinner"));
        assert_eq!(html.matches(r#"<tr class="admin-table__row""#).count(), 1);
        assert!(html.contains("New Role"));
    }

    #[test]
    fn empty_state_renders_illustration_and_no_table() {
        let html = render_state(RoleListViewState::Empty);

        assert!(html.contains("/assets/svgs/not_found.svg"));
        assert!(html.contains("No items could be found"));
        assert!(!html.contains("<table"));
        assert!(!html.contains("spinner"));
    }

    #[test]
    fn populated_state_renders_one_row_with_three_cells() {
        let html = render_state(RoleListViewState::Populated(vec![admin()]));

        assert_eq!(html.matches(r#"<tr class="admin-table__row""#).count(), 1);
        assert_eq!(html.matches("<td").count(), 3);
        assert!(html.contains(">1</td>"));
        assert!(html.contains(">Admin</td>"));
        assert!(html.contains(">Full access</td>"));
        assert!(!html.contains("spinner"));
    }

    #[test]
    fn missing_description_renders_an_empty_cell() {
        let support = Role { id: 2, name: "Support".to_owned(), description: None };
        let html = render_state(RoleListViewState::Populated(vec![support]));

        assert_eq!(html.matches("<td").count(), 3);
        assert!(html.contains(">Support</td>"));
        assert!(!html.contains("None"));
    }
}
