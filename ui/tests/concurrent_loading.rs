//! Two dataset fetches in flight at once, completing out of order.

use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::LocalPool;
use futures::task::LocalSpawnExt;
use futures_channel::oneshot;

use ui::chart::SvgChartFactory;
use ui::core::{
    AddOutcome, AppConfig, Category, ColorPicker, DataTable, LoadError, LoadState, NamesApp,
    Notice, Row, SwitchOutcome,
};

type SharedApp = Rc<RefCell<NamesApp<SvgChartFactory>>>;

fn app() -> SharedApp {
    let app = NamesApp::new(AppConfig::countries(), SvgChartFactory::default())
        .with_colors(ColorPicker::seeded(9));
    Rc::new(RefCell::new(app))
}

/// Starts a load for `category` whose result arrives through the returned
/// sender.
fn spawn_fetch(
    pool: &LocalPool,
    app: &SharedApp,
    category: Category,
) -> oneshot::Sender<Result<DataTable, LoadError>> {
    let ticket = app.borrow_mut().begin_load(category).unwrap();
    let (tx, rx) = oneshot::channel();
    let app = Rc::clone(app);
    pool.spawner()
        .spawn_local(async move {
            let result = rx.await.unwrap_or_else(|_| {
                Err(LoadError::Fetch {
                    url: category.file_name().into(),
                    message: "cancelled".into(),
                })
            });
            app.borrow_mut().finish_load(ticket, result);
        })
        .unwrap();
    tx
}

#[test]
fn loading_flag_holds_until_every_dataset_finishes() {
    let mut pool = LocalPool::new();
    let app = app();

    let canada = spawn_fetch(&pool, &app, Category::Canada);
    let usa = spawn_fetch(&pool, &app, Category::Usa);
    pool.run_until_stalled();
    assert!(app.borrow().is_loading());

    // USA finishes first.
    usa.send(Ok(DataTable::new(vec![Row::new("BOB", 2000, 600)])))
        .unwrap();
    pool.run_until_stalled();
    {
        let state = app.borrow();
        assert!(state.is_loading());
        assert_eq!(state.loading_categories(), vec![Category::Canada]);
        assert_eq!(state.load_state(Category::Usa), LoadState::Loaded);
    }

    canada
        .send(Ok(DataTable::new(vec![Row::new("ALICE", 2000, 10)])))
        .unwrap();
    pool.run_until_stalled();
    let state = app.borrow();
    assert!(!state.is_loading());
    assert_eq!(state.active_table().len(), 1);
}

#[test]
fn adds_issued_mid_load_apply_once_the_active_dataset_lands() {
    let mut pool = LocalPool::new();
    let app = app();

    let canada = spawn_fetch(&pool, &app, Category::Canada);
    let usa = spawn_fetch(&pool, &app, Category::Usa);

    assert_eq!(app.borrow_mut().on_add_requested("Alice"), AddOutcome::Queued);

    usa.send(Ok(DataTable::new(vec![Row::new("ALICE", 1990, 3)])))
        .unwrap();
    pool.run_until_stalled();
    // Canada is active and still loading.
    assert_eq!(app.borrow().pending_len(), 1);
    assert!(app.borrow().selected_names().is_empty());

    canada
        .send(Ok(DataTable::new(vec![Row::new("ALICE", 2000, 10)])))
        .unwrap();
    pool.run_until_stalled();

    let state = app.borrow();
    assert_eq!(state.pending_len(), 0);
    assert_eq!(state.selected_names(), ["Alice".to_string()]);
    assert_eq!(state.pivot().value(2000, "Alice"), Some(10));
}

#[test]
fn a_failed_dataset_does_not_block_the_other() {
    let mut pool = LocalPool::new();
    let app = app();

    let canada = spawn_fetch(&pool, &app, Category::Canada);
    let usa = spawn_fetch(&pool, &app, Category::Usa);

    canada
        .send(Err(LoadError::Fetch {
            url: "canada_names.csv".into(),
            message: "HTTP 404".into(),
        }))
        .unwrap();
    usa.send(Ok(DataTable::new(vec![Row::new("BOB", 2000, 600)])))
        .unwrap();
    pool.run_until_stalled();

    let mut state = app.borrow_mut();
    assert!(!state.is_loading());
    assert!(matches!(
        state.load_state(Category::Canada),
        LoadState::Failed(_)
    ));
    assert!(state.active_table().is_empty());
    assert_eq!(
        state.on_dataset_switch_requested(Category::Usa),
        SwitchOutcome::Switched
    );
    assert_eq!(state.on_add_requested("Bob"), AddOutcome::Added);
}

#[test]
fn switch_to_a_loading_dataset_queues_and_later_adds_wait_behind_it() {
    let mut pool = LocalPool::new();
    let app = app();

    let canada = spawn_fetch(&pool, &app, Category::Canada);
    let usa = spawn_fetch(&pool, &app, Category::Usa);
    canada
        .send(Ok(DataTable::new(vec![Row::new("ALICE", 2000, 10)])))
        .unwrap();
    pool.run_until_stalled();

    {
        let mut state = app.borrow_mut();
        assert_eq!(
            state.on_dataset_switch_requested(Category::Usa),
            SwitchOutcome::Queued
        );
        // Canada is idle, but the add still waits behind the switch.
        assert_eq!(state.on_add_requested("Bob"), AddOutcome::Queued);
        assert_eq!(state.pending_len(), 2);
        assert_eq!(state.active_category(), Category::Canada);
    }

    usa.send(Ok(DataTable::new(vec![Row::new("BOB", 2000, 600)])))
        .unwrap();
    pool.run_until_stalled();

    let mut state = app.borrow_mut();
    assert_eq!(state.pending_len(), 0);
    assert_eq!(state.active_category(), Category::Usa);
    // Bob only exists in the USA table, so the add ran after the switch.
    assert_eq!(state.selected_names(), ["Bob".to_string()]);
    assert_eq!(state.pivot().value(2000, "Bob"), Some(600));
    assert!(!state
        .take_notices()
        .iter()
        .any(|notice| matches!(notice, Notice::NotFound { .. })));
}
