use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use pretty_assertions::assert_eq;

use storefront::core::raw_msg::RawMsg;
use storefront::core::state::{AppState, Focus};
use storefront::domain::product::{Catalog, Product};
use storefront::infrastructure::config::Config;
use storefront::infrastructure::scheduler::ManualClock;
use storefront::integration::runtime::Runtime;
use storefront::model::Playback;

fn catalog() -> Catalog {
    let mut phone = Product::new("p-1", "Pixel Phone");
    phone.brand = "Gadgetry".to_string();
    phone.thumbnail = Some("https://img.example/p-1.png".to_string());
    let mut shoes = Product::new("p-2", "Trail Shoes");
    shoes.category = "outdoor".to_string();
    let mut tent = Product::new("p-3", "Tent");
    tent.category = "outdoor".to_string();
    Catalog::new(vec![phone, shoes, tent])
}

fn runtime() -> (Runtime, ManualClock) {
    let clock = ManualClock::new();
    let config = Config::embedded().expect("embedded config parses");
    let state = AppState::new(config, catalog(), Rc::new(clock.clone()));
    let mut runtime = Runtime::new(state);
    runtime.send_raw_msg(RawMsg::Resize(60, 24));
    runtime.process_all_messages();
    (runtime, clock)
}

fn press(runtime: &mut Runtime, code: KeyCode) {
    runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    runtime.process_all_messages();
}

fn type_text(runtime: &mut Runtime, text: &str) {
    for c in text.chars() {
        press(runtime, KeyCode::Char(c));
    }
}

fn mouse(runtime: &mut Runtime, kind: MouseEventKind, column: u16, row: u16) {
    runtime.send_raw_msg(RawMsg::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }));
    runtime.process_all_messages();
}

fn tick(runtime: &mut Runtime, clock: &ManualClock, by: Duration) {
    for id in clock.advance(by) {
        runtime.send_raw_msg(RawMsg::CarouselTick(id));
    }
    runtime.process_all_messages();
}

fn slide_index(runtime: &Runtime) -> Option<usize> {
    runtime
        .state()
        .carousel
        .controller()
        .map(|c| c.current_index())
}

#[test]
fn test_keyboard_navigation_and_auto_advance() {
    let (mut runtime, clock) = runtime();

    press(&mut runtime, KeyCode::Right);
    press(&mut runtime, KeyCode::Right);
    assert_eq!(slide_index(&runtime), Some(2));
    press(&mut runtime, KeyCode::Char('1'));
    assert_eq!(slide_index(&runtime), Some(0));

    tick(&mut runtime, &clock, Duration::from_millis(4999));
    assert_eq!(slide_index(&runtime), Some(0));
    tick(&mut runtime, &clock, Duration::from_millis(1));
    assert_eq!(slide_index(&runtime), Some(1));
}

#[test]
fn test_search_hides_carousel_and_clearing_brings_it_back() {
    let (mut runtime, clock) = runtime();
    press(&mut runtime, KeyCode::Right);

    press(&mut runtime, KeyCode::Char('/'));
    type_text(&mut runtime, "outdoor");
    press(&mut runtime, KeyCode::Enter);

    let state = runtime.state();
    assert!(!state.carousel.is_mounted());
    assert_eq!(state.ui.focus, Focus::ProductList);
    let ids: Vec<_> = state.filtered_products().iter().map(|p| p.id.clone()).collect();
    assert_eq!(ids, vec!["p-2".to_string(), "p-3".to_string()]);
    assert_eq!(clock.active_timers(), 0);

    // Esc outside the search box clears the query
    press(&mut runtime, KeyCode::Esc);
    assert!(runtime.state().search.query.is_empty());
    assert_eq!(slide_index(&runtime), Some(0));
    assert_eq!(runtime.state().carousel.playback(), Some(Playback::Running));
    assert_eq!(clock.active_timers(), 1);
}

#[test]
fn test_open_product_from_list() {
    let (mut runtime, _clock) = runtime();

    press(&mut runtime, KeyCode::Tab);
    press(&mut runtime, KeyCode::Down);
    press(&mut runtime, KeyCode::Down);
    press(&mut runtime, KeyCode::Enter);

    assert_eq!(
        runtime.state().system.status_bar.message(),
        Some("[Open] /product-detail/p-2")
    );
}

#[test]
fn test_open_current_slide() {
    let (mut runtime, _clock) = runtime();
    press(&mut runtime, KeyCode::Left);
    press(&mut runtime, KeyCode::Enter);
    assert_eq!(
        runtime.state().system.status_bar.message(),
        Some("[Open] /product-detail/p-3")
    );
}

#[test]
fn test_hover_pauses_until_pointer_leaves() {
    let (mut runtime, clock) = runtime();

    // carousel occupies rows 3..11
    mouse(&mut runtime, MouseEventKind::Moved, 30, 6);
    assert_eq!(runtime.state().carousel.playback(), Some(Playback::Paused));
    tick(&mut runtime, &clock, Duration::from_secs(30));
    assert_eq!(slide_index(&runtime), Some(0));

    mouse(&mut runtime, MouseEventKind::Moved, 30, 15);
    assert_eq!(runtime.state().carousel.playback(), Some(Playback::Running));
    tick(&mut runtime, &clock, Duration::from_millis(5000));
    assert_eq!(slide_index(&runtime), Some(1));
}

#[test]
fn test_clicking_arrows_and_dots() {
    let (mut runtime, _clock) = runtime();
    // 60 columns: next arrow at 56..59, dots at 27, 29, 31 on row 9
    mouse(&mut runtime, MouseEventKind::Down(MouseButton::Left), 57, 7);
    assert_eq!(slide_index(&runtime), Some(1));
    mouse(&mut runtime, MouseEventKind::Down(MouseButton::Left), 2, 7);
    assert_eq!(slide_index(&runtime), Some(0));
    mouse(&mut runtime, MouseEventKind::Down(MouseButton::Left), 31, 9);
    assert_eq!(slide_index(&runtime), Some(2));
}

#[test]
fn test_toggle_auto_advance_key() {
    let (mut runtime, clock) = runtime();
    press(&mut runtime, KeyCode::Char('p'));
    assert_eq!(runtime.state().carousel.playback(), Some(Playback::Paused));
    tick(&mut runtime, &clock, Duration::from_secs(20));
    assert_eq!(slide_index(&runtime), Some(0));

    press(&mut runtime, KeyCode::Char('p'));
    assert_eq!(runtime.state().carousel.playback(), Some(Playback::Running));
}
