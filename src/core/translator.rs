use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::core::action::Action;
use crate::core::{
    msg::{
        carousel::CarouselMsg, search::SearchMsg, system::SystemMsg, ui::UiMsg, Msg,
    },
    raw_msg::RawMsg,
    state::AppState,
};
use crate::domain::ui::{CarouselHit, CarouselLayout, HomeLayout};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Mouse(mouse) => translate_mouse_event(mouse, state),

        RawMsg::CarouselTick(id) => vec![Msg::Carousel(CarouselMsg::TimerFired(id))],

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError {
            label: "Error".to_string(),
            message: error,
        })],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    if key.kind != KeyEventKind::Press {
        return vec![];
    }

    if let KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        ..
    } = key
    {
        return vec![Msg::System(SystemMsg::Quit)];
    }

    if state.search.editing {
        translate_search_mode_keys(key)
    } else {
        translate_normal_mode_keys(key, state)
    }
}

/// Key bindings while the search box has focus
fn translate_search_mode_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => vec![Msg::Search(SearchMsg::Finish)],
        KeyCode::Backspace => vec![Msg::Search(SearchMsg::DeleteBackward)],
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            vec![Msg::Search(SearchMsg::Insert(c))]
        }
        _ => vec![],
    }
}

/// Key bindings when in normal navigation mode
fn translate_normal_mode_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    match state.config.config.keybindings.action_for(&key) {
        Some(action) => translate_action_to_msg(action),
        None => vec![],
    }
}

fn translate_action_to_msg(action: &Action) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::NextSlide => vec![Msg::Carousel(CarouselMsg::Next)],
        Action::PreviousSlide => vec![Msg::Carousel(CarouselMsg::Previous)],
        Action::GoToSlide(index) => vec![Msg::Carousel(CarouselMsg::GoTo(*index))],
        Action::ToggleAutoAdvance => vec![Msg::Carousel(CarouselMsg::ToggleAutoAdvance)],
        Action::ScrollUp => vec![Msg::Ui(UiMsg::ScrollUp)],
        Action::ScrollDown => vec![Msg::Ui(UiMsg::ScrollDown)],
        Action::ToggleFocus => vec![Msg::Ui(UiMsg::ToggleFocus)],
        Action::OpenSelected => vec![Msg::Ui(UiMsg::OpenFocused)],
        Action::StartSearch => vec![Msg::Search(SearchMsg::Start)],
        Action::ClearSearch => vec![Msg::Search(SearchMsg::Clear)],
    }
}

/// Hover and clicks over the carousel; the list ignores the mouse
fn translate_mouse_event(mouse: MouseEvent, state: &AppState) -> Vec<Msg> {
    let Some(layout) = carousel_layout(state) else {
        return vec![];
    };
    let inside = layout.contains(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            match (inside, state.carousel.hovered) {
                (true, false) => vec![Msg::Carousel(CarouselMsg::PointerEntered)],
                (false, true) => vec![Msg::Carousel(CarouselMsg::PointerLeft)],
                _ => vec![],
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            match layout.hit(mouse.column, mouse.row) {
                Some(CarouselHit::Previous) => vec![Msg::Carousel(CarouselMsg::Previous)],
                Some(CarouselHit::Next) => vec![Msg::Carousel(CarouselMsg::Next)],
                Some(CarouselHit::Dot(index)) => {
                    let index = isize::try_from(index).unwrap_or(isize::MAX);
                    vec![Msg::Carousel(CarouselMsg::GoTo(index))]
                }
                None => vec![],
            }
        }
        _ => vec![],
    }
}

fn carousel_layout(state: &AppState) -> Option<CarouselLayout> {
    if !state.carousel.is_mounted() {
        return None;
    }
    let area = HomeLayout::new(state.system.viewport, true).carousel?;
    Some(CarouselLayout::new(area, state.carousel.slides().len()))
}
