use crate::core::{
    cmd::Cmd,
    msg::{search::SearchMsg, system::SystemMsg, ui::UiMsg, Msg},
    state::{AppState, Focus},
};

/// Elm-like update function
/// Applies `msg` to `state` and returns the side effects to run
pub fn update(msg: Msg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        Msg::System(system_msg) => state.system.update(system_msg),

        Msg::Carousel(carousel_msg) => state.carousel.update(carousel_msg),

        Msg::Search(search_msg) => {
            let query_changed = matches!(
                search_msg,
                SearchMsg::Insert(_) | SearchMsg::DeleteBackward | SearchMsg::Clear
            );
            let commands = state.search.update(search_msg);
            if query_changed {
                state.catalog.refilter(&state.search.query);
                state.sync_carousel();
            }
            commands
        }

        Msg::Ui(ui_msg) => update_ui(ui_msg, state),
    }
}

fn update_ui(msg: UiMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        UiMsg::ScrollUp => {
            state.catalog.select_previous();
            vec![Cmd::RequestRender]
        }

        UiMsg::ScrollDown => {
            state.catalog.select_next(&state.search.query);
            vec![Cmd::RequestRender]
        }

        UiMsg::ToggleFocus => {
            // the carousel cannot take focus while unmounted
            if state.carousel_visible() {
                state.ui.focus = state.ui.focus.toggled();
            } else {
                state.ui.focus = Focus::ProductList;
            }
            vec![Cmd::RequestRender]
        }

        UiMsg::OpenFocused => match state.focused_link_target() {
            Some(target) => {
                let mut commands = vec![Cmd::log_info(format!("navigate to {target}"))];
                commands.extend(state.system.update(SystemMsg::UpdateStatusMessage {
                    label: "Open".to_string(),
                    message: target,
                }));
                commands
            }
            None => state.system.update(SystemMsg::UpdateStatusMessage {
                label: "Open".to_string(),
                message: "Nothing selected".to_string(),
            }),
        },
    }
}
