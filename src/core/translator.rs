use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    core::{
        msg::{journal::JournalMsg, system::SystemMsg, ui::UiMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::ui::View,
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on the active view and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Paste(text) => {
            if state.ui.is_composing() {
                vec![Msg::Ui(UiMsg::InsertText(text))]
            } else {
                vec![]
            }
        }

        // Persistence service results
        RawMsg::ThoughtsLoaded(thoughts) => vec![Msg::Journal(JournalMsg::Loaded(thoughts))],
        RawMsg::ThoughtsLoadFailed(error) => vec![Msg::Journal(JournalMsg::LoadFailed(error))],
        RawMsg::ThoughtCreated(thought) => vec![Msg::Journal(JournalMsg::Created(thought))],
        RawMsg::ThoughtCreateFailed(error) => {
            vec![Msg::Journal(JournalMsg::CreateFailed(error))]
        }
        RawMsg::ThoughtDeleted(id) => vec![Msg::Journal(JournalMsg::Deleted(id))],
        RawMsg::ThoughtDeleteFailed { id, error } => {
            vec![Msg::Journal(JournalMsg::DeleteFailed { id, error })]
        }

        // Timers
        RawMsg::ConfirmationElapsed(generation) => {
            vec![Msg::Ui(UiMsg::ConfirmationElapsed(generation))]
        }

        // System status
        RawMsg::SystemMessage(msg) => vec![Msg::System(SystemMsg::UpdateStatusMessage(msg))],
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
    if key.kind == KeyEventKind::Release {
        return vec![];
    }

    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    let view = state.ui.view;
    if let Some(action) = state.config.config.keybindings.action_for(view, &key) {
        return translate_action_to_msg(*action);
    }

    // Everything else typed in the compose view goes to the editor
    match view {
        View::Compose => vec![Msg::Ui(UiMsg::ProcessTextAreaInput(key))],
        View::History => vec![],
    }
}

fn translate_action_to_msg(action: Action) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::Submit => vec![Msg::Ui(UiMsg::Submit)],
        Action::ShowCompose => vec![Msg::Ui(UiMsg::SwitchView(View::Compose))],
        Action::ShowHistory => vec![Msg::Ui(UiMsg::SwitchView(View::History))],
        Action::ToggleView => vec![Msg::Ui(UiMsg::ToggleView)],
        Action::ToggleTheme => vec![Msg::Ui(UiMsg::ToggleTheme)],
        Action::ScrollUp => vec![Msg::Journal(JournalMsg::SelectPrevious)],
        Action::ScrollDown => vec![Msg::Journal(JournalMsg::SelectNext)],
        Action::ScrollToTop => vec![Msg::Journal(JournalMsg::SelectFirst)],
        Action::ScrollToBottom => vec![Msg::Journal(JournalMsg::SelectLast)],
        Action::DeleteSelected => vec![Msg::Journal(JournalMsg::DeleteSelected)],
        Action::Reload => vec![Msg::Journal(JournalMsg::Load)],
    }
}
