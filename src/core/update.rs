use crate::core::{
    cmd::Cmd,
    msg::{journal::JournalMsg, system::SystemMsg, ui::UiMsg, Msg},
    state::{journal::FETCH_LIMIT, system::ServiceMode, AppState},
    textarea_engine::{NoopTextAreaEngine, TextAreaEngine},
};

/// Collaborators the pure update path may consult
pub struct UpdateContext<'a> {
    pub text_area: &'a (dyn TextAreaEngine + Send + Sync),
}

/// Commands issued once when the application starts
pub fn init(_state: &AppState) -> Vec<Cmd> {
    vec![Cmd::LoadThoughts { limit: FETCH_LIMIT }]
}

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, state: AppState) -> (AppState, Vec<Cmd>) {
    static ENGINE: NoopTextAreaEngine = NoopTextAreaEngine;
    update_with_context(msg, state, &UpdateContext { text_area: &ENGINE })
}

/// Same as [`update`] but with injected collaborators
pub fn update_with_context(
    msg: Msg,
    mut state: AppState,
    ctx: &UpdateContext<'_>,
) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // A save finished: the journal, the compose view and the status bar all change
        Msg::Journal(JournalMsg::Created(thought)) => {
            let mut commands = state.journal.update(JournalMsg::Created(thought.clone()));
            commands.push(state.ui.finish_save());
            if state.system.service_mode == ServiceMode::Connected {
                commands.push(Cmd::NotifyWebhook { thought });
            }
            (state, commands)
        }

        // Store failures are only logged
        Msg::Journal(JournalMsg::CreateFailed(error)) => {
            state.ui.abort_save();
            let commands = state.journal.update(JournalMsg::CreateFailed(error));
            (state, commands)
        }

        // No refetch offline or while a fetch or save is in flight
        Msg::Journal(JournalMsg::Load) => {
            if state.system.is_offline() || state.journal.loading || state.ui.saving {
                return (state, vec![]);
            }
            let commands = state.journal.update(JournalMsg::Load);
            (state, commands)
        }

        Msg::Journal(JournalMsg::Deleted(id)) => {
            let known = state.journal.contains(id);
            let commands = state.journal.update(JournalMsg::Deleted(id));
            if known {
                state.system.update(SystemMsg::UpdateStatusMessage(format!(
                    "[Deleted] thought {id}"
                )));
            }
            (state, commands)
        }

        // Other journal messages (delegated to JournalState)
        Msg::Journal(journal_msg) => {
            let commands = state.journal.update(journal_msg);
            (state, commands)
        }

        // Draft editing goes through the injected engine
        Msg::Ui(UiMsg::ProcessTextAreaInput(key)) => {
            if state.ui.can_edit() {
                state.ui.draft = ctx.text_area.apply_keys(&state.ui.draft, &[key]);
            }
            (state, vec![])
        }

        Msg::Ui(UiMsg::InsertText(text)) => {
            if state.ui.can_edit() {
                state.ui.draft = ctx.text_area.insert_text(&state.ui.draft, &text);
            }
            (state, vec![])
        }

        // Other UI messages (delegated to UiState)
        Msg::Ui(ui_msg) => {
            let commands = state.ui.update(ui_msg);
            (state, commands)
        }
    }
}
