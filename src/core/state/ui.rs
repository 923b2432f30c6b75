use crate::{
    core::{cmd::Cmd, msg::ui::UiMsg},
    domain::{
        theme::Theme,
        thought::NewThought,
        ui::{CursorPosition, TextSelection, View},
    },
};

/// How long the save confirmation stays on screen
pub const CONFIRMATION_MS: u64 = 2000;

/// Complete state representation of a TextArea component
/// This struct encapsulates all mutable state that needs to be
/// preserved across TextArea recreation in the stateless approach
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextAreaState {
    /// The complete text content
    pub content: String,
    /// Current cursor position within the text
    pub cursor_position: CursorPosition,
    /// Active text selection range, if any
    pub selection: Option<TextSelection>,
}

impl TextAreaState {
    pub fn new(
        content: String,
        cursor_position: CursorPosition,
        selection: Option<TextSelection>,
    ) -> Self {
        Self {
            content,
            cursor_position,
            selection,
        }
    }

    pub fn empty() -> Self {
        Default::default()
    }

    /// Live counter shown under the editor, counted on the untrimmed draft
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }
}

/// Save confirmation banner, versioned so that only the latest timer hides it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Confirmation {
    visible: bool,
    generation: u64,
}

impl Confirmation {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Shows the banner and returns the generation its timer must report back
    pub fn show(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.visible = true;
        self.generation
    }

    /// Hides the banner if `generation` is still the latest one
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.visible && generation == self.generation {
            self.visible = false;
            return true;
        }
        false
    }
}

/// UI-related state
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub view: View,
    pub draft: TextAreaState,
    /// A create request is in flight; gates further submits
    pub saving: bool,
    pub confirmation: Confirmation,
    pub theme: Theme,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }

    pub fn is_composing(&self) -> bool {
        self.view == View::Compose
    }

    pub fn can_edit(&self) -> bool {
        self.is_composing() && !self.saving
    }

    pub fn can_submit(&self) -> bool {
        !self.saving && self.draft.has_content()
    }

    /// Builds the record to create from the current draft, if it is submittable
    pub fn prepare_submit(&self) -> Option<NewThought> {
        if self.saving {
            return None;
        }
        NewThought::from_draft(&self.draft.content)
    }

    /// Clears the draft, ends the save and shows the confirmation.
    /// Returns the command that will hide it again.
    pub fn finish_save(&mut self) -> Cmd {
        self.saving = false;
        self.draft = TextAreaState::empty();
        let generation = self.confirmation.show();
        Cmd::HideConfirmationAfter {
            generation,
            delay_ms: CONFIRMATION_MS,
        }
    }

    /// Ends the save keeping the draft intact
    pub fn abort_save(&mut self) {
        self.saving = false;
    }

    /// UI-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: UiMsg) -> Vec<Cmd> {
        match msg {
            UiMsg::SwitchView(view) => {
                self.view = view;
                vec![]
            }

            UiMsg::ToggleView => {
                self.view = self.view.toggled();
                vec![]
            }

            UiMsg::ToggleTheme => {
                self.theme = self.theme.toggled();
                vec![Cmd::PersistTheme { theme: self.theme }]
            }

            UiMsg::Submit => match self.prepare_submit() {
                Some(thought) => {
                    self.saving = true;
                    vec![Cmd::CreateThought { thought }]
                }
                None => vec![],
            },

            UiMsg::ConfirmationElapsed(generation) => {
                self.confirmation.expire(generation);
                vec![]
            }

            // Editing needs a TextAreaEngine and is handled by update_with_context
            UiMsg::ProcessTextAreaInput(_) | UiMsg::InsertText(_) => vec![],
        }
    }
}
