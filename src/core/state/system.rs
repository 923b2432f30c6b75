use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        msg::system::SystemMsg,
    },
    domain::text::single_line,
};

/// Whether thoughts go to the persistence service or stay in memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceMode {
    Connected,
    /// Service parameters are missing; every operation acts on the in-memory list only
    #[default]
    Offline,
}

/// System-related state
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    pub status_message: Option<String>,
    pub service_mode: ServiceMode,
}

impl SystemState {
    pub fn new(service_mode: ServiceMode) -> Self {
        Self {
            service_mode,
            ..Default::default()
        }
    }

    pub fn is_offline(&self) -> bool {
        self.service_mode == ServiceMode::Offline
    }

    pub fn status_message(&self) -> Option<&String> {
        self.status_message.as_ref()
    }

    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![]
            }

            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![]
            }

            SystemMsg::Resize(width, height) => {
                vec![Cmd::Tui(TuiCommand::Resize { width, height })]
            }

            SystemMsg::UpdateStatusMessage(message) => {
                self.status_message = Some(single_line(&message));
                vec![]
            }

            SystemMsg::ClearStatusMessage => {
                self.status_message = None;
                vec![]
            }

            SystemMsg::ShowError { label, message } => {
                self.status_message = Some(format!("[ERR: {label}] {}", single_line(&message)));
                vec![]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_system_state_quit_isolated() {
        let mut system = SystemState::default();
        assert!(!system.should_quit);

        let cmds = system.update(SystemMsg::Quit);

        assert!(system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_system_state_suspend_resume() {
        let mut system = SystemState::default();
        system.update(SystemMsg::Suspend);
        assert!(system.should_suspend);
        system.update(SystemMsg::Resume);
        assert!(!system.should_suspend);
    }

    #[test]
    fn test_system_state_status_message_is_single_line() {
        let mut system = SystemState::default();

        system.update(SystemMsg::UpdateStatusMessage("Deleted\nthought 3".to_string()));
        assert_eq!(system.status_message(), Some(&"Deleted thought 3".to_string()));

        system.update(SystemMsg::ClearStatusMessage);
        assert_eq!(system.status_message(), None);
    }

    #[test]
    fn test_system_state_show_error() {
        let mut system = SystemState::default();
        system.update(SystemMsg::ShowError {
            label: "Save".to_string(),
            message: "connection refused".to_string(),
        });
        assert_eq!(
            system.status_message(),
            Some(&"[ERR: Save] connection refused".to_string())
        );
    }

    #[test]
    fn test_system_state_resize_generates_command() {
        let mut system = SystemState::default();

        let cmds = system.update(SystemMsg::Resize(80, 24));

        assert_eq!(
            cmds,
            vec![Cmd::Tui(TuiCommand::Resize {
                width: 80,
                height: 24
            })]
        );
    }

    #[test]
    fn test_service_mode() {
        assert!(SystemState::default().is_offline());
        assert!(!SystemState::new(ServiceMode::Connected).is_offline());
    }
}
