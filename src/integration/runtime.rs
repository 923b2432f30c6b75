use std::{collections::VecDeque, sync::Arc, time::Duration};

use tokio::{sync::mpsc, time::Instant};

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        cmd_executor::CmdExecutor,
        msg::Msg,
        raw_msg::RawMsg,
        state::AppState,
        translator::translate_raw_to_domain,
        update::{init, update_with_context, UpdateContext},
    },
    infrastructure::{
        store::ThoughtStore, theme_store::ThemeStore, tui::textarea_engine::TuiTextAreaEngine,
        webhook::WebhookClient,
    },
};

static ENGINE: TuiTextAreaEngine = TuiTextAreaEngine;

/// Owns the application state and drives the translate → update → execute cycle
pub struct Runtime {
    ctx: UpdateContext<'static>,
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: Option<CmdExecutor>,
}

impl Runtime {
    /// Create a new Runtime without side effects (commands stay queued)
    pub fn new(initial_state: AppState) -> Self {
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();

        Self {
            ctx: UpdateContext { text_area: &ENGINE },
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor: None,
        }
    }

    /// Create a new Runtime whose commands run against `store`
    pub fn new_with_store(initial_state: AppState, store: Arc<ThoughtStore>) -> Self {
        let mut runtime = Self::new(initial_state);
        runtime.set_store(store);
        runtime
    }

    /// Set command executor backed by `store`
    pub fn set_store(&mut self, store: Arc<ThoughtStore>) {
        self.cmd_executor = Some(CmdExecutor::new(self.raw_msg_tx.clone(), store));
    }

    fn executor_mut(&mut self) -> Result<&mut CmdExecutor, String> {
        self.cmd_executor
            .as_mut()
            .ok_or_else(|| "No executor available. Use set_store() first.".to_string())
    }

    pub fn add_webhook(&mut self, webhook: Option<Arc<WebhookClient>>) -> Result<(), String> {
        self.executor_mut()?.set_webhook(webhook);
        Ok(())
    }

    pub fn add_theme_store(&mut self, theme_store: ThemeStore) -> Result<(), String> {
        self.executor_mut()?.set_theme_store(theme_store);
        Ok(())
    }

    /// Add TUI command sender support to existing executor (for TuiCommand execution)
    pub fn add_tui_sender(
        &mut self,
        tui_sender: mpsc::UnboundedSender<TuiCommand>,
    ) -> Result<(), String> {
        self.executor_mut()?.set_tui_sender(tui_sender);
        Ok(())
    }

    /// Queue the start-up commands
    pub fn init(&mut self) {
        let commands = init(&self.state);
        self.cmd_queue.extend(commands);
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Get raw message sender
    pub fn get_raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    /// Waits for the next raw message from background tasks and queues it
    pub async fn recv_external(&mut self) -> Option<()> {
        let raw_msg = self.raw_msg_rx.recv().await?;
        self.raw_msg_queue.push_back(raw_msg);
        Some(())
    }

    /// Get pending commands
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute all pending commands using the command executor
    pub fn execute_pending_commands(&mut self) -> Result<Vec<String>, String> {
        let mut commands = self.pending_commands();
        commands.sort_by_key(Cmd::priority);
        let Some(executor) = &self.cmd_executor else {
            return Err(
                "No command executor available. Use set_store() to configure.".to_string(),
            );
        };
        if commands.is_empty() {
            return Ok(vec![]);
        }

        executor
            .execute_commands(&commands)
            .map_err(|e| format!("Command execution failed: {e}"))
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() {
            log::debug!("update: {msg:?}");
        }
        let (new_state, commands) = update_with_context(msg, self.state.clone(), &self.ctx);
        self.state = new_state;
        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    fn translate(&mut self, raw_msg: RawMsg) {
        let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
        self.msg_queue.extend(domain_msgs);
    }

    /// Process all messages in queue
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            self.translate(raw_msg);
        }

        while let Ok(raw_msg) = self.raw_msg_rx.try_recv() {
            self.translate(raw_msg);
        }

        while let Some(msg) = self.msg_queue.pop_front() {
            let commands = self.process_message(msg);
            all_commands.extend(commands);
        }

        all_commands
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Result<Vec<String>, String> {
        self.process_all_messages();
        self.execute_pending_commands()
    }

    /// Keeps running update cycles, feeding in background results, until
    /// `predicate` holds or `timeout` elapses. Returns whether it held.
    pub async fn run_until(
        &mut self,
        timeout: Duration,
        predicate: impl Fn(&AppState) -> bool,
    ) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            if let Err(e) = self.run_update_cycle() {
                log::warn!("{e}");
            }
            if predicate(&self.state) {
                return true;
            }
            match tokio::time::timeout_at(deadline, self.raw_msg_rx.recv()).await {
                Ok(Some(raw_msg)) => self.raw_msg_queue.push_back(raw_msg),
                Ok(None) | Err(_) => {
                    self.process_all_messages();
                    return predicate(&self.state);
                }
            }
        }
    }

    /// Get runtime statistics
    pub fn get_stats(&self) -> RuntimeStats {
        RuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            thoughts_count: self.state.journal.thoughts().len(),
            is_composing: self.state.ui.is_composing(),
            is_saving: self.state.ui.saving,
            has_executor: self.cmd_executor.is_some(),
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_commands: usize,
    pub thoughts_count: usize,
    pub is_composing: bool,
    pub is_saving: bool,
    pub has_executor: bool,
}
