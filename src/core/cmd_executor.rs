use std::{sync::Arc, time::Duration};

use color_eyre::eyre::Result;
use tokio::{sync::mpsc, time::Instant};

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        raw_msg::RawMsg,
    },
    infrastructure::{store::ThoughtStore, theme_store::ThemeStore, webhook::WebhookClient},
};

/// Command executor that performs side effects on the tokio runtime and
/// reports their outcome back to the runtime as [`RawMsg`]s
#[derive(Clone)]
pub struct CmdExecutor {
    raw_tx: mpsc::UnboundedSender<RawMsg>,
    store: Arc<ThoughtStore>,
    webhook: Option<Arc<WebhookClient>>,
    theme_store: Option<ThemeStore>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
}

impl CmdExecutor {
    pub fn new(raw_tx: mpsc::UnboundedSender<RawMsg>, store: Arc<ThoughtStore>) -> Self {
        Self {
            raw_tx,
            store,
            webhook: None,
            theme_store: None,
            tui_sender: None,
        }
    }

    pub fn set_webhook(&mut self, webhook: Option<Arc<WebhookClient>>) {
        self.webhook = webhook;
    }

    pub fn set_theme_store(&mut self, theme_store: ThemeStore) {
        self.theme_store = Some(theme_store);
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {}

            Cmd::LoadThoughts { limit } => {
                let store = Arc::clone(&self.store);
                let tx = self.raw_tx.clone();
                let limit = *limit;
                tokio::spawn(async move {
                    let msg = match store.list(limit).await {
                        Ok(thoughts) => RawMsg::ThoughtsLoaded(thoughts),
                        Err(e) => {
                            log::error!("Failed to fetch thoughts: {e}");
                            RawMsg::ThoughtsLoadFailed(e.to_string())
                        }
                    };
                    report(&tx, msg);
                });
            }

            Cmd::CreateThought { thought } => {
                let store = Arc::clone(&self.store);
                let tx = self.raw_tx.clone();
                let thought = thought.clone();
                tokio::spawn(async move {
                    let msg = match store.insert(&thought).await {
                        Ok(created) => RawMsg::ThoughtCreated(created),
                        Err(e) => {
                            log::error!("Failed to save thought: {e}");
                            RawMsg::ThoughtCreateFailed(e.to_string())
                        }
                    };
                    report(&tx, msg);
                });
            }

            Cmd::DeleteThought { id } => {
                let store = Arc::clone(&self.store);
                let tx = self.raw_tx.clone();
                let id = *id;
                tokio::spawn(async move {
                    let msg = match store.delete(id).await {
                        Ok(()) => RawMsg::ThoughtDeleted(id),
                        Err(e) => {
                            log::error!("Failed to delete thought {id}: {e}");
                            RawMsg::ThoughtDeleteFailed {
                                id,
                                error: e.to_string(),
                            }
                        }
                    };
                    report(&tx, msg);
                });
            }

            // Fire and forget: nothing is reported back
            Cmd::NotifyWebhook { thought } => match &self.webhook {
                Some(webhook) => {
                    Arc::clone(webhook).spawn_notify(thought.clone());
                }
                None => log::debug!("No webhook configured; skipping thought {}", thought.id),
            },

            Cmd::HideConfirmationAfter {
                generation,
                delay_ms,
            } => {
                let tx = self.raw_tx.clone();
                let generation = *generation;
                let deadline = Instant::now() + Duration::from_millis(*delay_ms);
                tokio::spawn(async move {
                    tokio::time::sleep_until(deadline).await;
                    report(&tx, RawMsg::ConfirmationElapsed(generation));
                });
            }

            Cmd::PersistTheme { theme } => match &self.theme_store {
                Some(theme_store) => {
                    let theme_store = theme_store.clone();
                    let theme = *theme;
                    tokio::task::spawn_blocking(move || {
                        if let Err(e) = theme_store.save(theme) {
                            log::error!(
                                "Failed to save theme to {}: {e}",
                                theme_store.path().display()
                            );
                        }
                    });
                }
                None => log::warn!("PersistTheme ignored: no theme store configured"),
            },

            Cmd::Tui(tui_cmd) => match &self.tui_sender {
                Some(tx) => tx.send(tui_cmd.clone())?,
                None => log::warn!("CmdExecutor: TUI sender not configured; dropping {tui_cmd:?}"),
            },

            Cmd::LogError { message } => {
                log::error!("{message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("{message}");
            }

            Cmd::Batch(commands) => {
                for cmd in commands {
                    self.execute_command(cmd)?;
                }
            }
        }

        Ok(())
    }

    /// Execute multiple commands
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<Vec<String>> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {}", cmd.name(), e);
                    log::error!("{error_msg}");
                    execution_log.push(error_msg);
                }
            }
        }

        Ok(execution_log)
    }

    /// Get execution statistics
    pub fn get_stats(&self) -> CmdExecutorStats {
        CmdExecutorStats {
            is_remote_store: self.store.is_remote(),
            has_webhook: self.webhook.is_some(),
            has_theme_store: self.theme_store.is_some(),
            is_runtime_closed: self.raw_tx.is_closed(),
        }
    }
}

fn report(tx: &mpsc::UnboundedSender<RawMsg>, msg: RawMsg) {
    if tx.send(msg).is_err() {
        log::debug!("Runtime is gone; dropping command result");
    }
}

/// Command executor statistics
#[derive(Debug, Clone)]
pub struct CmdExecutorStats {
    pub is_remote_store: bool,
    pub has_webhook: bool,
    pub has_theme_store: bool,
    pub is_runtime_closed: bool,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;
    use crate::{
        domain::{
            theme::Theme,
            thought::{NewThought, ThoughtId},
        },
        infrastructure::store::LocalStore,
    };

    fn create_test_executor() -> (CmdExecutor, mpsc::UnboundedReceiver<RawMsg>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let store = Arc::new(ThoughtStore::Local(LocalStore::new()));
        (CmdExecutor::new(tx, store), rx)
    }

    #[tokio::test]
    async fn test_load_thoughts_reports_placeholder() -> Result<()> {
        let (executor, mut rx) = create_test_executor();

        executor.execute_command(&Cmd::LoadThoughts { limit: 50 })?;

        match rx.recv().await {
            Some(RawMsg::ThoughtsLoaded(thoughts)) => assert_eq!(thoughts.len(), 1),
            other => panic!("unexpected message: {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_create_thought_reports_created() -> Result<()> {
        let (executor, mut rx) = create_test_executor();
        let thought = NewThought::from_draft("  Hello world  ").expect("non-blank draft");

        executor.execute_command(&Cmd::CreateThought { thought })?;

        match rx.recv().await {
            Some(RawMsg::ThoughtCreated(created)) => {
                assert_eq!(created.text, "Hello world");
                assert_eq!(created.character_count, Some(11));
            }
            other => panic!("unexpected message: {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_thought_reports_deleted() -> Result<()> {
        let (executor, mut rx) = create_test_executor();

        executor.execute_command(&Cmd::DeleteThought {
            id: ThoughtId::new(4),
        })?;

        assert_eq!(rx.recv().await, Some(RawMsg::ThoughtDeleted(ThoughtId::new(4))));
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn test_hide_confirmation_after_delay() -> Result<()> {
        let (executor, mut rx) = create_test_executor();

        executor.execute_command(&Cmd::HideConfirmationAfter {
            generation: 3,
            delay_ms: 2000,
        })?;
        tokio::task::yield_now().await;

        tokio::time::advance(Duration::from_millis(1999)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());

        tokio::time::advance(Duration::from_millis(1)).await;
        assert_eq!(rx.recv().await, Some(RawMsg::ConfirmationElapsed(3)));
        Ok(())
    }

    #[tokio::test]
    async fn test_persist_theme_writes_file() -> Result<()> {
        let dir = TempDir::new()?;
        let (mut executor, _rx) = create_test_executor();
        let theme_store = ThemeStore::new(dir.path());
        executor.set_theme_store(theme_store.clone());

        executor.execute_command(&Cmd::PersistTheme { theme: Theme::Dark })?;

        for _ in 0..100 {
            if theme_store.load() == Theme::Dark {
                return Ok(());
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("theme was not persisted");
    }

    #[tokio::test]
    async fn test_webhook_without_client_reports_nothing() -> Result<()> {
        let (executor, mut rx) = create_test_executor();
        let thought = LocalStore::new().list(1).remove(0);

        executor.execute_command(&Cmd::NotifyWebhook { thought })?;

        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());
        Ok(())
    }

    #[tokio::test]
    async fn test_execute_resize() -> Result<()> {
        let (mut executor, _rx) = create_test_executor();
        let (tui_tx, mut tui_rx) = mpsc::unbounded_channel::<TuiCommand>();
        executor.set_tui_sender(tui_tx);

        executor.execute_command(&Cmd::Tui(TuiCommand::Resize {
            width: 80,
            height: 24,
        }))?;

        assert_eq!(
            tui_rx.try_recv().ok(),
            Some(TuiCommand::Resize {
                width: 80,
                height: 24
            })
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_execute_commands_log() -> Result<()> {
        let (executor, _rx) = create_test_executor();

        let log = executor.execute_commands(&[
            Cmd::LogInfo {
                message: "test".to_string(),
            },
            Cmd::Batch(vec![Cmd::None, Cmd::None]),
        ])?;

        assert_eq!(
            log,
            vec![
                "✓ Executed: LogInfo".to_string(),
                "✓ Executed: Batch(2)".to_string()
            ]
        );
        Ok(())
    }

    #[test]
    fn test_stats() {
        let (executor, _rx) = create_test_executor();
        let stats = executor.get_stats();
        assert!(!stats.is_remote_store);
        assert!(!stats.has_webhook);
        assert!(!stats.is_runtime_closed);
    }
}
