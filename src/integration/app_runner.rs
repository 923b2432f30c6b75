use std::sync::Arc;

use color_eyre::eyre::{eyre, Result};
use ratatui::prelude::Rect;
#[cfg(unix)]
use signal_hook::{consts::signal::SIGTSTP, low_level::raise};
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{cmd::TuiCommand, raw_msg::RawMsg, state::AppState},
    infrastructure::{
        config::Config,
        store::ThoughtStore,
        theme_store::ThemeStore,
        tui::{event_source::EventSource, real::RealTui, Event, TuiLike},
        webhook::WebhookClient,
    },
    integration::{renderer::Renderer, runtime::Runtime},
    utils,
};

/// Terminal loop: pulls terminal events and background results into the runtime and redraws
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn TuiLike + Send>>,
    event_source: EventSource,
    renderer: Renderer,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    should_render: bool,
}

impl AppRunner {
    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Wire the store, webhook and theme file selected by `config` into a new runtime
    pub async fn new_with_config(
        config: Config,
        tui: Arc<Mutex<dyn TuiLike + Send>>,
        event_source: EventSource,
    ) -> Result<Self> {
        let data_dir = if config.config._data_dir.as_os_str().is_empty() {
            utils::get_data_dir()
        } else {
            config.config._data_dir.clone()
        };
        let theme_store = ThemeStore::new(&data_dir);
        let theme = theme_store.load();

        let store = ThoughtStore::from_config(&config.service)?;
        if store.is_remote() {
            log::info!("Using the journal service");
        } else {
            log::warn!("SERVICE_URL or SERVICE_ANON_KEY missing; thoughts are kept in memory only");
        }

        let webhook = if store.is_remote() {
            match WebhookClient::from_config(&config.webhook) {
                Ok(webhook) => webhook.map(Arc::new),
                Err(e) => {
                    log::error!("Webhook disabled: {e}");
                    None
                }
            }
        } else {
            None
        };

        let initial_state = AppState::new_with_config(config, theme);
        let mut runtime = Runtime::new_with_store(initial_state, Arc::new(store));
        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        runtime.add_webhook(webhook).map_err(|e| eyre!(e))?;
        runtime.add_theme_store(theme_store).map_err(|e| eyre!(e))?;
        runtime.add_tui_sender(tui_cmd_tx).map_err(|e| eyre!(e))?;
        runtime.init();

        Ok(Self {
            runtime,
            tui,
            event_source,
            renderer: Renderer::new(),
            tui_cmd_rx,
            should_render: true,
        })
    }

    /// Runner over a real crossterm terminal
    pub async fn new_with_real(config: Config, tui: Arc<Mutex<RealTui>>) -> Result<Self> {
        let tui: Arc<Mutex<dyn TuiLike + Send>> = tui;
        let event_source = EventSource::real(Arc::clone(&tui));
        Self::new_with_config(config, tui, event_source).await
    }

    /// Run the main loop until the state asks to quit
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        let mut events_closed = false;

        loop {
            if let Err(e) = self.runtime.run_update_cycle() {
                log::error!("Runtime error: {e}");
            }

            while let Ok(cmd) = self.tui_cmd_rx.try_recv() {
                self.handle_tui_command(cmd).await?;
            }

            if self.runtime.state().system.should_quit {
                break;
            }

            if self.runtime.state().system.should_suspend {
                self.suspend().await?;
                continue;
            }

            if self.should_render {
                self.render().await?;
                self.should_render = false;
            }

            tokio::select! {
                event = self.event_source.next(), if !events_closed => match event {
                    Some(event) => self.handle_event(event),
                    None => events_closed = true,
                },
                received = self.runtime.recv_external() => {
                    if received.is_some() {
                        self.should_render = true;
                    }
                },
                Some(cmd) = self.tui_cmd_rx.recv() => {
                    self.handle_tui_command(cmd).await?;
                },
                else => break,
            }
        }

        self.tui.lock().await.exit()?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if event.needs_render() {
            self.should_render = true;
        }
        if let Some(raw_msg) = event.to_raw_msg() {
            self.runtime.send_raw_msg(raw_msg);
        }
    }

    async fn handle_tui_command(&mut self, cmd: TuiCommand) -> Result<()> {
        match cmd {
            TuiCommand::Resize { width, height } => {
                self.tui
                    .lock()
                    .await
                    .resize(Rect::new(0, 0, width, height))?;
                self.should_render = true;
            }
        }
        Ok(())
    }

    async fn suspend(&mut self) -> Result<()> {
        self.tui.lock().await.exit()?;
        #[cfg(unix)]
        raise(SIGTSTP)?;
        self.tui.lock().await.enter()?;
        self.runtime.send_raw_msg(RawMsg::Resume);
        self.should_render = true;
        Ok(())
    }

    async fn render(&mut self) -> Result<()> {
        self.renderer.render(&self.tui, self.runtime.state()).await
    }
}
