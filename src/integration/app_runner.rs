use std::rc::Rc;
use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{
        cmd::TuiCommand,
        cmd_executor::CmdExecutor,
        msg::{system::SystemMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::{product::Catalog, scheduler::Scheduler},
    infrastructure::{
        config::Config,
        scheduler::IntervalScheduler,
        tui::{self, TuiLike},
    },
    integration::runtime::Runtime,
    presentation::components::HomeComponent,
};

enum Incoming {
    Raw(RawMsg),
    Terminal(Option<tui::Event>),
}

/// Drives the Elm runtime from terminal events and carousel timer ticks
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn TuiLike>>,
    home: HomeComponent,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    render_req_rx: mpsc::UnboundedReceiver<()>,
}

impl AppRunner {
    /// Wire state, executor and an [`IntervalScheduler`] around `tui`.
    ///
    /// Must be called inside a tokio runtime: mounting the carousel spawns its timer.
    pub fn new(config: Config, catalog: Catalog, tui: Arc<Mutex<dyn TuiLike>>) -> Self {
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();
        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        let (render_req_tx, render_req_rx) = mpsc::unbounded_channel();

        let scheduler: Rc<dyn Scheduler> = Rc::new(IntervalScheduler::new(raw_msg_tx.clone()));
        let state = AppState::new(config, catalog, scheduler);

        let mut executor = CmdExecutor::new();
        executor.set_tui_sender(tui_cmd_tx);
        executor.set_render_request_sender(render_req_tx);

        Self {
            runtime: Runtime::new_with_executor(state, executor),
            tui,
            home: HomeComponent::new(),
            raw_msg_tx,
            raw_msg_rx,
            tui_cmd_rx,
            render_req_rx,
        }
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Sender for raw messages produced outside the terminal
    pub fn raw_msg_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    /// Run until quit is requested or the terminal stops producing events.
    pub async fn run(&mut self) -> Result<()> {
        let area = {
            let mut tui = self.tui.lock().await;
            tui.enter()?;
            tui.size()?
        };
        self.runtime
            .send_msg(Msg::System(SystemMsg::Resize(area.width, area.height)));
        self.step().await?;
        self.render().await?;

        let tui = Arc::clone(&self.tui);
        loop {
            // Timer ticks win over terminal events so the carousel keeps pace
            let incoming = {
                let mut terminal = tui.lock().await;
                let incoming = tokio::select! {
                    biased;
                    Some(raw) = self.raw_msg_rx.recv() => Incoming::Raw(raw),
                    event = terminal.next() => Incoming::Terminal(event),
                };
                incoming
            };

            let event = match incoming {
                Incoming::Raw(raw) => {
                    self.runtime.send_raw_msg(raw);
                    if self.step().await? {
                        self.render().await?;
                    }
                    if self.runtime.state().system.should_quit {
                        break;
                    }
                    continue;
                }
                Incoming::Terminal(Some(event)) => event,
                Incoming::Terminal(None) => {
                    tracing::info!("terminal event stream closed");
                    self.step().await?;
                    break;
                }
            };

            let mut render_now = false;
            match event {
                tui::Event::Quit => self.runtime.send_raw_msg(RawMsg::Quit),
                tui::Event::Tick => self.runtime.send_raw_msg(RawMsg::Tick),
                tui::Event::Render => render_now = true,
                tui::Event::Resize(w, h) => self.runtime.send_raw_msg(RawMsg::Resize(w, h)),
                tui::Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(key)),
                tui::Event::Mouse(mouse) => self.runtime.send_raw_msg(RawMsg::Mouse(mouse)),
                tui::Event::Error => self
                    .runtime
                    .send_raw_msg(RawMsg::Error("terminal input error".to_string())),
                tui::Event::Init
                | tui::Event::Closed
                | tui::Event::FocusGained
                | tui::Event::FocusLost
                | tui::Event::Paste(_) => {}
            }

            render_now |= self.step().await?;
            if render_now {
                self.render().await?;
            }

            if self.runtime.state().system.should_quit {
                break;
            }
        }

        self.tui.lock().await.exit()?;
        Ok(())
    }

    /// One update cycle plus the host-side commands it produced.
    /// Returns whether a render was requested.
    async fn step(&mut self) -> Result<bool> {
        self.runtime.run_update_cycle();

        let mut render = false;
        while let Ok(TuiCommand::Resize { width, height }) = self.tui_cmd_rx.try_recv() {
            self.tui
                .lock()
                .await
                .resize(Rect::new(0, 0, width, height))?;
            render = true;
        }
        while self.render_req_rx.try_recv().is_ok() {
            render = true;
        }
        Ok(render)
    }

    async fn render(&mut self) -> Result<()> {
        let state = self.runtime.state();
        let home = &self.home;
        let mut terminal = self.tui.lock().await;
        terminal.draw(&mut |f: &mut tui::Frame<'_>| {
            let area = f.area();
            home.view(state, f, area);
        })?;
        Ok(())
    }
}
