use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use crate::{
    core::{cmd::TuiCommand, cmd_executor::Services, raw_msg::RawMsg, state::AppState},
    infrastructure::tui::{Event, TuiLike},
    integration::runtime::Runtime,
    presentation::components::Components,
};

/// Drives the application: feeds terminal events and command results into
/// the runtime, applies terminal commands and renders.
///
/// Generic over the terminal so tests can run it against `TestTui`.
pub struct AppRunner<T: TuiLike> {
    runtime: Runtime,
    tui: T,
    tui_rx: mpsc::UnboundedReceiver<TuiCommand>,
    components: Components,
}

impl<T: TuiLike> AppRunner<T> {
    pub fn new(tui: T, initial_state: AppState, services: Services) -> Self {
        let (tui_tx, tui_rx) = mpsc::unbounded_channel();
        let mut runtime = Runtime::new(initial_state, services);
        runtime.set_tui_sender(tui_tx);

        Self {
            runtime,
            tui,
            tui_rx,
            components: Components::new(),
        }
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    pub fn tui(&self) -> &T {
        &self.tui
    }

    pub fn tui_mut(&mut self) -> &mut T {
        &mut self.tui
    }

    /// Run until the user quits or the event stream ends.
    pub async fn run(&mut self) -> Result<()> {
        self.start()?;
        while !self.runtime.state().system.should_quit {
            self.run_one_cycle().await?;
        }
        self.tui.exit()?;
        Ok(())
    }

    /// Enter the terminal, issue the start-up commands and draw the first frame.
    pub fn start(&mut self) -> Result<()> {
        self.tui.enter()?;
        self.runtime.init()?;
        self.render()
    }

    /// Wait for one terminal event or command result and apply it.
    pub async fn run_one_cycle(&mut self) -> Result<()> {
        let mut should_render = false;

        tokio::select! {
            biased;
            event = self.tui.next() => match event {
                Some(event) => should_render = self.handle_event(event),
                None => self.runtime.send_raw_msg(RawMsg::Quit),
            },
            Some(msg) = self.runtime.next_msg() => self.runtime.send_msg(msg),
        }

        self.update();

        while let Ok(cmd) = self.tui_rx.try_recv() {
            match cmd {
                TuiCommand::Resize { width, height } => {
                    self.tui.resize(Rect::new(0, 0, width, height))?;
                    should_render = true;
                }
            }
        }

        if self.runtime.state().system.should_suspend {
            self.tui.suspend()?;
            self.runtime.send_raw_msg(RawMsg::Resume);
            self.update();
            self.tui.enter()?;
            should_render = true;
        }

        if should_render && !self.runtime.state().system.should_quit {
            self.render()?;
        }
        Ok(())
    }

    /// Queue the raw message for `event`; returns whether a frame is due.
    fn handle_event(&mut self, event: Event) -> bool {
        let raw = match event {
            Event::Render => return true,
            Event::Tick => RawMsg::Tick,
            Event::Quit | Event::Closed => RawMsg::Quit,
            Event::Resize(width, height) => RawMsg::Resize(width, height),
            Event::Key(key) => RawMsg::Key(key),
            Event::Paste(text) => RawMsg::Paste(text),
            Event::Error => RawMsg::Error("failed to read terminal event".to_string()),
            Event::Init | Event::FocusGained | Event::FocusLost | Event::Mouse(_) => return false,
        };
        self.runtime.send_raw_msg(raw);
        false
    }

    fn update(&mut self) {
        if let Err(e) = self.runtime.run_update_cycle() {
            log::error!("Runtime error: {e}");
            self.runtime
                .send_raw_msg(RawMsg::Error(format!("Runtime error: {e}")));
        }
    }

    fn render(&mut self) -> Result<()> {
        let state = self.runtime.state();
        let components = &self.components;
        self.tui.draw(&mut |f| components.render(f, state))
    }
}
