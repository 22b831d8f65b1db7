use std::{collections::VecDeque, time::Duration};

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::core::{
    cmd::{Cmd, TuiCommand},
    cmd_executor::{CmdExecutor, Services},
    msg::Msg,
    raw_msg::RawMsg,
    state::AppState,
    translator::translate_raw_to_domain,
    update::{init, update},
};

/// Owns the application state and drives the update cycle: raw events are
/// translated, messages applied, and the resulting commands executed.
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    cmd_executor: CmdExecutor,
}

impl Runtime {
    /// Create a runtime whose executor reports back on the runtime's own channel.
    pub fn new(initial_state: AppState, services: Services) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let config = &initial_state.config.config;
        let cmd_executor = CmdExecutor::new(
            msg_tx.clone(),
            services,
            Duration::from_millis(config.debounce_ms),
            config.trending.limit,
        );

        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            msg_tx,
            msg_rx,
            cmd_executor,
        }
    }

    pub fn set_tui_sender(&mut self, tui_sender: mpsc::UnboundedSender<TuiCommand>) {
        self.cmd_executor.set_tui_sender(tui_sender);
    }

    /// Issue the start-up commands (initial movie list, trending list).
    pub fn init(&mut self) -> Result<()> {
        let (state, commands) = init(std::mem::take(&mut self.state));
        self.state = state;
        self.cmd_executor.execute_commands(commands)
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Sender for messages produced outside the update cycle
    pub fn msg_sender(&self) -> mpsc::UnboundedSender<Msg> {
        self.msg_tx.clone()
    }

    /// Wait for the next message produced by a spawned command.
    pub async fn next_msg(&mut self) -> Option<Msg> {
        self.msg_rx.recv().await
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        let (new_state, commands) = update(msg, std::mem::take(&mut self.state));
        self.state = new_state;
        commands
    }

    /// Process all queued raw and domain messages, including those already
    /// delivered on the channel, and collect the resulting commands.
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        // Each key is translated against the state left by the previous one
        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            for msg in translate_raw_to_domain(raw_msg, &self.state) {
                all_commands.extend(self.process_message(msg));
            }
        }

        while let Ok(msg) = self.msg_rx.try_recv() {
            self.msg_queue.push_back(msg);
        }

        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }

        all_commands
    }

    /// Process all messages and execute commands in one step.
    /// Returns the number of commands executed.
    pub fn run_update_cycle(&mut self) -> Result<usize> {
        let commands = self.process_all_messages();
        let count = commands.len();
        self.cmd_executor.execute_commands(commands)?;
        Ok(count)
    }
}
