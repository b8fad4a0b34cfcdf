use std::collections::VecDeque;

use crate::core::{
    cmd::Cmd, cmd_executor::CmdExecutor, msg::Msg, raw_msg::RawMsg, state::AppState,
    translator::translate_raw_to_domain, update::update,
};

/// Owns the application state and drives translate, update and execute
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    cmd_executor: Option<CmdExecutor>,
}

impl Runtime {
    pub fn new(initial_state: AppState) -> Self {
        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            cmd_executor: None,
        }
    }

    pub fn new_with_executor(initial_state: AppState, executor: CmdExecutor) -> Self {
        Self {
            cmd_executor: Some(executor),
            ..Self::new(initial_state)
        }
    }

    pub fn set_executor(&mut self, executor: CmdExecutor) {
        self.cmd_executor = Some(executor);
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
        if !raw_msg.is_frequent() {
            tracing::trace!("raw message: {raw_msg:?}");
        }
        self.raw_msg_queue.push_back(raw_msg);
    }

    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute all pending commands, or drop them when no executor is configured
    pub fn execute_pending_commands(&mut self) -> Vec<String> {
        let commands = self.pending_commands();
        match &self.cmd_executor {
            Some(executor) => executor.execute_commands(&commands),
            None => {
                if !commands.is_empty() {
                    tracing::debug!("no executor, dropping {} commands", commands.len());
                }
                vec![]
            }
        }
    }

    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() {
            tracing::debug!("update: {msg:?}");
        }
        let commands = update(msg, &mut self.state);
        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Translate queued raw messages, then apply every queued message
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
            self.msg_queue.extend(domain_msgs);
        }

        let mut all_commands = Vec::new();
        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }
        all_commands
    }

    pub fn run_update_cycle(&mut self) -> Vec<String> {
        self.process_all_messages();
        self.execute_pending_commands()
    }

    pub fn get_stats(&self) -> RuntimeStats {
        RuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_raw_messages: self.raw_msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            carousel_index: self
                .state
                .carousel
                .controller()
                .map(|controller| controller.current_index()),
            has_executor: self.cmd_executor.is_some(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_raw_messages: usize,
    pub queued_commands: usize,
    pub carousel_index: Option<usize>,
    pub has_executor: bool,
}
