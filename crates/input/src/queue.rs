//! Non-blocking per-frame input collection.
//!
//! The frame loop drains every pending terminal event once per frame boundary.
//! No pending input simply means no commands this frame.

use std::io;
use std::time::Duration;

use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::map::{handle_key_event, should_quit};
use crate::types::CameraAction;

/// Upper bound on actions buffered between two frames; extra keys are dropped.
pub const MAX_PENDING_ACTIONS: usize = 32;

#[derive(Debug, Default)]
pub struct ActionQueue {
    actions: ArrayVec<CameraAction, MAX_PENDING_ACTIONS>,
    quit: bool,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one key event. Releases are ignored; repeats count as presses.
    pub fn push_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        if should_quit(key) {
            self.quit = true;
            return;
        }
        if let Some(action) = handle_key_event(key) {
            // Full queue: drop the newest rather than block.
            let _ = self.actions.try_push(action);
        }
    }

    /// Read every event already waiting on the terminal without blocking.
    pub fn poll_pending(&mut self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                self.push_key(key);
            }
        }
        Ok(())
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Take the buffered actions in arrival order.
    pub fn drain(&mut self) -> impl Iterator<Item = CameraAction> + '_ {
        self.actions.drain(..)
    }
}
