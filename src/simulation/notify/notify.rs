//! Engine → host notifications
//!
//! Observers are called synchronously in registration order. Every
//! notification is also queued so polling hosts (the wasm facade) can drain
//! them. A full queue is compacted: cell-level entries fold into one
//! `BoardDirty` and only the latest `TitleChanged` is kept.

use serde::Serialize;

use super::report::RunReport;

pub const NOTIFICATION_QUEUE_LIMIT: usize = 4096;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Notification {
    /// A single cell was edited
    CellChanged { row: u32, col: u32 },
    /// Redraw the whole board
    BoardDirty,
    /// Generation counter to show
    TitleChanged { generation: u64 },
    /// A run just ended
    StatsChanged(RunReport),
}

pub type Observer = Box<dyn FnMut(&Notification) + Send>;

pub(crate) struct Notifier {
    observers: Vec<Observer>,
    queue: Vec<Notification>,
    limit: usize,
}

impl Notifier {
    pub(crate) fn new() -> Self {
        Self::with_limit(NOTIFICATION_QUEUE_LIMIT)
    }

    pub(crate) fn with_limit(limit: usize) -> Self {
        Self {
            observers: Vec::new(),
            queue: Vec::new(),
            limit: limit.max(4),
        }
    }

    pub(crate) fn subscribe(&mut self, observer: Observer) {
        self.observers.push(observer);
    }

    pub(crate) fn notify(&mut self, notification: Notification) {
        for observer in self.observers.iter_mut() {
            observer(&notification);
        }
        if self.queue.len() >= self.limit {
            self.compact();
        }
        self.queue.push(notification);
    }

    pub(crate) fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.queue)
    }

    fn compact(&mut self) {
        let board_touched = self
            .queue
            .iter()
            .any(|n| matches!(n, Notification::CellChanged { .. } | Notification::BoardDirty));
        let last_title = self.queue.iter().rev().find_map(|n| match n {
            Notification::TitleChanged { generation } => Some(*generation),
            _ => None,
        });

        self.queue.retain(|n| matches!(n, Notification::StatsChanged(_)));
        if board_touched {
            self.queue.push(Notification::BoardDirty);
        }
        if let Some(generation) = last_title {
            self.queue.push(Notification::TitleChanged { generation });
        }
    }
}
