use crate::shared::core::primitives::IdGenerator;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Hands out a scripted sequence of ids, repeating the last one forever.
pub struct FixedIds {
    ids: Vec<String>,
    next: AtomicUsize,
}

impl FixedIds {
    pub fn new(id: impl Into<String>) -> Self {
        Self::from(vec![id.into()])
    }
}

impl<S: Into<String>> From<Vec<S>> for FixedIds {
    fn from(ids: Vec<S>) -> Self {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
            next: AtomicUsize::new(0),
        }
    }
}

impl IdGenerator for FixedIds {
    fn next_id(&self) -> String {
        let index = self.next.fetch_add(1, Ordering::SeqCst);
        self.ids
            .get(index)
            .or_else(|| self.ids.last())
            .cloned()
            .unwrap_or_default()
    }
}
