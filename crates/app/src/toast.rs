//! Toast notifications
//!
//! Ephemeral, never persisted. Toasts expire after a fixed lifetime or when
//! dismissed.

use std::time::{Duration, Instant};

use uuid::Uuid;

/// Most toasts shown at once; older ones are dropped first
pub const MAX_VISIBLE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
    pub created_at: Instant,
}

impl Toast {
    pub fn is_error(&self) -> bool {
        self.kind == ToastKind::Error
    }
}

#[derive(Debug)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    lifetime: Duration,
}

impl ToastQueue {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            lifetime,
        }
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn push(&mut self, kind: ToastKind, title: &str, description: &str) -> Uuid {
        self.push_at(kind, title, description, Instant::now())
    }

    fn push_at(&mut self, kind: ToastKind, title: &str, description: &str, now: Instant) -> Uuid {
        let toast = Toast {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: description.to_string(),
            kind,
            created_at: now,
        };
        let id = toast.id;
        self.toasts.push(toast);

        if self.toasts.len() > MAX_VISIBLE {
            let excess = self.toasts.len() - MAX_VISIBLE;
            self.toasts.drain(..excess);
        }

        id
    }

    /// Remove a toast, returning whether it was present
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Drop expired toasts, returning whether anything changed
    pub fn prune_expired(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        let lifetime = self.lifetime;
        self.toasts
            .retain(|t| now.saturating_duration_since(t.created_at) < lifetime);
        self.toasts.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut queue = ToastQueue::new(Duration::from_secs(5));
        let id = queue.push(ToastKind::Error, "Error de validación", "corrige");
        assert_eq!(queue.toasts().len(), 1);
        assert!(queue.toasts()[0].is_error());

        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert!(queue.toasts().is_empty());
    }

    #[test]
    fn test_oldest_dropped_beyond_limit() {
        let mut queue = ToastQueue::new(Duration::from_secs(5));
        let first = queue.push(ToastKind::Success, "0", "");
        for i in 1..=MAX_VISIBLE {
            queue.push(ToastKind::Success, &i.to_string(), "");
        }
        assert_eq!(queue.toasts().len(), MAX_VISIBLE);
        assert!(queue.toasts().iter().all(|t| t.id != first));
        assert_eq!(queue.toasts().last().map(|t| t.title.as_str()), Some("5"));
    }

    #[test]
    fn test_prune_expired() {
        let start = Instant::now();
        let mut queue = ToastQueue::new(Duration::from_millis(100));
        queue.push_at(ToastKind::Success, "old", "", start);
        queue.push_at(ToastKind::Success, "new", "", start + Duration::from_millis(80));

        assert!(!queue.prune_expired(start + Duration::from_millis(50)));
        assert!(queue.prune_expired(start + Duration::from_millis(120)));
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].title, "new");
    }
}
