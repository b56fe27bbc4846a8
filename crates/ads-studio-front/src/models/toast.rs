/// Delay between inserting a toast and marking it visible, so the CSS
/// transition has a hidden state to animate from.
pub const TOAST_SHOW_DELAY_MS: u32 = 10;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
            ToastKind::Warning => "toast toast-warning",
            ToastKind::Info => "toast toast-info",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✕",
            ToastKind::Warning => "!",
            ToastKind::Info => "i",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: u32,
    pub visible: bool,
}

/// Toasts currently on screen, oldest first. There is no cap; concurrent
/// toasts simply stack.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind, duration_ms: u32) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
            duration_ms,
            visible: false,
        });
        id
    }

    pub fn reveal(&mut self, id: u64) {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
            toast.visible = true;
        }
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_lifecycle() {
        let mut queue = ToastQueue::new();
        let id = queue.push("Saved", ToastKind::Success, 3000);
        assert!(!queue.toasts()[0].visible);

        queue.reveal(id);
        assert!(queue.toasts()[0].visible);

        assert!(queue.dismiss(id));
        assert!(queue.is_empty());
        assert!(!queue.dismiss(id));
    }

    #[test]
    fn test_toasts_stack_in_order() {
        let mut queue = ToastQueue::new();
        let first = queue.push("one", ToastKind::Info, 1000);
        let second = queue.push("two", ToastKind::Error, 1000);
        assert_ne!(first, second);
        let messages: Vec<&str> = queue.toasts().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["one", "two"]);

        queue.dismiss(first);
        assert_eq!(queue.toasts()[0].id, second);
    }

    #[test]
    fn test_reveal_after_dismiss_is_noop() {
        let mut queue = ToastQueue::new();
        let id = queue.push("gone", ToastKind::Warning, 10);
        queue.dismiss(id);
        queue.reveal(id);
        assert!(queue.is_empty());
    }
}
