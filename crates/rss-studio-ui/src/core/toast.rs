//! Single-slot toast state.
//!
//! Only one toast is visible; a newer notification replaces the current one
//! and restarts its timer. Each notification bumps a generation counter so a
//! timer scheduled for an older toast cannot hide a newer one.

use crate::models::{Toast, ToastKind};

/// Current toast plus the generation counter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    /// Visible toast, if any.
    pub current: Option<Toast>,
    generation: u64,
}

impl ToastState {
    /// Show `message`, replacing any visible toast. Returns its generation.
    pub fn notify(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.current = Some(Toast {
            id: self.generation,
            message: message.into(),
            kind,
        });
        self.generation
    }

    /// Hide the toast if `generation` is still the current one.
    ///
    /// Returns whether anything was hidden.
    pub fn hide(&mut self, generation: u64) -> bool {
        if self
            .current
            .as_ref()
            .is_some_and(|toast| toast.id == generation)
        {
            self.current = None;
            return true;
        }
        false
    }

    /// Generation of the latest notification.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_notification_wins() {
        let mut state = ToastState::default();
        let first = state.notify("刷新成功", ToastKind::Success);
        let second = state.notify("请求失败", ToastKind::Danger);
        assert!(second > first);

        let toast = state.current.clone().unwrap();
        assert_eq!(toast.message, "请求失败");
        assert_eq!(toast.kind, ToastKind::Danger);
    }

    #[test]
    fn stale_hide_is_ignored() {
        let mut state = ToastState::default();
        let first = state.notify("one", ToastKind::Default);
        let second = state.notify("two", ToastKind::Default);

        assert!(!state.hide(first));
        assert!(state.current.is_some());
        assert!(state.hide(second));
        assert!(state.current.is_none());
        assert_eq!(state.generation(), second);
    }
}
