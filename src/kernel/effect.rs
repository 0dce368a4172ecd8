use super::services::ports::ElementId;

/// Events the host page observes on an attached element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Focus,
    Blur,
    Input,
    Change,
    Invalid,
}

impl NotificationKind {
    pub fn name(&self) -> &'static str {
        match self {
            NotificationKind::Focus => "focus",
            NotificationKind::Blur => "blur",
            NotificationKind::Input => "input",
            NotificationKind::Change => "change",
            NotificationKind::Invalid => "invalid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub target: ElementId,
    pub kind: NotificationKind,
}

/// Side effects an instance asks its host to carry out after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Notify(NotificationKind),
    /// Queue a focus event for this instance instead of focusing re-entrantly.
    RequestFocus,
}
