//! Message Slot
//!
//! The single status line shown after a signup or unregister attempt.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn as_class(&self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

impl Message {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: MessageKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: MessageKind::Error, text: text.into() }
    }
}

/// Hidden / Visible state plus a generation counter.
///
/// Every `show` bumps the generation; `hide` only applies to the generation it
/// was issued for, so a timer left over from an earlier message is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageSlot {
    current: Option<Message>,
    generation: u64,
}

impl MessageSlot {
    pub fn current(&self) -> Option<&Message> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    /// Replace whatever is shown; returns the generation to hide later
    pub fn show(&mut self, message: Message) -> u64 {
        self.generation += 1;
        self.current = Some(message);
        self.generation
    }

    /// Hide if `generation` is still the one on screen
    pub fn hide(&mut self, generation: u64) -> bool {
        if generation == self.generation && self.current.is_some() {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// CSS classes for the `#message` element
    pub fn class(&self) -> String {
        match &self.current {
            Some(message) => format!("message {}", message.kind.as_class()),
            None => "message hidden".to_string(),
        }
    }
}
