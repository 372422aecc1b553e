use std::collections::VecDeque;

/// Host notifications, queued and applied in arrival order
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f32, y: f32, button: i16 },
    PointerMove { x: f32, y: f32, button: Option<i16> },
    EndDrag,
    Resize { width: f32, height: f32 },
}

#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    pending: VecDeque<InputEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        // Consecutive moves collapse into the latest one
        if let (Some(InputEvent::PointerMove { .. }), InputEvent::PointerMove { .. }) =
            (self.pending.back(), &event)
        {
            self.pending.pop_back();
        }
        self.pending.push_back(event);
    }

    pub fn pop(&mut self) -> Option<InputEvent> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
