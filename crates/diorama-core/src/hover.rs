use crate::registry::{ObjectId, Registry};
use crate::tags::Role;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CursorStyle {
    #[default]
    Default,
    Pointer,
    NotAllowed,
}

impl CursorStyle {
    pub fn as_css(self) -> &'static str {
        match self {
            CursorStyle::Default => "default",
            CursorStyle::Pointer => "pointer",
            CursorStyle::NotAllowed => "not-allowed",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HoverState {
    #[default]
    NoneHovered,
    Hovering(ObjectId),
}

/// Cursor for whatever sits under the pointer this frame.
pub fn cursor_for(nearest: Option<ObjectId>, registry: &Registry, monitor_locked: bool) -> CursorStyle {
    let Some(obj) = nearest.and_then(|id| registry.get(id)) else {
        return CursorStyle::Default;
    };
    match obj.role {
        Role::Monitor if monitor_locked => CursorStyle::NotAllowed,
        Role::Monitor => CursorStyle::Pointer,
        _ if obj.clickable => CursorStyle::Pointer,
        _ => CursorStyle::Default,
    }
}

/// Enter/leave bookkeeping keeping at most one hover raise active.
#[derive(Clone, Copy, Debug, Default)]
pub struct HoverMachine {
    state: HoverState,
    applied_cursor: Option<CursorStyle>,
}

impl HoverMachine {
    pub fn state(&self) -> HoverState {
        self.state
    }

    pub fn hovered(&self) -> Option<ObjectId> {
        match self.state {
            HoverState::NoneHovered => None,
            HoverState::Hovering(id) => Some(id),
        }
    }

    /// Feed this frame's nearest hit. The previous object is always reversed
    /// before the new one plays forward.
    pub fn update(&mut self, nearest: Option<ObjectId>, registry: &mut Registry) -> bool {
        if nearest == self.hovered() {
            return false;
        }
        self.leave_current(registry);
        if let Some(id) = nearest {
            if let Some(obj) = registry.get_mut(id) {
                if !obj.hover_disabled {
                    if let Some(hover) = obj.hover.as_mut() {
                        hover.enter();
                    }
                }
            }
            self.state = HoverState::Hovering(id);
        }
        true
    }

    /// Drop the current hover, reversing its raise.
    pub fn release(&mut self, registry: &mut Registry) {
        self.leave_current(registry);
    }

    /// Returns the style only when it differs from the last one applied.
    pub fn apply_cursor(&mut self, style: CursorStyle) -> Option<CursorStyle> {
        if self.applied_cursor == Some(style) {
            return None;
        }
        self.applied_cursor = Some(style);
        Some(style)
    }

    fn leave_current(&mut self, registry: &mut Registry) {
        if let HoverState::Hovering(prev) = self.state {
            if let Some(hover) = registry.get_mut(prev).and_then(|o| o.hover.as_mut()) {
                hover.leave();
            }
        }
        self.state = HoverState::NoneHovered;
    }
}
