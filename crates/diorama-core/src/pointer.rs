use glam::Vec2;

/// Normalised device coordinates of the pointer plus the bookkeeping needed
/// to skip redundant hit tests and to drop synthetic clicks after a touch.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
    ndc: Vec2,
    dirty: bool,
    touch_happened: bool,
}

/// Map client pixels to `[-1, 1]` NDC with +Y up.
#[inline]
pub fn client_to_ndc(client: Vec2, viewport: Vec2) -> Option<Vec2> {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        (client.x / viewport.x) * 2.0 - 1.0,
        -(client.y / viewport.y) * 2.0 + 1.0,
    ))
}

impl PointerTracker {
    pub fn ndc(&self) -> Vec2 {
        self.ndc
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns whether the pointer moved since the last call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Force the next frame to recast (e.g. after a modal closes).
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn mouse_move(&mut self, client: Vec2, viewport: Vec2, modal_open: bool) {
        self.touch_happened = false;
        if modal_open {
            return;
        }
        self.set_client(client, viewport);
    }

    pub fn touch_start(&mut self, client: Vec2, viewport: Vec2, modal_open: bool) {
        if modal_open {
            return;
        }
        self.set_client(client, viewport);
    }

    /// A touch gesture finished; the click the browser synthesises for it
    /// must be ignored by handlers that already reacted to the touch.
    pub fn touch_end(&mut self) {
        self.touch_happened = true;
    }

    pub fn touch_happened(&self) -> bool {
        self.touch_happened
    }

    fn set_client(&mut self, client: Vec2, viewport: Vec2) {
        if let Some(ndc) = client_to_ndc(client, viewport) {
            self.ndc = ndc;
            self.dirty = true;
        }
    }
}
