use glam::Vec2;

/// Pointer offset from the centre of the interaction surface.
///
/// Both axes live in \[-1, 1\]; `(0, 0)` is the centre and also the value the
/// page starts with before the first pointer move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSignal {
    pub x: f32,
    pub y: f32,
}

impl Default for PointerSignal {
    fn default() -> Self {
        Self::CENTER
    }
}

impl PointerSignal {
    pub const CENTER: Self = Self { x: 0.0, y: 0.0 };

    /// Normalise a position relative to the surface's top-left corner.
    ///
    /// Returns `None` for degenerate surfaces (zero or negative size, NaN).
    pub fn from_surface(px: f32, py: f32, width: f32, height: f32) -> Option<Self> {
        if !(width > 0.0 && height > 0.0) || !px.is_finite() || !py.is_finite() {
            return None;
        }
        let x = (px / width) * 2.0 - 1.0;
        let y = (py / height) * 2.0 - 1.0;
        Some(Self {
            x: x.clamp(-1.0, 1.0),
            y: y.clamp(-1.0, 1.0),
        })
    }

    #[inline]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Map into shader pixel space (bottom-left origin).
    #[inline]
    pub fn to_surface_px(self, width: f32, height: f32) -> [f32; 2] {
        let mx = (self.x + 1.0) * 0.5 * width;
        let my = (1.0 - (self.y + 1.0) * 0.5) * height;
        [mx, my]
    }
}

/// Viewport (client) coordinates made relative to a surface whose top-left
/// corner sits at `left, top`.
#[inline]
pub fn surface_local(client_x: f32, client_y: f32, left: f32, top: f32) -> [f32; 2] {
    [client_x - left, client_y - top]
}

/// Holds the live pointer signal; updates are dropped while frozen.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
    signal: PointerSignal,
}

impl PointerTracker {
    #[inline]
    pub fn signal(&self) -> PointerSignal {
        self.signal
    }

    /// Feed one pointer-move sample. Returns true when the signal changed.
    pub fn track(&mut self, px: f32, py: f32, width: f32, height: f32, live: bool) -> bool {
        if !live {
            return false;
        }
        match PointerSignal::from_surface(px, py, width, height) {
            Some(next) if next != self.signal => {
                self.signal = next;
                true
            }
            _ => false,
        }
    }
}
