// Bookkeeping for browser callbacks (animation frames, one-shot timeouts).
// Handles are the plain integers the browser hands back.

/// Tracks the single pending animation frame of a redraw loop.
///
/// `restart` returns the handle that must be cancelled before the new loop is
/// scheduled and bumps the generation; ticks from an older generation must not
/// reschedule themselves.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameSlot {
    pending: Option<i32>,
    generation: u32,
    running: bool,
}

impl FrameSlot {
    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn pending(&self) -> Option<i32> {
        self.pending
    }

    pub fn restart(&mut self) -> (u32, Option<i32>) {
        self.generation = self.generation.wrapping_add(1);
        self.running = true;
        (self.generation, self.pending.take())
    }

    /// Whether a tick of `generation` may schedule the next frame.
    pub fn is_current(&self, generation: u32) -> bool {
        self.running && self.generation == generation
    }

    /// Record the handle of the frame just requested. Returns the handle that
    /// was still pending, if any; callers cancel it.
    pub fn scheduled(&mut self, handle: i32) -> Option<i32> {
        self.pending.replace(handle)
    }

    /// Called at the top of a tick: its own frame is no longer pending.
    pub fn fired(&mut self) {
        self.pending = None;
    }

    pub fn stop(&mut self) -> Option<i32> {
        self.running = false;
        self.generation = self.generation.wrapping_add(1);
        self.pending.take()
    }
}

/// One-shot timeout owned by some piece of UI state.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimerSlot {
    handle: Option<i32>,
}

impl TimerSlot {
    /// Store a freshly armed handle; returns the previous one to clear.
    pub fn arm(&mut self, handle: i32) -> Option<i32> {
        self.handle.replace(handle)
    }

    /// The timeout ran; forget its handle.
    pub fn fired(&mut self, handle: i32) {
        if self.handle == Some(handle) {
            self.handle = None;
        }
    }

    pub fn disarm(&mut self) -> Option<i32> {
        self.handle.take()
    }

    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }
}
