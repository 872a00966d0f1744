use crate::{position, Config, Point, Size};

/// The floating element a `Tooltip` shows and hides. Visibility is read back
/// from the overlay itself rather than tracked alongside it.
pub trait Overlay {
    fn set_text(&mut self, text: &str);

    /// Rendered size. Only meaningful while visible.
    fn size(&self) -> Size;

    fn place(&mut self, at: Point);

    fn set_visible(&mut self, visible: bool);

    fn visible(&self) -> bool;

    /// Detach the overlay for good. Called once, on destroy.
    fn remove(&mut self);
}

/// Identifies a scheduled action. A timer reports the token back to
/// `Tooltip::fire` when it elapses.
pub type Token = u32;

/// One-shot timer used for the delayed show and hide actions.
pub trait Timer {
    type Handle;

    /// Arrange for `Tooltip::fire(token)` to be called after `delay`
    /// milliseconds. Returns `None` if the timer couldn't be started.
    fn start(&mut self, delay: u32, token: Token) -> Option<Self::Handle>;

    /// Cancel a started timer so it never fires.
    fn stop(&mut self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Show,
    Hide,
}

struct Pending<H> {
    token: Token,
    action: Action,
    handle: H,
}

/// Show/hide state machine for a single tooltip overlay shared by any number
/// of targets of type `T`.
pub struct Tooltip<T, O: Overlay, R: Timer> {
    config: Config,

    // None once destroyed.
    overlay: Option<O>,

    timer: R,

    // Target the tooltip currently belongs to.
    active: Option<T>,

    // Last known pointer position, used when a delayed show fires.
    pointer: Point,

    // The single outstanding timer, if any.
    pending: Option<Pending<R::Handle>>,

    next_token: Token,
}

impl<T: PartialEq, O: Overlay, R: Timer> Tooltip<T, O, R> {
    pub fn new(config: Config, mut overlay: O, timer: R) -> Self {
        overlay.set_visible(false);
        Self {
            config,
            overlay: Some(overlay),
            timer,
            active: None,
            pointer: Point::ORIGIN,
            pending: None,
            next_token: 0,
        }
    }

    pub fn active(&self) -> Option<&T> {
        self.active.as_ref()
    }

    pub fn pending(&self) -> Option<Action> {
        self.pending.as_ref().map(|p| p.action)
    }

    pub fn is_visible(&self) -> bool {
        self.overlay.as_ref().map(|o| o.visible()).unwrap_or(false)
    }

    pub fn is_destroyed(&self) -> bool {
        self.overlay.is_none()
    }

    pub fn overlay(&self) -> Option<&O> {
        self.overlay.as_ref()
    }

    /// Pointer entered `target`, which carries `text`. Targets without text
    /// never show a tooltip.
    pub fn enter(&mut self, target: T, text: Option<&str>, at: Point) {
        let Some(text) = text.filter(|t| !t.is_empty()) else {
            return;
        };
        let Some(overlay) = self.overlay.as_mut() else {
            return;
        };

        let visible = overlay.visible();
        overlay.set_text(text);
        self.pointer = at;

        // Re-entering the target already shown, e.g. moving between its
        // children, keeps the tooltip up instead of restarting the delay.
        if visible && self.active.as_ref() == Some(&target) {
            self.cancel();
            self.show();
        } else {
            self.active = Some(target);
            self.schedule(Action::Show, self.config.show_delay);
        }
    }

    /// Pointer moved to `at` over `target`. Repositions immediately while the
    /// tooltip is visible.
    pub fn track(&mut self, target: &T, at: Point) {
        if self.active.as_ref() != Some(target) {
            return;
        }

        self.pointer = at;
        let offset = self.config.offset;
        if let Some(overlay) = self.overlay.as_mut() {
            if overlay.visible() {
                let size = overlay.size();
                overlay.place(position(at, size, offset));
            }
        }
    }

    pub fn leave(&mut self, target: &T) {
        if self.is_destroyed() || self.active.as_ref() != Some(target) {
            return;
        }

        self.schedule(Action::Hide, self.config.hide_delay);
    }

    /// A click on `target` hides the tooltip, unless the target asks to be
    /// shown on click in which case it is shown straight away.
    pub fn click(&mut self, target: &T, show_on_click: bool) {
        if self.is_destroyed() || self.active.as_ref() != Some(target) {
            return;
        }

        if show_on_click {
            self.cancel();
            self.show();
        } else {
            self.schedule(Action::Hide, self.config.hide_delay);
        }
    }

    /// Called by the timer. Tokens other than that of the pending action are
    /// stale and ignored.
    pub fn fire(&mut self, token: Token) {
        let action = match self.pending.take() {
            Some(pending) if pending.token == token => pending.action,
            other => {
                self.pending = other;
                return;
            }
        };

        match action {
            Action::Show => self.show(),
            Action::Hide => self.hide(),
        }
    }

    /// Cancel the timer, drop the target and remove the overlay. Safe to call
    /// repeatedly.
    pub fn destroy(&mut self) {
        self.cancel();
        self.active = None;
        if let Some(mut overlay) = self.overlay.take() {
            overlay.remove();
        }
    }

    fn show(&mut self) {
        let Some(overlay) = self.overlay.as_mut() else {
            return;
        };

        // Size is only available once rendered.
        overlay.set_visible(true);
        let size = overlay.size();
        overlay.place(position(self.pointer, size, self.config.offset));

        if let Some(delay) = self.config.auto_hide {
            self.schedule(Action::Hide, delay);
        }
    }

    fn hide(&mut self) {
        self.active = None;
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.set_visible(false);
        }
    }

    fn schedule(&mut self, action: Action, delay: u32) {
        self.cancel();

        let token = self.next_token;
        self.next_token = self.next_token.wrapping_add(1);
        if let Some(handle) = self.timer.start(delay, token) {
            self.pending = Some(Pending {
                token,
                action,
                handle,
            });
        }
    }

    fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.timer.stop(pending.handle);
        }
    }
}

impl<T, O: Overlay, R: Timer> Drop for Tooltip<T, O, R> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.timer.stop(pending.handle);
        }
        if let Some(mut overlay) = self.overlay.take() {
            overlay.remove();
        }
    }
}
