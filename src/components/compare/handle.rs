use serde::{Deserialize, Serialize};

/// How the pointer drives the slider. Fixed for the lifetime of a widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideMode {
    /// Position follows the pointer while it is over the container.
    Hover,
    /// Position follows the pointer only between press and release.
    #[default]
    Drag,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleState {
    Idle,
    Tracking,
}

/// Decides when pointer input is allowed to move the slider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandleController {
    mode: SlideMode,
    state: HandleState,
    hovering: bool,
}

impl HandleController {
    pub fn new(mode: SlideMode) -> Self {
        Self {
            mode,
            state: HandleState::Idle,
            hovering: false,
        }
    }

    pub fn mode(&self) -> SlideMode {
        self.mode
    }

    pub fn state(&self) -> HandleState {
        self.state
    }

    /// Window-level move/release listeners must exist exactly while this holds.
    pub fn is_tracking(&self) -> bool {
        self.state == HandleState::Tracking
    }

    /// Press inside the container. Returns true on `Idle -> Tracking`.
    pub fn press(&mut self) -> bool {
        if self.mode != SlideMode::Drag || self.is_tracking() {
            return false;
        }
        self.state = HandleState::Tracking;
        true
    }

    /// Release, cancel or touch end anywhere. Returns true on `Tracking -> Idle`.
    pub fn release(&mut self) -> bool {
        if !self.is_tracking() {
            return false;
        }
        self.state = HandleState::Idle;
        true
    }

    pub fn enter(&mut self) {
        if self.mode == SlideMode::Hover {
            self.hovering = true;
        }
    }

    pub fn leave(&mut self) {
        self.hovering = false;
    }

    /// Moves reported by the container itself.
    pub fn accepts_container_move(&self) -> bool {
        self.mode == SlideMode::Hover
    }

    /// Moves captured on the window during a drag.
    pub fn accepts_window_move(&self) -> bool {
        self.mode == SlideMode::Drag && self.is_tracking()
    }

    /// A live interaction that supersedes autoplay.
    pub fn is_engaged(&self) -> bool {
        self.is_tracking() || self.hovering
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_mode_cycles_between_idle_and_tracking() {
        let mut controller = HandleController::new(SlideMode::Drag);
        assert_eq!(controller.state(), HandleState::Idle);
        assert!(!controller.accepts_window_move());

        assert!(controller.press());
        assert!(controller.is_tracking());
        assert!(controller.accepts_window_move());
        assert!(!controller.press());

        assert!(controller.release());
        assert_eq!(controller.state(), HandleState::Idle);
        assert!(!controller.accepts_window_move());
        assert!(!controller.release());
    }

    #[test]
    fn hover_mode_never_tracks() {
        let mut controller = HandleController::new(SlideMode::Hover);
        assert!(!controller.press());
        assert!(!controller.is_tracking());
        assert!(controller.accepts_container_move());
        assert!(!controller.accepts_window_move());
    }

    #[test]
    fn drag_mode_ignores_container_moves() {
        let controller = HandleController::new(SlideMode::Drag);
        assert!(!controller.accepts_container_move());
    }

    #[test]
    fn engagement_follows_hover_and_drag() {
        let mut hover = HandleController::new(SlideMode::Hover);
        assert!(!hover.is_engaged());
        hover.enter();
        assert!(hover.is_engaged());
        hover.leave();
        assert!(!hover.is_engaged());

        let mut drag = HandleController::new(SlideMode::Drag);
        drag.enter();
        assert!(!drag.is_engaged());
        drag.press();
        assert!(drag.is_engaged());
        drag.release();
        assert!(!drag.is_engaged());
    }

    #[test]
    fn slide_mode_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&SlideMode::Hover).unwrap(), "\"hover\"");
        let mode: SlideMode = serde_json::from_str("\"drag\"").unwrap();
        assert_eq!(mode, SlideMode::Drag);
        assert_eq!(SlideMode::default(), SlideMode::Drag);
    }
}
