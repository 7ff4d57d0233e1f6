//! Splash screen animation state

use std::time::{Duration, Instant};

/// Animation phase for splash screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    /// Static crest display
    Display,
    /// Crest sliding off the top
    ScrollUp,
    /// Animation finished
    Complete,
}

/// Splash screen animation state
#[derive(Debug)]
pub struct SplashState {
    /// When the splash started
    pub start_time: Instant,
    /// Current animation phase
    pub phase: SplashPhase,
    /// Current vertical offset (for scroll animation)
    pub scroll_offset: f32,
}

impl SplashState {
    /// Display duration before animation starts
    const DISPLAY_DURATION: Duration = Duration::from_millis(1300);
    /// Duration of scroll-up animation
    const ANIMATION_DURATION: Duration = Duration::from_millis(800);

    pub fn new(now: Instant) -> Self {
        Self {
            start_time: now,
            phase: SplashPhase::Display,
            scroll_offset: 0.0,
        }
    }

    /// Update animation state for the time `now`
    pub fn update(&mut self, now: Instant, terminal_height: u16) {
        if self.is_complete() {
            return;
        }
        let elapsed = now.saturating_duration_since(self.start_time);

        if elapsed < Self::DISPLAY_DURATION {
            self.phase = SplashPhase::Display;
            self.scroll_offset = 0.0;
        } else if elapsed < Self::DISPLAY_DURATION + Self::ANIMATION_DURATION {
            self.phase = SplashPhase::ScrollUp;
            let animation_elapsed = elapsed - Self::DISPLAY_DURATION;
            let progress = animation_elapsed.as_secs_f32() / Self::ANIMATION_DURATION.as_secs_f32();
            // cubic ease-out
            let eased = simple_easing::cubic_out(progress);
            self.scroll_offset = eased * (terminal_height as f32);
        } else {
            self.phase = SplashPhase::Complete;
        }
    }

    /// Skip to completion (user pressed a key)
    pub fn skip(&mut self) {
        self.phase = SplashPhase::Complete;
    }

    pub fn is_complete(&self) -> bool {
        self.phase == SplashPhase::Complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_in_display_phase() {
        let state = SplashState::new(Instant::now());
        assert_eq!(state.phase, SplashPhase::Display);
        assert_eq!(state.scroll_offset, 0.0);
    }

    #[test]
    fn test_skip_immediately_completes() {
        let mut state = SplashState::new(Instant::now());
        assert!(!state.is_complete());
        state.skip();
        assert!(state.is_complete());
    }

    #[test]
    fn test_holds_during_display() {
        let start = Instant::now();
        let mut state = SplashState::new(start);
        state.update(start + Duration::from_millis(1000), 40);
        assert_eq!(state.phase, SplashPhase::Display);
        assert_eq!(state.scroll_offset, 0.0);
    }

    #[test]
    fn test_scrolls_then_completes() {
        let start = Instant::now();
        let mut state = SplashState::new(start);
        state.update(start + Duration::from_millis(1700), 40);
        assert_eq!(state.phase, SplashPhase::ScrollUp);
        assert!(state.scroll_offset > 0.0 && state.scroll_offset <= 40.0);

        state.update(start + Duration::from_millis(2100), 40);
        assert!(state.is_complete());
    }

    #[test]
    fn test_skip_is_sticky() {
        let start = Instant::now();
        let mut state = SplashState::new(start);
        state.skip();
        state.update(start, 40);
        assert!(state.is_complete());
    }
}
