/// Slide state and view mode controller
///
/// `Session` owns the current slide index, the autoplay timer and which
/// screen is showing. Every operation returns a `Step` telling the caller
/// whether to re-render and which timer tick (if any) to schedule.

use std::time::Duration;

use super::timer::{RepeatingTimer, Tick};

/// Which screen is up, and how the slideshow got there
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Masonry grid, start button in the header
    #[default]
    Gallery,
    /// Slideshow advancing on its own, stop button in the header
    Playing,
    /// Slideshow opened from a grid item, return button in the header
    Manual,
}

/// The single header button visible in each view mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderButton {
    Start,
    Stop,
    Return,
}

impl ViewMode {
    pub fn header_button(self) -> HeaderButton {
        match self {
            ViewMode::Gallery => HeaderButton::Start,
            ViewMode::Playing => HeaderButton::Stop,
            ViewMode::Manual => HeaderButton::Return,
        }
    }

    /// Slideshow and footer are visible together, the grid otherwise
    pub fn shows_slideshow(self) -> bool {
        match self {
            ViewMode::Gallery => false,
            ViewMode::Playing | ViewMode::Manual => true,
        }
    }
}

/// What an operation asks of the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[must_use]
pub struct Step {
    /// Session changed, re-render
    pub changed: bool,
    /// Autoplay tick to deliver back via `on_autoplay_tick`
    pub schedule: Option<Tick>,
}

impl Step {
    fn unchanged() -> Self {
        Self::default()
    }

    fn changed() -> Self {
        Self {
            changed: true,
            schedule: None,
        }
    }

    fn scheduling(schedule: Option<Tick>) -> Self {
        Self {
            changed: true,
            schedule,
        }
    }
}

/// Mutable presentation state, one per application
#[derive(Debug, Clone)]
pub struct Session {
    /// Always in `[0, total)` once loaded
    current_index: usize,
    /// Number of artworks; zero until the dataset arrives
    total: usize,
    view_mode: ViewMode,
    /// Overlay on top of the slideshow, independent of `view_mode`
    lightbox_open: bool,
    autoplay: RepeatingTimer,
}

impl Session {
    pub fn new(autoplay_interval: Duration) -> Self {
        Self {
            current_index: 0,
            total: 0,
            view_mode: ViewMode::Gallery,
            lightbox_open: false,
            autoplay: RepeatingTimer::new(autoplay_interval),
        }
    }

    /// Attach the dataset size. Called once when the catalog arrives.
    pub fn load(&mut self, total: usize) -> Step {
        if total == 0 {
            return Step::unchanged();
        }
        self.total = total;
        self.current_index = 0;
        Step::changed()
    }

    pub fn is_loaded(&self) -> bool {
        self.total > 0
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn lightbox_open(&self) -> bool {
        self.lightbox_open
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_armed()
    }

    fn last_index(&self) -> usize {
        self.total.saturating_sub(1)
    }

    /// Give a running autoplay a fresh full interval after manual navigation
    fn restart_if_playing(&mut self) -> Option<Tick> {
        self.autoplay.is_armed().then(|| self.autoplay.start())
    }

    /// Advance one slide. No-op on the last slide.
    pub fn go_to_next(&mut self) -> Step {
        if !self.is_loaded() || self.current_index >= self.last_index() {
            return Step::unchanged();
        }
        self.current_index += 1;
        Step::scheduling(self.restart_if_playing())
    }

    /// Go back one slide. No-op on the first slide.
    pub fn go_to_prev(&mut self) -> Step {
        if !self.is_loaded() || self.current_index == 0 {
            return Step::unchanged();
        }
        self.current_index -= 1;
        Step::scheduling(self.restart_if_playing())
    }

    /// Open the slideshow on a grid item, without autoplay
    pub fn jump_to(&mut self, index: usize) -> Step {
        if index >= self.total {
            tracing::warn!(index, total = self.total, "ignoring jump to missing artwork");
            return Step::unchanged();
        }
        self.autoplay.cancel();
        self.current_index = index;
        self.view_mode = ViewMode::Manual;
        Step::changed()
    }

    /// Start the slideshow. From the grid it always begins at the first slide.
    pub fn start_autoplay(&mut self) -> Step {
        if !self.is_loaded() {
            return Step::unchanged();
        }
        if self.view_mode == ViewMode::Gallery {
            self.current_index = 0;
        }
        self.view_mode = ViewMode::Playing;
        Step::scheduling(Some(self.autoplay.start()))
    }

    /// Back to the grid, cancelling autoplay
    pub fn stop_autoplay(&mut self) -> Step {
        self.autoplay.cancel();
        if self.view_mode == ViewMode::Gallery {
            return Step::unchanged();
        }
        self.view_mode = ViewMode::Gallery;
        Step::changed()
    }

    /// Handle a fired autoplay tick.
    ///
    /// Advances one slide and re-arms; landing on the last slide ends
    /// autoplay and returns to the grid. Stale ticks are ignored.
    pub fn on_autoplay_tick(&mut self, tick: Tick) -> Step {
        if !self.autoplay.accepts(tick) {
            tracing::debug!("dropping stale autoplay tick");
            return Step::unchanged();
        }
        if self.current_index >= self.last_index() {
            return self.stop_autoplay();
        }

        self.current_index += 1;
        if self.current_index == self.last_index() {
            tracing::debug!("autoplay reached the last artwork");
            return self.stop_autoplay();
        }
        Step::scheduling(Some(self.autoplay.tick()))
    }

    /// Show the full image over the slideshow
    pub fn open_lightbox(&mut self) -> Step {
        if self.lightbox_open || !self.view_mode.shows_slideshow() {
            return Step::unchanged();
        }
        self.lightbox_open = true;
        Step::changed()
    }

    pub fn close_lightbox(&mut self) -> Step {
        if !self.lightbox_open {
            return Step::unchanged();
        }
        self.lightbox_open = false;
        Step::changed()
    }

    pub fn toggle_lightbox(&mut self) -> Step {
        if self.lightbox_open {
            self.close_lightbox()
        } else {
            self.open_lightbox()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(3000);

    fn loaded(total: usize) -> Session {
        let mut session = Session::new(INTERVAL);
        let _ = session.load(total);
        session
    }

    #[test]
    fn test_header_button_per_mode() {
        assert_eq!(ViewMode::Gallery.header_button(), HeaderButton::Start);
        assert_eq!(ViewMode::Playing.header_button(), HeaderButton::Stop);
        assert_eq!(ViewMode::Manual.header_button(), HeaderButton::Return);
        assert!(!ViewMode::Gallery.shows_slideshow());
        assert!(ViewMode::Playing.shows_slideshow());
        assert!(ViewMode::Manual.shows_slideshow());
    }

    #[test]
    fn test_navigation_before_load_is_noop() {
        let mut session = Session::new(INTERVAL);
        assert_eq!(session.go_to_next(), Step::default());
        assert_eq!(session.go_to_prev(), Step::default());
        assert_eq!(session.start_autoplay(), Step::default());
        assert_eq!(session.jump_to(0), Step::default());
        assert_eq!(session.view_mode(), ViewMode::Gallery);
    }

    #[test]
    fn test_next_and_prev_clamp_at_bounds() {
        let mut session = loaded(3);

        assert!(!session.go_to_prev().changed);
        assert_eq!(session.current_index(), 0);

        assert!(session.go_to_next().changed);
        assert!(session.go_to_next().changed);
        assert_eq!(session.current_index(), 2);

        let step = session.go_to_next();
        assert!(!step.changed);
        assert_eq!(session.current_index(), 2);
    }

    #[test]
    fn test_index_stays_in_range_under_any_sequence() {
        let total = 7;
        let mut session = loaded(total);
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;

        for _ in 0..2000 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let _ = match (seed >> 33) % 3 {
                0 => session.go_to_next(),
                1 => session.go_to_prev(),
                _ => session.jump_to((seed >> 40) as usize % (total + 3)),
            };
            assert!(session.current_index() < total);
        }
    }

    #[test]
    fn test_jump_to_opens_manual_slideshow_without_timer() {
        let mut session = loaded(15);

        let step = session.jump_to(7);

        assert!(step.changed);
        assert_eq!(step.schedule, None);
        assert_eq!(session.current_index(), 7);
        assert_eq!(session.view_mode(), ViewMode::Manual);
        assert!(!session.is_autoplaying());
    }

    #[test]
    fn test_jump_out_of_range_is_ignored() {
        let mut session = loaded(5);
        assert!(!session.jump_to(5).changed);
        assert_eq!(session.view_mode(), ViewMode::Gallery);
    }

    #[test]
    fn test_start_from_gallery_resets_to_first_slide() {
        let mut session = loaded(5);
        let _ = session.jump_to(3);
        let _ = session.stop_autoplay();

        let step = session.start_autoplay();

        assert_eq!(session.current_index(), 0);
        assert_eq!(session.view_mode(), ViewMode::Playing);
        assert!(session.is_autoplaying());
        assert_eq!(step.schedule.map(|tick| tick.after), Some(INTERVAL));
    }

    #[test]
    fn test_start_from_manual_keeps_index() {
        let mut session = loaded(5);
        let _ = session.jump_to(2);
        let _ = session.start_autoplay();
        assert_eq!(session.current_index(), 2);
        assert_eq!(session.view_mode(), ViewMode::Playing);
    }

    #[test]
    fn test_restarting_autoplay_leaves_one_live_timer() {
        let mut session = loaded(5);
        let first = session.start_autoplay().schedule.unwrap();
        let second = session.start_autoplay().schedule.unwrap();

        assert!(!session.on_autoplay_tick(first).changed);
        assert_eq!(session.current_index(), 0);
        assert!(session.on_autoplay_tick(second).changed);
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn test_autoplay_ends_on_last_slide() {
        let mut session = loaded(5);
        let mut tick = session.start_autoplay().schedule;
        let mut elapsed = Duration::ZERO;
        let mut ticks = 0;

        while let Some(pending) = tick {
            elapsed += pending.after;
            ticks += 1;
            let step = session.on_autoplay_tick(pending);
            assert!(step.changed);
            tick = step.schedule;
        }

        assert_eq!(ticks, 4);
        assert_eq!(elapsed, Duration::from_millis(12000));
        assert_eq!(session.current_index(), 4);
        assert_eq!(session.view_mode(), ViewMode::Gallery);
        assert!(!session.is_autoplaying());
    }

    #[test]
    fn test_manual_navigation_restarts_autoplay_window() {
        let mut session = loaded(5);
        let first = session.start_autoplay().schedule.unwrap();

        let step = session.go_to_next();
        let restarted = step.schedule.expect("timer should restart");

        assert_eq!(restarted.after, INTERVAL);
        assert!(!session.on_autoplay_tick(first).changed);
        assert_eq!(session.current_index(), 1);
        assert!(session.on_autoplay_tick(restarted).changed);
        assert_eq!(session.current_index(), 2);
    }

    #[test]
    fn test_manual_navigation_without_autoplay_schedules_nothing() {
        let mut session = loaded(5);
        let _ = session.jump_to(1);
        assert_eq!(session.go_to_next().schedule, None);
        assert_eq!(session.go_to_prev().schedule, None);
    }

    #[test]
    fn test_tick_at_last_slide_stops() {
        let mut session = loaded(3);
        let _ = session.start_autoplay();
        let _ = session.go_to_next();
        let tick = session.go_to_next().schedule.unwrap();
        assert_eq!(session.current_index(), 2);

        let step = session.on_autoplay_tick(tick);

        assert!(step.changed);
        assert_eq!(step.schedule, None);
        assert_eq!(session.view_mode(), ViewMode::Gallery);
    }

    #[test]
    fn test_stop_cancels_pending_tick() {
        let mut session = loaded(5);
        let tick = session.start_autoplay().schedule.unwrap();

        assert!(session.stop_autoplay().changed);
        assert!(!session.on_autoplay_tick(tick).changed);
        assert_eq!(session.current_index(), 0);

        // Already in the grid
        assert!(!session.stop_autoplay().changed);
    }

    #[test]
    fn test_return_from_manual_goes_to_gallery() {
        let mut session = loaded(5);
        let _ = session.jump_to(3);
        assert!(session.stop_autoplay().changed);
        assert_eq!(session.view_mode(), ViewMode::Gallery);
    }

    #[test]
    fn test_lightbox_is_symmetric_and_mode_independent() {
        let mut session = loaded(5);
        let _ = session.jump_to(1);

        assert!(session.open_lightbox().changed);
        assert!(session.lightbox_open());
        assert_eq!(session.view_mode(), ViewMode::Manual);

        assert!(session.close_lightbox().changed);
        assert!(!session.lightbox_open());

        assert!(session.toggle_lightbox().changed);
        assert!(session.lightbox_open());
        assert_eq!(session.view_mode(), ViewMode::Manual);
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn test_lightbox_needs_slideshow() {
        let mut session = loaded(5);
        assert!(!session.open_lightbox().changed);
        assert!(!session.lightbox_open());
        assert!(!session.close_lightbox().changed);
    }
}
