//! Star rating widget state
//!
//! Pressing a star runs a short cosmetic sequence: the stars fill one at a
//! time, a simulated submit follows, and the widget settles on a thank-you
//! state. Nothing is sent anywhere.
//!
//! ```text
//! Idle --press(n)--> Animating --n ticks--> Submitting --finish--> Rated
//!  ^                                                                 |
//!  +---------------------------- rate_again -------------------------+
//! ```

use std::time::Duration;
use thiserror::Error;
use tokio::sync::watch;

/// Number of stars
pub const STAR_COUNT: u8 = 5;

/// Delay between two stars filling
pub const FILL_STEP: Duration = Duration::from_millis(150);

/// Simulated submit time
pub const SUBMIT_DELAY: Duration = Duration::from_secs(1);

/// Rating widget errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatingError {
    /// Star outside 1..=5
    #[error("Invalid star: {0}")]
    InvalidStar(u8),

    /// A rating sequence is already running or finished
    #[error("Rating widget is busy")]
    Busy,
}

/// Result type for rating operations
pub type Result<T> = std::result::Result<T, RatingError>;

/// Timers driving the rating sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingTiming {
    /// Delay between two stars filling
    pub fill_step: Duration,
    /// Simulated submit time
    pub submit_delay: Duration,
}

impl Default for RatingTiming {
    fn default() -> Self {
        Self { fill_step: FILL_STEP, submit_delay: SUBMIT_DELAY }
    }
}

/// Phase of the rating widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingPhase {
    /// Waiting for a press
    Idle {
        /// Previous rating, 0 if never rated
        rating: u8,
        /// Star held down, if any
        hover: Option<u8>,
    },
    /// Stars filling up towards the pressed one
    Animating {
        /// Pressed star
        target: u8,
        /// Stars filled so far
        filled: u8,
    },
    /// Simulated submit in progress
    Submitting {
        /// Rating being submitted
        rating: u8,
    },
    /// Thank-you state
    Rated {
        /// Submitted rating
        rating: u8,
    },
}

impl Default for RatingPhase {
    fn default() -> Self {
        RatingPhase::Idle { rating: 0, hover: None }
    }
}

/// English label for a star count
pub fn rating_label(stars: u8) -> Option<&'static str> {
    match stars {
        1 => Some("Poor"),
        2 => Some("Fair"),
        3 => Some("Good"),
        4 => Some("Very Good"),
        5 => Some("Excellent"),
        _ => None,
    }
}

/// Rating widget
///
/// Observers get phase changes through [`subscribe`](RatingWidget::subscribe).
#[derive(Debug)]
pub struct RatingWidget {
    phase_tx: watch::Sender<RatingPhase>,
}

impl Default for RatingWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl RatingWidget {
    /// Create an idle, unrated widget
    pub fn new() -> Self {
        let (phase_tx, _) = watch::channel(RatingPhase::default());
        Self { phase_tx }
    }

    /// Current phase
    pub fn phase(&self) -> RatingPhase {
        *self.phase_tx.borrow()
    }

    /// Watch phase changes
    pub fn subscribe(&self) -> watch::Receiver<RatingPhase> {
        self.phase_tx.subscribe()
    }

    /// Press a star, starting the fill animation
    ///
    /// Fails with [`RatingError::Busy`] (and changes nothing) unless idle.
    pub fn press(&self, star: u8) -> Result<()> {
        if !(1..=STAR_COUNT).contains(&star) {
            return Err(RatingError::InvalidStar(star));
        }
        let mut started = false;
        self.phase_tx.send_if_modified(|phase| {
            if matches!(phase, RatingPhase::Idle { .. }) {
                *phase = RatingPhase::Animating { target: star, filled: 0 };
                started = true;
            }
            started
        });
        if started {
            tracing::debug!(star, "rating started");
            Ok(())
        } else {
            Err(RatingError::Busy)
        }
    }

    /// Highlight up to a star while it is held down
    pub fn press_in(&self, star: u8) {
        if !(1..=STAR_COUNT).contains(&star) {
            return;
        }
        self.phase_tx.send_if_modified(|phase| match phase {
            RatingPhase::Idle { hover, .. } => {
                *hover = Some(star);
                true
            }
            _ => false,
        });
    }

    /// Drop the press highlight
    pub fn press_out(&self) {
        self.phase_tx.send_if_modified(|phase| match phase {
            RatingPhase::Idle { hover, .. } if hover.is_some() => {
                *hover = None;
                true
            }
            _ => false,
        });
    }

    /// Fill one more star; after the last one, move on to submitting
    pub fn tick(&self) -> RatingPhase {
        self.phase_tx.send_if_modified(|phase| match *phase {
            RatingPhase::Animating { target, filled } => {
                let filled = filled + 1;
                *phase = if filled >= target {
                    RatingPhase::Submitting { rating: target }
                } else {
                    RatingPhase::Animating { target, filled }
                };
                true
            }
            _ => false,
        });
        self.phase()
    }

    /// Finish the simulated submit
    pub fn finish_submit(&self) -> RatingPhase {
        self.phase_tx.send_if_modified(|phase| match *phase {
            RatingPhase::Submitting { rating } => {
                *phase = RatingPhase::Rated { rating };
                true
            }
            _ => false,
        });
        self.phase()
    }

    /// Leave the thank-you state, keeping the previous rating on display
    pub fn rate_again(&self) -> bool {
        self.phase_tx.send_if_modified(|phase| match *phase {
            RatingPhase::Rated { rating } => {
                *phase = RatingPhase::Idle { rating, hover: None };
                true
            }
            _ => false,
        })
    }

    /// Press a star and drive the whole sequence with real timers
    pub async fn run(&self, star: u8, timing: RatingTiming) -> Result<u8> {
        self.press(star)?;

        let mut interval = tokio::time::interval(timing.fill_step);
        // The first tick of an interval fires immediately.
        interval.tick().await;
        loop {
            interval.tick().await;
            if !matches!(self.tick(), RatingPhase::Animating { .. }) {
                break;
            }
        }

        tokio::time::sleep(timing.submit_delay).await;
        match self.finish_submit() {
            RatingPhase::Rated { rating } => {
                tracing::info!(rating, "tour rated");
                Ok(rating)
            }
            _ => Err(RatingError::Busy),
        }
    }

    /// Number of stars drawn filled
    pub fn filled_stars(&self) -> u8 {
        match self.phase() {
            RatingPhase::Idle { rating, hover } => hover.unwrap_or(0).max(rating),
            RatingPhase::Animating { filled, .. } => filled,
            RatingPhase::Submitting { rating } | RatingPhase::Rated { rating } => rating,
        }
    }

    /// Text under the stars
    pub fn helper_text(&self) -> String {
        match self.phase() {
            RatingPhase::Idle { hover: Some(star), .. } => {
                rating_label(star).unwrap_or_default().to_string()
            }
            RatingPhase::Idle { hover: None, .. } => "Tap a star to rate".to_string(),
            RatingPhase::Animating { .. } | RatingPhase::Submitting { .. } => {
                "Rating...".to_string()
            }
            RatingPhase::Rated { rating } => {
                format!("You rated this tour {} out of 5 stars", rating)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(rating_label(1), Some("Poor"));
        assert_eq!(rating_label(4), Some("Very Good"));
        assert_eq!(rating_label(0), None);
        assert_eq!(rating_label(6), None);
    }

    #[test]
    fn test_manual_sequence() {
        let widget = RatingWidget::new();
        widget.press(3).unwrap();

        assert_eq!(widget.tick(), RatingPhase::Animating { target: 3, filled: 1 });
        assert_eq!(widget.tick(), RatingPhase::Animating { target: 3, filled: 2 });
        assert_eq!(widget.helper_text(), "Rating...");
        assert_eq!(widget.tick(), RatingPhase::Submitting { rating: 3 });
        assert_eq!(widget.finish_submit(), RatingPhase::Rated { rating: 3 });
        assert_eq!(widget.helper_text(), "You rated this tour 3 out of 5 stars");
    }

    #[test]
    fn test_press_rejected_unless_idle() {
        let widget = RatingWidget::new();
        assert_eq!(widget.press(0), Err(RatingError::InvalidStar(0)));
        assert_eq!(widget.press(6), Err(RatingError::InvalidStar(6)));

        widget.press(2).unwrap();
        assert_eq!(widget.press(5), Err(RatingError::Busy));
        assert_eq!(widget.phase(), RatingPhase::Animating { target: 2, filled: 0 });
    }

    #[test]
    fn test_rate_again_remembers_rating() {
        let widget = RatingWidget::new();
        assert!(!widget.rate_again());

        widget.press(1).unwrap();
        widget.tick();
        widget.finish_submit();

        assert!(widget.rate_again());
        assert_eq!(widget.phase(), RatingPhase::Idle { rating: 1, hover: None });
        assert_eq!(widget.filled_stars(), 1);
    }

    #[test]
    fn test_hover_highlight() {
        let widget = RatingWidget::new();
        assert_eq!(widget.helper_text(), "Tap a star to rate");

        widget.press_in(4);
        assert_eq!(widget.filled_stars(), 4);
        assert_eq!(widget.helper_text(), "Very Good");

        widget.press_out();
        assert_eq!(widget.filled_stars(), 0);

        widget.press(2).unwrap();
        widget.press_in(5);
        assert_eq!(widget.filled_stars(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_takes_fill_and_submit_time() {
        let widget = RatingWidget::new();
        let start = tokio::time::Instant::now();

        assert_eq!(widget.run(4, RatingTiming::default()).await, Ok(4));

        let elapsed = start.elapsed();
        assert!(elapsed >= FILL_STEP * 4 + SUBMIT_DELAY);
        assert!(elapsed < FILL_STEP * 5 + SUBMIT_DELAY);
        assert_eq!(widget.phase(), RatingPhase::Rated { rating: 4 });
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscribers_see_progress() {
        let widget = std::sync::Arc::new(RatingWidget::new());
        let mut rx = widget.subscribe();

        let run = tokio::spawn({
            let widget = widget.clone();
            async move { widget.run(2, RatingTiming::default()).await }
        });

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), RatingPhase::Animating { target: 2, filled: 0 });

        assert_eq!(run.await.unwrap(), Ok(2));
        assert_eq!(*rx.borrow_and_update(), RatingPhase::Rated { rating: 2 });
    }
}
