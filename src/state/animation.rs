//! Animated numeric readouts
//!
//! A [`ValueAnimator`] interpolates a readout from a start value to an end
//! value over a fixed wall-clock duration. The host run loop calls
//! [`ValueAnimator::tick`] once per frame; each tick rewrites the text of every
//! readout that is still animating.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Source of the current time for frame calculations
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Clock backed by [`Instant::now`]
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Display targets written by animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Readout {
    AccuracyMeter,
    TrainScore,
    TestScore,
    Price,
    Confidence,
}

/// How an animated value is rendered
#[derive(Debug, Clone, PartialEq)]
pub enum ValueFormat {
    /// One decimal digit followed by a suffix
    Decimal { suffix: String },
    /// Whole number with en-US thousands separators
    Currency,
}

impl ValueFormat {
    pub fn render(&self, value: f64) -> String {
        match self {
            Self::Decimal { suffix } => format_decimal(value, suffix),
            Self::Currency => format_price(value),
        }
    }
}

/// A single request to animate a readout
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationRequest {
    pub target: Readout,
    pub start: f64,
    pub end: f64,
    pub duration: Duration,
    pub format: ValueFormat,
}

impl AnimationRequest {
    pub fn new(target: Readout, start: f64, end: f64, duration: Duration) -> Self {
        Self {
            target,
            start,
            end,
            duration,
            format: ValueFormat::Decimal {
                suffix: String::new(),
            },
        }
    }

    /// Render with one decimal digit and the given suffix
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.format = ValueFormat::Decimal {
            suffix: suffix.into(),
        };
        self
    }

    /// Render as a grouped whole-number price
    pub fn currency(mut self) -> Self {
        self.format = ValueFormat::Currency;
        self
    }
}

/// What a readout currently shows
#[derive(Debug, Clone, PartialEq)]
pub struct ReadoutValue {
    pub text: String,
    /// Numeric value behind the text, `None` for placeholders like "N/A"
    pub value: Option<f64>,
}

/// Text content of every readout on screen
#[derive(Debug, Default)]
pub struct ReadoutBoard {
    readouts: HashMap<Readout, ReadoutValue>,
}

impl ReadoutBoard {
    pub fn set(&mut self, readout: Readout, text: String, value: Option<f64>) {
        self.readouts.insert(readout, ReadoutValue { text, value });
    }

    /// Show placeholder text with no numeric value
    pub fn set_text(&mut self, readout: Readout, text: impl Into<String>) {
        self.set(readout, text.into(), None);
    }

    pub fn text(&self, readout: Readout) -> Option<&str> {
        self.readouts.get(&readout).map(|r| r.text.as_str())
    }

    pub fn value(&self, readout: Readout) -> Option<f64> {
        self.readouts.get(&readout).and_then(|r| r.value)
    }

    pub fn clear(&mut self, readout: Readout) {
        self.readouts.remove(&readout);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameState {
    Running,
    Finished,
}

#[derive(Debug)]
struct RunningAnimation {
    request: AnimationRequest,
    started_at: Instant,
}

impl RunningAnimation {
    fn render(&self, now: Instant, board: &mut ReadoutBoard) -> FrameState {
        let request = &self.request;
        let elapsed = now.saturating_duration_since(self.started_at);
        let progress = progress(elapsed, request.duration);

        if progress >= 1.0 {
            // Final frame writes the exact end value, not the interpolation
            board.set(
                request.target,
                request.format.render(request.end),
                Some(request.end),
            );
            return FrameState::Finished;
        }

        let current = interpolate(request.start, request.end, progress);
        board.set(request.target, request.format.render(current), Some(current));
        FrameState::Running
    }
}

/// Drives frame-based interpolation of readouts
pub struct ValueAnimator {
    clock: Arc<dyn Clock>,
    running: HashMap<Readout, RunningAnimation>,
}

impl ValueAnimator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            running: HashMap::new(),
        }
    }

    /// Start animating a readout, cancelling any sequence already running on it.
    ///
    /// The first frame is written immediately. A zero duration writes the end
    /// value and finishes without scheduling further frames.
    pub fn animate(&mut self, request: AnimationRequest, board: &mut ReadoutBoard) {
        if self.running.remove(&request.target).is_some() {
            tracing::debug!("Cancelled running animation on {:?}", request.target);
        }

        let target = request.target;
        let animation = RunningAnimation {
            request,
            started_at: self.clock.now(),
        };

        if animation.render(animation.started_at, board) == FrameState::Running {
            self.running.insert(target, animation);
        }
    }

    /// Advance every running animation to the current time
    pub fn tick(&mut self, board: &mut ReadoutBoard) {
        if self.running.is_empty() {
            return;
        }
        let now = self.clock.now();
        self.running
            .retain(|_, animation| animation.render(now, board) == FrameState::Running);
    }

    /// Stop the animation on a readout, leaving its last frame on screen
    pub fn cancel(&mut self, target: Readout) -> bool {
        self.running.remove(&target).is_some()
    }

    pub fn is_animating(&self) -> bool {
        !self.running.is_empty()
    }

    #[cfg(test)]
    pub fn is_animating_target(&self, target: Readout) -> bool {
        self.running.contains_key(&target)
    }
}

/// Fraction of the duration that has elapsed, clamped to 1
fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
}

/// Quartic ease-out: `1 - (1 - p)^4`
pub fn ease_out_quart(progress: f64) -> f64 {
    f64::from(simple_easing::quart_out(progress as f32))
}

fn interpolate(start: f64, end: f64, progress: f64) -> f64 {
    start + (end - start) * ease_out_quart(progress)
}

/// Round to a whole number and group thousands with commas, as en-US locales do.
///
/// Halves round up, so `-2.5` becomes `-2`.
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return price.to_string();
    }

    let rounded = round_half_up(price);
    let digits = format!("{:.0}", rounded.abs());
    let grouped = group_thousands(&digits);

    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Nearest integer with halves rounded toward positive infinity
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// One decimal digit followed by `suffix`.
///
/// Exact ties round away from zero, so `87.25` prints as `87.3`.
pub fn format_decimal(value: f64, suffix: &str) -> String {
    // A double lies exactly on a hundredths tie only when four times it is an odd integer
    let quarters = value * 4.0;
    let value = if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        (value * 10.0).round() / 10.0
    } else {
        value
    };
    // Adding zero turns -0.0 into 0.0
    format!("{:.1}{}", value + 0.0, suffix)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}


#[cfg(test)]
mod tests {
    use super::test_support::ManualClock;
    use super::*;
    use pretty_assertions::assert_eq;

    fn animator() -> (Arc<ManualClock>, ValueAnimator) {
        let clock = Arc::new(ManualClock::new());
        let animator = ValueAnimator::new(clock.clone());
        (clock, animator)
    }

    mod formatting {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_format_price_groups_thousands() {
            assert_eq!(format_price(1234567.0), "1,234,567");
        }

        #[test]
        fn test_format_price_small_values() {
            assert_eq!(format_price(0.0), "0");
            assert_eq!(format_price(7.0), "7");
            assert_eq!(format_price(999.0), "999");
            assert_eq!(format_price(1000.0), "1,000");
        }

        #[test]
        fn test_format_price_rounds_to_nearest() {
            assert_eq!(format_price(13495.49), "13,495");
            assert_eq!(format_price(13495.5), "13,496");
            assert_eq!(format_price(999.7), "1,000");
        }

        #[test]
        fn test_format_price_negative_halves_round_up() {
            assert_eq!(format_price(-2.5), "-2");
            assert_eq!(format_price(-1234.6), "-1,235");
        }

        #[test]
        fn test_format_decimal_one_digit_and_suffix() {
            assert_eq!(format_decimal(93.26, "%"), "93.3%");
            assert_eq!(format_decimal(0.0, "%"), "0.0%");
            assert_eq!(format_decimal(12.0, ""), "12.0");
        }

        #[test]
        fn test_format_decimal_negative_zero() {
            assert_eq!(format_decimal(-0.0, "%"), "0.0%");
        }

        #[test]
        fn test_format_decimal_exact_ties_round_away_from_zero() {
            assert_eq!(format_decimal(87.25, "%"), "87.3%");
            assert_eq!(format_decimal(0.25, ""), "0.3");
            assert_eq!(format_decimal(-87.25, ""), "-87.3");
            assert_eq!(format_decimal(87.75, "%"), "87.8%");
        }

        #[test]
        fn test_format_decimal_near_ties_use_exact_value() {
            // 1.45 is stored just below the tie
            assert_eq!(format_decimal(1.45, ""), "1.4");
        }

        #[test]
        fn test_format_price_just_below_half() {
            assert_eq!(format_price(0.49999999999999994), "0");
            assert_eq!(format_price(-0.5), "0");
        }

        #[test]
        fn test_format_price_large_odd_integers_unchanged() {
            // 2^53 - 1 has no fractional part to round
            assert_eq!(format_price(9_007_199_254_740_991.0), "9,007,199,254,740,991");
        }

        #[test]
        fn test_value_format_ignores_suffix_for_currency() {
            assert_eq!(ValueFormat::Currency.render(15250.0), "15,250");
            assert_eq!(ValueFormat::Decimal { suffix: "%".to_string() }.render(87.5), "87.5%");
        }
    }

    mod easing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_endpoints() {
            assert_eq!(ease_out_quart(0.0), 0.0);
            assert_eq!(ease_out_quart(1.0), 1.0);
        }

        #[test]
        fn test_midpoint() {
            assert!((ease_out_quart(0.5) - 0.9375).abs() < 1e-6);
        }

        #[test]
        fn test_progress_clamps() {
            let d = Duration::from_millis(100);
            assert_eq!(progress(Duration::from_millis(50), d), 0.5);
            assert_eq!(progress(Duration::from_millis(500), d), 1.0);
        }

        #[test]
        fn test_zero_duration_is_complete() {
            assert_eq!(progress(Duration::ZERO, Duration::ZERO), 1.0);
        }
    }

    mod value_animator {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_first_frame_written_immediately() {
            let (_clock, mut animator) = animator();
            let mut board = ReadoutBoard::default();

            animator.animate(
                AnimationRequest::new(Readout::TestScore, 0.0, 90.0, Duration::from_millis(1500))
                    .with_suffix("%"),
                &mut board,
            );

            assert_eq!(board.text(Readout::TestScore), Some("0.0%"));
            assert!(animator.is_animating());
        }

        #[test]
        fn test_mid_frame_follows_easing() {
            let (clock, mut animator) = animator();
            let mut board = ReadoutBoard::default();

            animator.animate(
                AnimationRequest::new(Readout::TrainScore, 0.0, 200.0, Duration::from_millis(1000)),
                &mut board,
            );
            clock.advance(Duration::from_millis(500));
            animator.tick(&mut board);

            // 200 * 0.9375
            assert_eq!(board.text(Readout::TrainScore), Some("187.5"));
            assert!(animator.is_animating());
        }

        #[test]
        fn test_reaches_exact_end_value() {
            let (clock, mut animator) = animator();
            let mut board = ReadoutBoard::default();

            animator.animate(
                AnimationRequest::new(Readout::Price, 0.0, 16430.46, Duration::from_millis(1500))
                    .currency(),
                &mut board,
            );
            clock.advance(Duration::from_millis(700));
            animator.tick(&mut board);
            clock.advance(Duration::from_millis(900));
            animator.tick(&mut board);

            assert_eq!(board.text(Readout::Price), Some("16,430"));
            assert_eq!(board.value(Readout::Price), Some(16430.46));
            assert!(!animator.is_animating());
        }

        #[test]
        fn test_end_value_exact_at_duration_boundary() {
            let (clock, mut animator) = animator();
            let mut board = ReadoutBoard::default();

            animator.animate(
                AnimationRequest::new(Readout::AccuracyMeter, 0.0, 93.3, Duration::from_millis(2000))
                    .with_suffix("%"),
                &mut board,
            );
            clock.advance(Duration::from_millis(2000));
            animator.tick(&mut board);

            assert_eq!(board.text(Readout::AccuracyMeter), Some("93.3%"));
            assert!(!animator.is_animating());
        }

        #[test]
        fn test_descending_animation() {
            let (clock, mut animator) = animator();
            let mut board = ReadoutBoard::default();

            animator.animate(
                AnimationRequest::new(Readout::Confidence, 100.0, 0.0, Duration::from_millis(1000))
                    .with_suffix("%"),
                &mut board,
            );
            clock.advance(Duration::from_millis(500));
            animator.tick(&mut board);
            let mid = board.value(Readout::Confidence).unwrap();
            assert!(mid < 100.0 && mid > 0.0);

            clock.advance(Duration::from_millis(500));
            animator.tick(&mut board);
            assert_eq!(board.text(Readout::Confidence), Some("0.0%"));
        }

        #[test]
        fn test_equal_start_and_end_constant() {
            let (clock, mut animator) = animator();
            let mut board = ReadoutBoard::default();

            animator.animate(
                AnimationRequest::new(Readout::Price, 5000.0, 5000.0, Duration::from_millis(1000))
                    .currency(),
                &mut board,
            );
            assert_eq!(board.text(Readout::Price), Some("5,000"));

            for _ in 0..5 {
                clock.advance(Duration::from_millis(300));
                animator.tick(&mut board);
                assert_eq!(board.text(Readout::Price), Some("5,000"));
            }
        }

        #[test]
        fn test_zero_duration_snaps_to_end() {
            let (_clock, mut animator) = animator();
            let mut board = ReadoutBoard::default();

            animator.animate(
                AnimationRequest::new(Readout::Price, 0.0, 1234567.0, Duration::ZERO).currency(),
                &mut board,
            );

            assert_eq!(board.text(Readout::Price), Some("1,234,567"));
            assert!(!animator.is_animating());
        }

        #[test]
        fn test_new_animation_cancels_previous_on_same_target() {
            let (clock, mut animator) = animator();
            let mut board = ReadoutBoard::default();

            animator.animate(
                AnimationRequest::new(Readout::Price, 0.0, 10000.0, Duration::from_millis(1000))
                    .currency(),
                &mut board,
            );
            clock.advance(Duration::from_millis(500));
            animator.animate(
                AnimationRequest::new(Readout::Price, 0.0, 20000.0, Duration::from_millis(1000))
                    .currency(),
                &mut board,
            );

            // The first sequence would have finished here; only the second may write
            clock.advance(Duration::from_millis(600));
            animator.tick(&mut board);
            assert_ne!(board.text(Readout::Price), Some("10,000"));

            clock.advance(Duration::from_millis(400));
            animator.tick(&mut board);
            assert_eq!(board.text(Readout::Price), Some("20,000"));
        }

        #[test]
        fn test_independent_targets_interleave() {
            let (clock, mut animator) = animator();
            let mut board = ReadoutBoard::default();

            animator.animate(
                AnimationRequest::new(Readout::TrainScore, 0.0, 98.1, Duration::from_millis(1500))
                    .with_suffix("%"),
                &mut board,
            );
            animator.animate(
                AnimationRequest::new(Readout::AccuracyMeter, 0.0, 93.3, Duration::from_millis(2000))
                    .with_suffix("%"),
                &mut board,
            );

            clock.advance(Duration::from_millis(1500));
            animator.tick(&mut board);
            assert_eq!(board.text(Readout::TrainScore), Some("98.1%"));
            assert!(animator.is_animating_target(Readout::AccuracyMeter));
            assert!(!animator.is_animating_target(Readout::TrainScore));

            clock.advance(Duration::from_millis(500));
            animator.tick(&mut board);
            assert_eq!(board.text(Readout::AccuracyMeter), Some("93.3%"));
            assert!(!animator.is_animating());
        }

        #[test]
        fn test_cancel_keeps_last_frame() {
            let (clock, mut animator) = animator();
            let mut board = ReadoutBoard::default();

            animator.animate(
                AnimationRequest::new(Readout::TrainScore, 0.0, 200.0, Duration::from_millis(1000)),
                &mut board,
            );
            clock.advance(Duration::from_millis(500));
            animator.tick(&mut board);

            assert!(animator.cancel(Readout::TrainScore));
            clock.advance(Duration::from_millis(500));
            animator.tick(&mut board);

            assert_eq!(board.text(Readout::TrainScore), Some("187.5"));
            assert!(!animator.cancel(Readout::TrainScore));
        }
    }

    mod readout_board {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_set_text_has_no_value() {
            let mut board = ReadoutBoard::default();
            board.set_text(Readout::TestScore, "N/A");
            assert_eq!(board.text(Readout::TestScore), Some("N/A"));
            assert_eq!(board.value(Readout::TestScore), None);
        }

        #[test]
        fn test_clear_removes_readout() {
            let mut board = ReadoutBoard::default();
            board.set(Readout::Price, "1,000".to_string(), Some(1000.0));
            board.clear(Readout::Price);
            assert_eq!(board.text(Readout::Price), None);
        }
    }
}
