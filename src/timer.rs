//! Progress/time-display engine for the focus timer.
//!
//! Deterministic conversion of elapsed/target seconds into display data,
//! decoupled from the animation and rendering layer that visualizes it. All
//! functions are pure and total over non-negative integers, hold no state,
//! and are safe to call from any scheduling context.

/// Fraction of the focus target covered by the elapsed time, clamped to
/// `[0, 1]`. A zero-minute target counts as already complete.
///
pub fn progress_ratio(elapsed_seconds: u64, target_minutes: u32) -> f64 {
    let target_seconds = u64::from(target_minutes) * 60;
    if target_seconds == 0 || elapsed_seconds >= target_seconds {
        return 1.0;
    }
    elapsed_seconds as f64 / target_seconds as f64
}

/// Format a second count as `MM:SS`, both zero-padded to two digits. The
/// minute field keeps counting past 59 rather than rolling into hours.
///
pub fn clock_text(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Format a second count as `"<H>h <M>m"` once at least one whole hour has
/// accumulated, else `"<M>m"`.
///
pub fn duration_text(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Display data for one timer tick. Derived and stateless; recomputed on
/// every tick with no persisted identity.
///
#[derive(Clone, Debug, PartialEq)]
pub struct TimerDisplay {
    pub progress_ratio: f64,
    pub clock_text: String,
    pub duration_text: String,
}

impl TimerDisplay {
    /// Recompute the full display for one tick. While running the clock
    /// shows the elapsed count; while stopped it shows the full configured
    /// duration. The ratio and the duration label are unaffected by the
    /// flag.
    ///
    pub fn compute(elapsed_seconds: u64, target_minutes: u32, running: bool) -> TimerDisplay {
        let target_seconds = u64::from(target_minutes) * 60;
        let clock_seconds = if running { elapsed_seconds } else { target_seconds };
        TimerDisplay {
            progress_ratio: progress_ratio(elapsed_seconds, target_minutes),
            clock_text: clock_text(clock_seconds),
            duration_text: duration_text(target_seconds),
        }
    }
}
