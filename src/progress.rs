// src/progress.rs
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

const BAR_TEMPLATE: &str = "{wide_bar} {pos}/{len} [{elapsed}]";

/// Receives progress notifications from a batch run.
///
/// Implementations only observe; nothing they do feeds back into the run.
pub trait ProgressReporter: Send + Sync {
    fn prefetch_started(&self) {}

    fn started(&self, total: usize);

    fn advanced(&self, completed: usize, total: usize);

    fn finished(&self);
}

/// Reporter that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn started(&self, _total: usize) {}

    fn advanced(&self, _completed: usize, _total: usize) {}

    fn finished(&self) {}
}

/// Terminal progress bar drawn on stderr and cleared when the run ends.
pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    pub fn new(visible: bool) -> Self {
        let bar = ProgressBar::new(0);
        if visible {
            bar.set_draw_target(ProgressDrawTarget::stderr());
        } else {
            bar.set_draw_target(ProgressDrawTarget::hidden());
        }
        Self { bar }
    }
}

impl ProgressReporter for BarProgress {
    fn prefetch_started(&self) {
        self.bar.set_style(ProgressStyle::default_spinner());
        self.bar.set_message("Caching tokens...");
        self.bar.enable_steady_tick(Duration::from_millis(100));
    }

    fn started(&self, total: usize) {
        self.bar.disable_steady_tick();
        self.bar.set_message("");
        let style = ProgressStyle::with_template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        self.bar.set_style(style);
        self.bar.set_length(total as u64);
        self.bar.set_position(0);
    }

    fn advanced(&self, completed: usize, _total: usize) {
        self.bar.set_position(completed as u64);
    }

    fn finished(&self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_bar_tracks_position() {
        let progress = BarProgress::new(false);
        progress.prefetch_started();
        progress.started(6);
        progress.advanced(4, 6);
        assert_eq!(progress.bar.position(), 4);
        assert_eq!(progress.bar.length(), Some(6));
        progress.finished();
        assert!(progress.bar.is_finished());
    }
}
