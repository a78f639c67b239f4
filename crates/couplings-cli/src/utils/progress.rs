use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const SPINNER_TICK_MS: u64 = 80;

/// A stderr spinner shown while a dataset file is being read.
pub struct LoadSpinner {
    pb: ProgressBar,
}

impl LoadSpinner {
    pub fn start(message: impl Into<String>) -> Self {
        let pb = ProgressBar::new_spinner()
            .with_style(Self::spinner_style())
            .with_message(message.into());
        pb.set_draw_target(indicatif::ProgressDrawTarget::stderr());
        pb.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        Self { pb }
    }

    pub fn finish(self, message: impl Into<String>) {
        self.pb.disable_steady_tick();
        self.pb.finish_with_message(message.into());
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .expect("Failed to create spinner style template")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_lifecycle_does_not_panic() {
        let spinner = LoadSpinner::start("Loading...");
        spinner.finish("✓ Done");
    }
}
