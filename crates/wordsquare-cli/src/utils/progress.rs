use indicatif::{ProgressBar, ProgressDrawTarget, ProgressState, ProgressStyle};
use std::time::Duration;
use wordsquare::engine::progress::{Progress, ProgressCallback};

const SPINNER_TICK_MS: u64 = 80;
const DRAW_RATE_HZ: u8 = 12;

/// Renders search progress as a bar of starting words searched, on stderr.
///
/// Cloning yields another handle to the same bar.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: ProgressBar,
}

impl CliProgressHandler {
    /// Creates the handler. With `visible` unset, or when stderr is not a terminal, nothing
    /// is drawn but the bar still tracks state.
    pub fn new(visible: bool) -> Self {
        let target = if visible {
            ProgressDrawTarget::stderr_with_hz(DRAW_RATE_HZ)
        } else {
            ProgressDrawTarget::hidden()
        };
        let pb = ProgressBar::with_draw_target(Some(0), target)
            .with_style(Self::bar_style())
            .with_prefix("0")
            .with_message("Initializing...");

        Self { pb }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb = self.pb.clone();

        Box::new(move |progress: Progress| match progress {
            Progress::SearchStart { total_words } => {
                pb.set_length(total_words);
                pb.set_position(0);
                pb.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
            }
            Progress::ActiveWords {
                oldest_active,
                newest_active,
            } => {
                pb.set_message(format!("{}... - {}...", oldest_active, newest_active));
            }
            Progress::WordFinished { searched } => {
                pb.set_position(searched);
            }
            Progress::BoardFound { found } => {
                pb.set_prefix(found.to_string());
            }
            Progress::SearchFinish { searched, found } => {
                pb.set_position(searched);
                pb.set_prefix(found.to_string());
                pb.disable_steady_tick();
                pb.finish_and_clear();
            }
            Progress::Message(msg) => {
                pb.println(format!("  {}", msg));
            }
        })
    }

    /// Runs `f` with the bar hidden, redrawing it afterwards.
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.pb.suspend(f)
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template(
            "{spinner:.green} Searching {msg} [{bar:30.cyan/blue}] {pos}/{len} ({percent_2dp}%, {prefix} found) ({eta})",
        )
        .expect("Failed to create bar style template")
        .with_key(
            "percent_2dp",
            |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                let _ = write!(w, "{:.2}", state.fraction() * 100.0);
            },
        )
        .with_key(
            "eta",
            |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                let _ = write!(w, "{:.1}s", state.eta().as_secs_f64());
            },
        )
        .progress_chars("##-")
    }
}
