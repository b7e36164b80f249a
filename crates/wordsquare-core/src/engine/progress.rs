/// Advisory events emitted by the coordinator while a search runs.
///
/// Nothing in the engine depends on these being observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    SearchStart { total_words: u64 },
    /// The set of starting words being explored changed. The two words bound that set and
    /// are reported after every assignment and after every completion that leaves work in
    /// flight.
    ActiveWords {
        oldest_active: String,
        newest_active: String,
    },
    WordFinished { searched: u64 },
    BoardFound { found: u64 },
    SearchFinish { searched: u64, found: u64 },

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.callback.is_some()
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn reporter_without_callback_ignores_events() {
        let reporter = ProgressReporter::new();
        assert!(!reporter.is_enabled());
        reporter.report(Progress::BoardFound { found: 1 });
    }

    #[test]
    fn reporter_forwards_events_to_callback() {
        let seen = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            seen.lock().unwrap().push(event);
        }));

        reporter.report(Progress::SearchStart { total_words: 3 });
        reporter.report(Progress::WordFinished { searched: 1 });
        drop(reporter);

        assert_eq!(
            seen.into_inner().unwrap(),
            vec![
                Progress::SearchStart { total_words: 3 },
                Progress::WordFinished { searched: 1 },
            ]
        );
    }
}
