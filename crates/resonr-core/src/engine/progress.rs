#[derive(Debug, Clone)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    RangeStart { lower_ev: f64, upper_ev: f64 },
    RangeFinish { points: usize },

    /// Cumulative point-count milestone; resonance regions can require tens
    /// of thousands of points, so the workflow reports these periodically.
    PointMilestone { points: usize },

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
    fn reporter_without_callback_is_silent() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::PhaseFinish);
    }

    #[test]
    fn reporter_delivers_events_to_the_callback() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(format!("{event:?}"));
        }));

        reporter.report(Progress::PhaseStart {
            name: "Reconstruction",
        });
        reporter.report(Progress::PointMilestone { points: 10_000 });

        let seen = events.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].contains("Reconstruction"));
        assert!(seen[1].contains("10000"));
    }
}
