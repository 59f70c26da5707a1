//! Where rejected moves get explained to the player

use tracing::warn;

pub trait Reporter {
    fn report(&mut self, message: &str);
}

/// Sends every explanation to the log at `warn` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&mut self, message: &str) {
        warn!(target: "lilypad::report", "{message}");
    }
}

/// Collects messages, handy for tests and batch replays.
impl Reporter for Vec<String> {
    fn report(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, message: &str) {
        (**self).report(message);
    }
}
