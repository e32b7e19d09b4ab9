/// Sink for user-facing diagnostics, handed to every pipeline stage.
///
/// `had_error` latches on the first `error` and stays set until `reset`.
pub(crate) trait Reporter {
    fn error(&mut self, message: &str);
    fn warning(&mut self, message: &str);
    fn info(&mut self, message: &str);
    fn had_error(&self) -> bool;
    fn reset(&mut self);
}

#[derive(Debug, Default)]
pub(crate) struct ConsoleReporter {
    had_error: bool,
}

impl Reporter for ConsoleReporter {
    fn error(&mut self, message: &str) {
        eprintln!("Error: {message}");
        self.had_error = true;
    }

    fn warning(&mut self, message: &str) {
        eprintln!("Warning: {message}");
    }

    fn info(&mut self, message: &str) {
        println!("Info: {message}");
    }

    fn had_error(&self) -> bool {
        self.had_error
    }

    fn reset(&mut self) {
        self.had_error = false;
    }
}

/// Records every message instead of printing it.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
    had_error: bool,
}

#[cfg(test)]
impl Reporter for Recorder {
    fn error(&mut self, message: &str) {
        self.errors.push(message.to_string());
        self.had_error = true;
    }

    fn warning(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }

    fn info(&mut self, message: &str) {
        self.infos.push(message.to_string());
    }

    fn had_error(&self) -> bool {
        self.had_error
    }

    fn reset(&mut self) {
        self.had_error = false;
    }
}

#[cfg(test)]
mod test {
    use super::{ConsoleReporter, Recorder, Reporter};

    #[test]
    fn error_flag_latches_until_reset() {
        let mut reporter = ConsoleReporter::default();
        assert!(!reporter.had_error());

        reporter.warning("just a warning");
        reporter.info("just some info");
        assert!(!reporter.had_error());

        reporter.error("first");
        reporter.info("more info");
        assert!(reporter.had_error());

        reporter.reset();
        assert!(!reporter.had_error());
    }

    #[test]
    fn recorder_keeps_messages_across_reset() {
        let mut reporter = Recorder::default();
        reporter.error("boom");
        reporter.reset();
        reporter.warning("careful");

        assert!(!reporter.had_error());
        assert_eq!(reporter.errors, vec!["boom".to_string()]);
        assert_eq!(reporter.warnings, vec!["careful".to_string()]);
    }
}
