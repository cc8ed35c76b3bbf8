use std::time::Instant;

use cliclack::ProgressBar;

/// Spinner shown while a long operation (a transaction, a compilation) runs.
pub struct Spinner {
    msg: String,
    pb: ProgressBar,
    time: Instant,
}

impl Spinner {
    pub fn new(msg: &str) -> Self {
        let mut pb = cliclack::spinner();
        pb.start(msg);
        Spinner {
            msg: msg.to_owned(),
            pb,
            time: Instant::now(),
        }
    }

    pub fn finish(mut self) {
        self.pb.stop(format!(
            "{} done in {} secs",
            self.msg,
            self.time.elapsed().as_secs_f64()
        ));
    }

    pub fn fail(mut self) {
        self.pb.error(format!(
            "{} failed in {} secs",
            self.msg,
            self.time.elapsed().as_secs_f64()
        ));
    }
}
