// src/gui/progress.rs
use crate::progress::Progress;

/// Mirrors fetch progress into the status line.
pub struct GuiProgress<'a> {
    status: &'a mut String,
    done: usize,
    total: usize,
}

impl<'a> GuiProgress<'a> {
    pub fn new(status: &'a mut String) -> Self {
        Self { status, done: 0, total: 0 }
    }
    fn set_status(&mut self, msg: impl Into<String>) {
        *self.status = msg.into();
    }
}

impl Progress for GuiProgress<'_> {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, resource: &str) {
        self.done += 1;
        let line = format!("Fetched {} ({}/{})", resource, self.done, self.total);
        self.set_status(line);
    }
    fn finish(&mut self) {
        if self.done < self.total {
            let line = format!("Fetch stopped ({}/{})", self.done, self.total);
            self.set_status(line);
        } else {
            let line = format!("Fetch complete ({}/{})", self.done, self.total);
            self.set_status(line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_into_status_line() {
        let mut status = s!("Idle");
        {
            let mut p = GuiProgress::new(&mut status);
            p.begin(2);
            p.item_done("roster");
            assert_eq!(*p.status, "Fetched roster (1/2)");
            p.finish();
        }
        assert_eq!(status, "Fetch stopped (1/2)");
    }
}
