use alloc::boxed::Box;
use alloc::vec::Vec;
use std::panic::{UnwindSafe, catch_unwind, resume_unwind};

/// Guard object which collects multiple panics, then panics when it is dropped if any
/// occurred.
///
/// This allows a `#[test]` that sweeps many parameter combinations to report every failing
/// combination instead of only the first.
#[derive(Debug, Default)]
pub struct MultiFailure {
    panics: Vec<Box<dyn core::any::Any + Send>>,
}

impl MultiFailure {
    /// Constructs an empty [`MultiFailure`].
    #[inline(never)]
    #[must_use = "this is useless if never invoked to collect failures"]
    pub fn new() -> Self {
        Self::default()
    }

    /// Call `f`, and if it unwinds, count that as a failure and defer it
    /// until this [`MultiFailure`] is dropped.
    #[inline(never)]
    pub fn catch<O, F>(&mut self, f: F) -> Option<O>
    where
        F: FnOnce() -> O + UnwindSafe,
    {
        // The panic hook has already printed the report by the time we get the payload.
        catch_unwind(f)
            .map_err(|payload| self.panics.push(payload))
            .ok()
    }

    /// Number of failures collected so far.
    #[inline]
    pub fn count(&self) -> usize {
        self.panics.len()
    }
}

impl Drop for MultiFailure {
    #[inline(never)]
    fn drop(&mut self) {
        if std::thread::panicking() || self.panics.is_empty() {
            return;
        }

        let count = self.panics.len();
        let summary_message = alloc::format!(
            "{count} panic{s_were} found",
            s_were = if count == 1 { " was" } else { "s were" }
        );
        std::eprintln!("\n{summary_message}");
        // `resume_unwind()` skips the panic hook, so the summary is not reported twice.
        resume_unwind(Box::new(summary_message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_success() {
        let mut f = MultiFailure::new();
        assert_eq!(f.catch(|| 5), Some(5));
        assert_eq!(f.count(), 0);
    }

    #[test]
    #[should_panic = "2 panics were found"]
    fn expected_failure() {
        let mut f = MultiFailure::new();
        for i in 0..2 {
            f.catch(|| {
                panic!("test panic {i}");
            });
        }
    }
}
