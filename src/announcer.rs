//! The counting announcer.
//!
//! One routine walks every candidate below its answer in ascending order,
//! rules each one out on its own output line, then closes with a verdict
//! line naming the answer. The run is fully deterministic: the same answer
//! produces the same lines in the same order on every invocation.

use std::io::Write;
use std::iter;

use log::debug;

use crate::error::Result;

// ANCHOR: define_answer
/// The answer. Bounds the counting loop and closes the announcement.
pub const ANSWER: u64 = 42;
// ANCHOR_END: define_answer

/// Announces an answer by first ruling out everything below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Announcer {
    answer: u64,
}

impl Announcer {
    /// Creates an announcer for `answer`.
    ///
    /// Zero is a valid answer and produces the verdict line only.
    pub fn new(answer: u64) -> Self {
        Announcer { answer }
    }

    /// The answer this announcer was built with.
    pub fn answer(&self) -> u64 {
        self.answer
    }

    /// The candidates to rule out: the half-open range below the answer,
    /// in strictly increasing order.
    pub fn candidates(&self) -> impl Iterator<Item = u64> {
        0..self.answer
    }

    /// Every output line in order, produced lazily: one per candidate,
    /// then the verdict.
    pub fn lines(&self) -> impl Iterator<Item = String> {
        let answer = self.answer;
        self.candidates()
            .map(|candidate| format!("{} is not the answer", candidate))
            .chain(iter::once_with(move || format!("it's {}", answer)))
    }

    /// Writes the full announcement to `out`, one line per candidate plus
    /// the verdict line.
    pub fn announce<W: Write>(&self, out: &mut W) -> Result<()> {
        debug!("ruling out {} candidates", self.answer);
        // ANCHOR: print_till_answer
        for candidate in self.candidates() {
            writeln!(out, "{} is not the answer", candidate)?;
        }
        // ANCHOR_END: print_till_answer
        // ANCHOR: print_answer
        writeln!(out, "it's {}", self.answer)?;
        // ANCHOR_END: print_answer
        debug!("announced {}", self.answer);
        Ok(())
    }
}

impl Default for Announcer {
    fn default() -> Self {
        Announcer::new(ANSWER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_stay_below_the_answer() {
        let announcer = Announcer::new(7);
        assert_eq!(announcer.candidates().count(), 7);
        assert!(announcer.candidates().all(|candidate| candidate < 7));
    }

    #[test]
    fn candidates_ascend_without_gaps() {
        let collected: Vec<u64> = Announcer::new(5).candidates().collect();
        assert_eq!(collected, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn lines_end_with_the_verdict() {
        let lines: Vec<String> = Announcer::new(2).lines().collect();
        assert_eq!(
            lines,
            vec![
                "0 is not the answer".to_string(),
                "1 is not the answer".to_string(),
                "it's 2".to_string(),
            ]
        );
    }

    #[test]
    fn zero_answer_produces_only_the_verdict() {
        let lines: Vec<String> = Announcer::new(0).lines().collect();
        assert_eq!(lines, vec!["it's 0".to_string()]);
    }

    #[test]
    fn default_announcer_uses_the_answer() {
        assert_eq!(Announcer::default().answer(), ANSWER);
    }
}
