//! Trial statistics for repeated protocol runs

use densecode_core::BitPair;
use std::fmt;
use std::time::Duration;

/// Decoded outcomes tallied per sent bit pair
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrialStatistics {
    /// `counts[sent][received]`, both indexed by basis order
    counts: [[usize; 4]; 4],

    /// Wall-clock time spent running the trials
    pub elapsed: Duration,
}

impl TrialStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one run
    pub fn record(&mut self, sent: BitPair, received: BitPair) {
        self.counts[sent.index()][received.index()] += 1;
    }

    /// Number of runs that sent `sent` and decoded `received`
    pub fn count(&self, sent: BitPair, received: BitPair) -> usize {
        self.counts[sent.index()][received.index()]
    }

    /// Decoded outcome counts for one sent pair, in basis order
    pub fn received_counts(&self, sent: BitPair) -> [usize; 4] {
        self.counts[sent.index()]
    }

    /// Runs recorded for one sent pair
    pub fn runs_for(&self, sent: BitPair) -> usize {
        self.counts[sent.index()].iter().sum()
    }

    pub fn total_runs(&self) -> usize {
        self.counts.iter().flatten().sum()
    }

    pub fn successes(&self) -> usize {
        (0..4).map(|i| self.counts[i][i]).sum()
    }

    pub fn failures(&self) -> usize {
        self.total_runs() - self.successes()
    }

    /// Fraction of runs that decoded the sent bits (1.0 when nothing ran)
    pub fn success_rate(&self) -> f64 {
        let total = self.total_runs();
        if total == 0 {
            1.0
        } else {
            self.successes() as f64 / total as f64
        }
    }

    /// Runs per second
    pub fn runs_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.total_runs() as f64 / secs
        } else {
            0.0
        }
    }
}

impl fmt::Display for TrialStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "sent |   00    01    10    11 | success")?;
        for sent in BitPair::ALL {
            let row = self.received_counts(sent);
            let runs = self.runs_for(sent);
            let rate = if runs == 0 {
                1.0
            } else {
                self.count(sent, sent) as f64 / runs as f64
            };
            writeln!(
                f,
                "  {} | {:>5} {:>5} {:>5} {:>5} | {:>6.2}%",
                sent,
                row[0],
                row[1],
                row[2],
                row[3],
                rate * 100.0
            )?;
        }
        write!(
            f,
            "total {} runs, {} failures, success rate {:.2}%",
            self.total_runs(),
            self.failures(),
            self.success_rate() * 100.0
        )
    }
}
