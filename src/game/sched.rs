use std::time::{Duration, Instant};

/// Session callbacks that can be scheduled for later dispatch. Stale entries
/// are not cancelled; their handlers re-check session flags before acting.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Callback {
    SetupStep,
    ClockTick,
    ClearRestartGuard,
}

/// Fire-once delayed-callback queue. Entries fire in deadline order;
/// equal deadlines fire in the order they were scheduled.
pub struct TimerQueue {
    entries: Vec<(Instant, u64, Callback)>,
    next_seq: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }

    pub fn push_after(&mut self, now: Instant, delay: Duration, callback: Callback) {
        self.entries.push((now + delay, self.next_seq, callback));
        self.next_seq += 1;
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|&(at, _, _)| at).min()
    }

    /// Remove and return the earliest entry due at `now`, if any.
    pub fn pop_due(&mut self, now: Instant) -> Option<Callback> {
        let mut best: Option<usize> = None;
        for (idx, &(at, seq, _)) in self.entries.iter().enumerate() {
            if at > now {
                continue;
            }
            let earlier = match best {
                Some(b) => {
                    let (b_at, b_seq, _) = self.entries[b];
                    (at, seq) < (b_at, b_seq)
                }
                None => true,
            };
            if earlier {
                best = Some(idx);
            }
        }
        best.map(|idx| self.entries.swap_remove(idx).2)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
