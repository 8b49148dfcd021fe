//! Bookkeeping for the debounced address-autocomplete fetch.
//!
//! The timing side (a cancellable 300 ms timer) lives in the frontend
//! component; this reducer owns everything that must hold regardless of
//! timing: queries of three characters or more are the only ones fetched,
//! scheduling a fetch supersedes any earlier scheduled one, and a response is
//! applied only if it belongs to the most recently scheduled fetch.

/// Quiet window between the last keystroke and the suggestion fetch.
pub const DEBOUNCE_MS: u32 = 300;

// Inputs of up to this many characters never trigger a fetch.
const MAX_SILENT_LEN: usize = 2;

/// What the input control should do after a keystroke.
#[derive(Debug, Clone, PartialEq)]
pub enum Plan {
    /// Drop any pending scheduled fetch and clear the suggestion list.
    Clear,
    /// (Re)schedule a debounced fetch for `query`, tagged with `seq`.
    /// Replaces any fetch scheduled earlier.
    Schedule { query: String, seq: u64 },
}

/// Sequence tracker for one autocomplete instance. Every scheduled fetch gets
/// a fresh sequence number; only the latest number is ever accepted, so a
/// superseded request's late response is discarded instead of overwriting
/// newer suggestions.
#[derive(Debug, Default)]
pub struct SuggestionFlow {
    seq: u64,
}

impl SuggestionFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keystroke with the input's new value.
    pub fn on_input(&mut self, value: &str) -> Plan {
        self.seq += 1;
        if value.chars().count() <= MAX_SILENT_LEN {
            Plan::Clear
        } else {
            Plan::Schedule {
                query: value.to_owned(),
                seq: self.seq,
            }
        }
    }

    /// Whether a fetch tagged `seq` is still the current one. Checked both
    /// when the debounce timer fires and when the response arrives.
    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.seq
    }

    /// A suggestion was picked; anything still in flight is now stale.
    pub fn select(&mut self) {
        self.seq += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_inputs_never_schedule_a_fetch() {
        let mut flow = SuggestionFlow::new();

        assert_eq!(flow.on_input(""), Plan::Clear);
        assert_eq!(flow.on_input("a"), Plan::Clear);
        assert_eq!(flow.on_input("ab"), Plan::Clear);
    }

    #[test]
    fn third_character_schedules_with_full_value() {
        let mut flow = SuggestionFlow::new();

        let plan = flow.on_input("aar");
        let Plan::Schedule { query, .. } = plan else {
            panic!("expected a scheduled fetch");
        };
        assert_eq!(query, "aar");
    }

    #[test]
    fn rapid_keystrokes_leave_only_the_last_schedule_current() {
        let mut flow = SuggestionFlow::new();

        let Plan::Schedule { seq: first, .. } = flow.on_input("aar") else {
            panic!()
        };
        let Plan::Schedule { seq: second, .. } = flow.on_input("aarh") else {
            panic!()
        };
        let Plan::Schedule { seq: last, query } = flow.on_input("aarhus") else {
            panic!()
        };

        assert_eq!(query, "aarhus");
        assert!(!flow.is_current(first));
        assert!(!flow.is_current(second));
        assert!(flow.is_current(last));
    }

    #[test]
    fn stale_response_is_discarded_after_a_newer_schedule() {
        let mut flow = SuggestionFlow::new();

        let Plan::Schedule { seq: stale, .. } = flow.on_input("ham") else {
            panic!()
        };
        let Plan::Schedule { seq: fresh, .. } = flow.on_input("hamburg") else {
            panic!()
        };

        // The older fetch's response arrives after the newer one was applied.
        assert!(flow.is_current(fresh));
        assert!(!flow.is_current(stale));
    }

    #[test]
    fn clearing_the_input_invalidates_in_flight_fetches() {
        let mut flow = SuggestionFlow::new();

        let Plan::Schedule { seq, .. } = flow.on_input("ham") else {
            panic!()
        };
        assert_eq!(flow.on_input("ha"), Plan::Clear);

        assert!(!flow.is_current(seq));
    }

    #[test]
    fn selection_invalidates_in_flight_fetches() {
        let mut flow = SuggestionFlow::new();

        let Plan::Schedule { seq, .. } = flow.on_input("hamburg") else {
            panic!()
        };
        flow.select();

        assert!(!flow.is_current(seq));
    }
}
