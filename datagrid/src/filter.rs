//! Live per-column text filtering with a debounced recompute.
//!
//! The engine is synchronous and time-injected: input events overwrite a
//! single pending deadline, and the host's next `poll` past that deadline
//! runs the recompute. Only the last keystroke inside the debounce window
//! can fire.

use std::time::Duration;
use std::time::Instant;

/// Visibility state for one table instance.
#[derive(Debug, Clone)]
pub struct FilterEngine {
    /// One query per processed column.
    queries: Vec<String>,
    /// Indices of processed rows currently visible, ascending.
    visible: Vec<usize>,
    /// Pending recompute deadline; `None` means idle.
    deadline: Option<Instant>,
    debounce: Duration,
}

impl FilterEngine {
    /// All rows visible, no queries, idle.
    pub fn new(columns: usize, rows: usize, debounce: Duration) -> Self {
        Self {
            queries: vec![String::new(); columns],
            visible: (0..rows).collect(),
            deadline: None,
            debounce,
        }
    }

    /// Discard all filter state for a rebuilt dataset.
    pub fn reset(&mut self, columns: usize, rows: usize) {
        self.queries = vec![String::new(); columns];
        self.visible = (0..rows).collect();
        self.deadline = None;
    }

    /// Current query for a column.
    pub fn query(&self, col: usize) -> &str {
        self.queries.get(col).map(String::as_str).unwrap_or("")
    }

    /// Record a keystroke in a column's filter input and (re)arm the
    /// debounce deadline. Out-of-range columns are ignored.
    pub fn input(&mut self, col: usize, text: String, now: Instant) {
        let Some(query) = self.queries.get_mut(col) else {
            return;
        };
        *query = text;
        self.deadline = Some(now + self.debounce);
    }

    /// Whether a recompute is scheduled.
    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fire the pending recompute if its deadline has passed.
    ///
    /// `texts` is the rendered filter text per processed cell. Returns
    /// `true` when a recompute ran.
    pub fn poll(&mut self, now: Instant, texts: &[Vec<String>]) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.recompute(texts);
                true
            }
            _ => false,
        }
    }

    /// Recompute visibility immediately, dropping any pending deadline.
    ///
    /// A row is visible iff every column with non-empty trimmed filter text
    /// contains that text, case-insensitively, in the rendered cell text.
    pub fn recompute(&mut self, texts: &[Vec<String>]) {
        self.deadline = None;

        let active: Vec<(usize, String)> = self
            .queries
            .iter()
            .enumerate()
            .filter(|(_, q)| !q.trim().is_empty())
            .map(|(col, q)| (col, q.trim().to_lowercase()))
            .collect();

        if active.is_empty() {
            self.visible = (0..texts.len()).collect();
            return;
        }

        self.visible = (0..texts.len())
            .filter(|&row| {
                active.iter().all(|(col, query)| {
                    texts[row]
                        .get(*col)
                        .is_some_and(|text| text.to_lowercase().contains(query))
                })
            })
            .collect();
    }

    /// Visible row indices, ascending.
    pub fn visible(&self) -> &[usize] {
        &self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts() -> Vec<Vec<String>> {
        vec![
            vec!["Alice".into(), "Yes".into()],
            vec!["Bob".into(), "No".into()],
            vec!["Carol".into(), "Yes".into()],
        ]
    }

    fn engine() -> FilterEngine {
        FilterEngine::new(2, 3, Duration::from_millis(300))
    }

    #[test]
    fn no_queries_means_all_visible() {
        let mut engine = engine();
        engine.recompute(&texts());
        assert_eq!(engine.visible(), &[0, 1, 2]);
    }

    #[test]
    fn match_is_case_insensitive_substring() {
        let mut engine = engine();
        let t0 = Instant::now();
        engine.input(1, "no".into(), t0);
        engine.recompute(&texts());
        assert_eq!(engine.visible(), &[1]);
    }

    #[test]
    fn filters_and_across_columns() {
        let mut engine = engine();
        let t0 = Instant::now();
        engine.input(0, "o".into(), t0); // Bob, Carol
        engine.input(1, "yes".into(), t0); // Alice, Carol
        engine.recompute(&texts());
        assert_eq!(engine.visible(), &[2]);
    }

    #[test]
    fn whitespace_only_query_is_inactive() {
        let mut engine = engine();
        engine.input(0, "   ".into(), Instant::now());
        engine.recompute(&texts());
        assert_eq!(engine.visible(), &[0, 1, 2]);
    }

    #[test]
    fn clearing_queries_restores_visibility() {
        let mut engine = engine();
        let t0 = Instant::now();
        engine.input(0, "alice".into(), t0);
        engine.recompute(&texts());
        assert_eq!(engine.visible(), &[0]);

        engine.input(0, String::new(), t0);
        engine.recompute(&texts());
        assert_eq!(engine.visible(), &[0, 1, 2]);
    }

    #[test]
    fn poll_waits_for_the_deadline() {
        let mut engine = engine();
        let t0 = Instant::now();
        engine.input(0, "bob".into(), t0);

        assert!(!engine.poll(t0 + Duration::from_millis(100), &texts()));
        assert_eq!(engine.visible(), &[0, 1, 2]);

        assert!(engine.poll(t0 + Duration::from_millis(300), &texts()));
        assert_eq!(engine.visible(), &[1]);
        assert!(!engine.pending());
    }

    #[test]
    fn later_input_resets_the_deadline() {
        let mut engine = engine();
        let t0 = Instant::now();
        engine.input(0, "b".into(), t0);
        engine.input(0, "bo".into(), t0 + Duration::from_millis(200));

        // First deadline has passed, but the second keystroke replaced it
        assert!(!engine.poll(t0 + Duration::from_millis(350), &texts()));
        assert!(engine.poll(t0 + Duration::from_millis(500), &texts()));
        assert_eq!(engine.visible(), &[1]);
    }
}
