//! Candidate window ranking.
//!
//! Candidates are ordered by score descending; ties go to the earlier start
//! time, so the soonest opportunity of equal quality wins. The list is then
//! truncated to the per-task cap.

use crate::models::CandidateWindow;

/// Rank candidates and keep the top `cap`.
pub fn rank_candidates(mut candidates: Vec<CandidateWindow>, cap: usize) -> Vec<CandidateWindow> {
    candidates.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then(a.period.start.cmp(&b.period.start))
    });
    candidates.truncate(cap);
    candidates
}
