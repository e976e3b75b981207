use crate::codeforces::model::{Contest, Problem};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const MIN_RATING: i32 = 1200;

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct RequiredProblem {
    pub contest: Contest,
    pub problem: Problem,
    pub url: String,
}

pub fn problem_url(contest_id: i64, index: &str) -> String {
    format!(
        "https://codeforces.com/contest/{}/problem/{}",
        contest_id, index
    )
}

/// Joins problems to their contests and keeps the ones worth practicing.
///
/// A problem is kept when its contest is present, its index is in the
/// division's whitelist and its rating is at least [`MIN_RATING`]. The order of
/// `problems` is preserved.
pub fn select_required_problems(contests: &[Contest], problems: &[Problem]) -> Vec<RequiredProblem> {
    let contests: HashMap<i64, &Contest> = contests
        .iter()
        .map(|contest| (contest.id, contest))
        .collect();

    problems
        .iter()
        .filter_map(|problem| {
            let contest = problem
                .contest_id
                .and_then(|contest_id| contests.get(&contest_id))?;

            let whitelisted = contest
                .division
                .index_whitelist()
                .contains(&problem.index.as_str());
            let rated = problem.rating.map_or(false, |rating| rating >= MIN_RATING);

            if whitelisted && rated {
                Some(RequiredProblem {
                    contest: (*contest).clone(),
                    problem: problem.clone(),
                    url: problem_url(contest.id, &problem.index),
                })
            } else {
                None
            }
        })
        .collect()
}
