use codeforces_practice_libs::{
    codeforces::client::Result, contest::ContestFetcher, problem::ProblemFetcher,
    select_required_problems, CodeforcesApi, RequiredProblem,
};

/// Runs both fetchers concurrently and selects the required problems.
///
/// Fails if either fetch fails; the selection is never run on partial data.
pub async fn collect_required_problems<A>(api: &A, recent_size: usize) -> Result<Vec<RequiredProblem>>
where
    A: CodeforcesApi + Sync,
{
    let contest_fetcher = ContestFetcher::new(api, recent_size);
    let problem_fetcher = ProblemFetcher::new(api);

    let (contests, problems) = tokio::join!(
        contest_fetcher.crawl(),
        problem_fetcher.fetch_problem_list()
    );
    let (contests, problems) = (contests?, problems?);

    let selected = select_required_problems(&contests, &problems);
    tracing::info!(
        "{} problems selected from {} contests and {} problems.",
        selected.len(),
        contests.len(),
        problems.len()
    );

    Ok(selected)
}
