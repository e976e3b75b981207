use crate::codeforces::{
    client::{CodeforcesApi, Result},
    model::Problem,
};

pub struct ProblemFetcher<'a, A: CodeforcesApi> {
    api: &'a A,
}

impl<'a, A: CodeforcesApi + Sync> ProblemFetcher<'a, A> {
    pub fn new(api: &'a A) -> Self {
        ProblemFetcher { api }
    }

    /// Codeforces APIから問題情報の一覧を取得するメソッド
    ///
    /// ここではフィルタリングを行わない
    pub async fn fetch_problem_list(&self) -> Result<Vec<Problem>> {
        tracing::info!("Attempting to get problem list from Codeforces...");
        let problems = self.api.problemset_problems().await?;

        tracing::info!("{} problems collected.", problems.len());

        Ok(problems)
    }
}
