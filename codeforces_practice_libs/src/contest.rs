use crate::codeforces::{
    client::{CodeforcesApi, Result},
    model::{Contest, RawContest},
};

pub const DEFAULT_RECENT_SIZE: usize = 50;

pub struct ContestFetcher<'a, A: CodeforcesApi> {
    api: &'a A,
    recent_size: usize,
}

impl<'a, A: CodeforcesApi + Sync> ContestFetcher<'a, A> {
    pub fn new(api: &'a A, recent_size: usize) -> Self {
        ContestFetcher { api, recent_size }
    }

    /// Codeforces APIからコンテスト一覧をそのまま取得するメソッド
    pub async fn fetch_contest_list(&self) -> Result<Vec<RawContest>> {
        tracing::info!("Start to retrieve contests information from Codeforces");
        let contests = self.api.contest_list().await?;

        tracing::info!(
            "{} contests information successfully retrieved.",
            contests.len()
        );

        Ok(contests)
    }

    /// 終了済みのDiv. 2/Div. 3コンテストのうち、新しいものから`recent_size`件を分類して返すメソッド
    ///
    /// 順序はAPIが返した順(新しいコンテストが先頭)のまま保持する
    pub async fn crawl(&self) -> Result<Vec<Contest>> {
        let contests = self.fetch_contest_list().await?;
        let contests = recent_contests(&contests, self.recent_size);

        tracing::info!("{} contests are now target.", contests.len());

        Ok(contests)
    }
}

pub fn recent_contests(contests: &[RawContest], recent_size: usize) -> Vec<Contest> {
    contests
        .iter()
        .filter(|contest| contest.is_finished() && contest.is_required_contest())
        .take(recent_size)
        .filter_map(|contest| Contest::try_from(contest).ok())
        .collect()
}
