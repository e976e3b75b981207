use serde::{Deserialize, Serialize};
use std::fmt;

/// Envelope returned by every Codeforces API method.
#[derive(Deserialize, Debug)]
pub struct CodeforcesResponse<T> {
    pub status: ResponseStatus,
    pub comment: Option<String>,
    pub result: Option<T>,
}

#[derive(Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseStatus {
    Ok,
    Failed,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    Before,
    Coding,
    PendingSystemTest,
    SystemTest,
    Finished,
    #[serde(other)]
    Unknown,
}

/// Contest entry of `contest.list`.
///
/// Only the fields listed here are read; anything else the API sends is ignored.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RawContest {
    pub id: i64,
    pub name: String,
    pub phase: Phase,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub frozen: Option<bool>,
    #[serde(alias = "durationSeconds")]
    pub duration_seconds: Option<i64>,
    #[serde(alias = "startTimeSeconds")]
    pub start_time_seconds: Option<i64>,
    #[serde(alias = "relativeTimeSeconds")]
    pub relative_time_seconds: Option<i64>,
}

impl RawContest {
    pub fn is_div2(&self) -> bool {
        self.name.contains(Division::Div2.label())
    }

    pub fn is_div3(&self) -> bool {
        self.name.contains(Division::Div3.label())
    }

    pub fn is_required_contest(&self) -> bool {
        self.is_div2() || self.is_div3()
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// コンテスト名からカテゴリを判定する
    ///
    /// "Div. 2"と"Div. 3"の両方を含む場合は"Div. 2"として扱う
    pub fn categorize(&self) -> Option<Division> {
        if self.is_div2() {
            Some(Division::Div2)
        } else if self.is_div3() {
            Some(Division::Div3)
        } else {
            None
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Division {
    #[serde(rename = "Div. 2")]
    Div2,
    #[serde(rename = "Div. 3")]
    Div3,
}

impl Division {
    pub fn label(&self) -> &'static str {
        match self {
            Division::Div2 => "Div. 2",
            Division::Div3 => "Div. 3",
        }
    }

    /// Problem indexes worth practicing for each division.
    pub fn index_whitelist(&self) -> &'static [&'static str] {
        match self {
            Division::Div2 => &["B", "B1", "B2"],
            Division::Div3 => &["B2", "C", "D"],
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A finished contest that survived classification.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Contest {
    pub id: i64,
    #[serde(rename = "name")]
    pub division: Division,
}

impl TryFrom<&RawContest> for Contest {
    type Error = ();

    fn try_from(contest: &RawContest) -> Result<Self, Self::Error> {
        contest
            .categorize()
            .map(|division| Contest {
                id: contest.id,
                division,
            })
            .ok_or(())
    }
}

#[derive(Deserialize, Debug)]
pub struct ProblemSetResult {
    pub problems: Vec<RawProblem>,
}

/// Problem entry of `problemset.problems`.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct RawProblem {
    #[serde(alias = "contestId")]
    pub contest_id: Option<i64>,
    pub index: String,
    pub name: String,
    pub rating: Option<i32>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub points: Option<f64>,
}

pub type Problem = RawProblem;
