use crate::modules::utils::rate_to_color;
use askama::Template;
use codeforces_practice_libs::RequiredProblem;

#[derive(Debug)]
pub struct ProblemRow {
    pub contest_id: i64,
    pub name: String,
    pub index: String,
    pub rating: i32,
    pub color: String,
    pub url: String,
}

impl From<RequiredProblem> for ProblemRow {
    fn from(required: RequiredProblem) -> Self {
        let rating = required.problem.rating.unwrap_or_default();
        ProblemRow {
            contest_id: required.contest.id,
            name: required.problem.name,
            index: required.problem.index,
            rating,
            color: rate_to_color(rating),
            url: required.url,
        }
    }
}

#[derive(Debug, Default, Template)]
#[template(path = "problems.html.j2", escape = "html")]
pub struct ProblemListPage {
    pub count: usize,
    pub rows: Vec<ProblemRow>,
}

impl ProblemListPage {
    /// Rows are displayed in the reverse of the selection order.
    pub fn new(problems: Vec<RequiredProblem>) -> Self {
        let rows: Vec<ProblemRow> = problems.into_iter().rev().map(ProblemRow::from).collect();
        Self {
            count: rows.len(),
            rows,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}
