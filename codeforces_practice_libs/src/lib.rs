pub mod api;
pub mod codeforces;
pub mod contest;
pub mod problem;
pub mod selection;

pub use codeforces::client::{CodeforcesApi, CodeforcesApiError, CodeforcesClient};
pub use codeforces::model::{Contest, Division, Problem, RawContest, RawProblem};
pub use selection::{select_required_problems, RequiredProblem};
