use crate::selection::RequiredProblem;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ProblemListResponse {
    pub count: usize,
    pub items: Vec<RequiredProblem>,
    pub message: Option<String>,
}

impl ProblemListResponse {
    /// Items are stored in the reverse of the selection order.
    pub fn new(mut items: Vec<RequiredProblem>) -> Self {
        items.reverse();
        Self {
            count: items.len(),
            items,
            message: None,
        }
    }

    pub fn error(message: impl ToString) -> Self {
        Self {
            count: 0,
            items: Vec::new(),
            message: Some(message.to_string()),
        }
    }
}
