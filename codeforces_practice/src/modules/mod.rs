pub mod handlers;
pub mod page;
pub mod pipeline;
pub mod utils;
