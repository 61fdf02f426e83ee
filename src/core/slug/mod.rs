mod query;
mod resolver;

pub use query::{AddonRef, SlugData, SlugQuery, SlugResponse, SlugResult, SlugVariables};
pub use resolver::SlugResolver;
