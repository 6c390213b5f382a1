mod report;
mod search;
mod snippet;
mod toc;

pub use report::*;
pub use search::*;
pub use snippet::*;
pub use toc::*;
