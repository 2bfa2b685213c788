pub mod search;
pub mod session;
pub mod tools;

pub use search::search;
pub use session::session;
pub use tools::tools;
