pub mod types;

pub use types::{PER_PAGE, Page};
