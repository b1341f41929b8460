pub mod category;
pub mod common;
pub mod dates;
pub mod day;
pub mod transaction;

pub use category::Category;
pub use common::{Amounted, Displayable, Identifiable};
pub use day::Day;
pub use transaction::{CategoryTotal, Transaction};
