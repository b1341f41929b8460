pub mod app_state;
pub mod clock;
pub mod services;
pub mod store;

pub use app_state::AppState;
pub use clock::{Clock, FixedClock, SystemClock};
pub use store::TransactionStore;
