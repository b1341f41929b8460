pub mod category_service;
pub mod ledger_service;
pub mod transaction_service;

pub use category_service::CategoryService;
pub use ledger_service::{Direction, LedgerService, LedgerSnapshot};
pub use transaction_service::{TransactionDraft, TransactionService};

use crate::errors::DaybookError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] DaybookError),
    #[error("{0}")]
    Invalid(String),
}
