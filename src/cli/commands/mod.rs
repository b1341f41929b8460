pub mod category;
pub mod config;
pub mod ledger;
pub mod system;
pub mod transaction;

use crate::cli::registry::CommandRegistry;

/// Registers every shell command; help lists them in this order.
pub fn register_all(registry: &mut CommandRegistry) {
    for entry in ledger::definitions()
        .into_iter()
        .chain(transaction::definitions())
        .chain(category::definitions())
        .chain(config::definitions())
        .chain(system::definitions())
    {
        registry.register(entry);
    }
}
