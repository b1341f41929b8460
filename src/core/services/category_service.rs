//! Business logic helpers for category management.
//!
//! Categories are owned by the key-value store: every operation re-reads the
//! whole `categories` array and writes it back.

use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::category::Category;
use crate::storage::{self, KeyValueStore, CATEGORIES_KEY};

/// Provides validated operations for [`Category`] entities.
pub struct CategoryService;

impl CategoryService {
    /// Returns every stored category in insertion order.
    pub fn list(store: &dyn KeyValueStore) -> ServiceResult<Vec<Category>> {
        Ok(storage::load_list(store, CATEGORIES_KEY)?)
    }

    /// Category names, in the order the add-transaction picker offers them.
    pub fn names(store: &dyn KeyValueStore) -> ServiceResult<Vec<String>> {
        Ok(Self::list(store)?
            .into_iter()
            .map(|category| category.name)
            .collect())
    }

    /// Adds a category after checking the name is non-blank and the budget positive.
    ///
    /// Names are stored trimmed. Duplicate names are allowed.
    pub fn add(store: &dyn KeyValueStore, name: &str, budget: f64) -> ServiceResult<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ServiceError::Invalid("Category name cannot be empty".into()));
        }
        if !budget.is_finite() || budget <= 0.0 {
            return Err(ServiceError::Invalid(
                "Category budget must be greater than zero".into(),
            ));
        }

        let mut categories = Self::list(store)?;
        let category = Category::new(name, budget);
        categories.push(category.clone());
        storage::save_list(store, CATEGORIES_KEY, &categories)?;
        tracing::info!(id = %category.id, name = %category.name, budget, "category added");
        Ok(category)
    }

    /// Removes the category with `id`. Returns `false` when nothing matched.
    ///
    /// Transactions referring to the category by name are left as they are.
    pub fn delete(store: &dyn KeyValueStore, id: &str) -> ServiceResult<bool> {
        let mut categories = Self::list(store)?;
        let before = categories.len();
        categories.retain(|category| category.id != id);
        if categories.len() == before {
            return Ok(false);
        }
        storage::save_list(store, CATEGORIES_KEY, &categories)?;
        tracing::info!(id, "category deleted");
        Ok(true)
    }
}
