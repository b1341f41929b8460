//! Domain types representing budget categories.

use serde::{Deserialize, Serialize};

use crate::domain::common::*;

/// A named budget bucket with a target spending limit.
///
/// Categories are never edited after creation; the category manager only
/// appends and deletes whole entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub budget: f64,
}

impl Category {
    pub fn new(name: impl Into<String>, budget: f64) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            budget,
        }
    }
}

impl Identifiable for Category {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Displayable for Category {
    fn display_label(&self) -> String {
        format!("{} (budget {})", self.name, self.budget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_categories_get_distinct_ids() {
        let first = Category::new("Food", 100.0);
        let second = Category::new("Food", 100.0);
        assert_ne!(first.id, second.id);
        assert_eq!(first.name, "Food");
    }

    #[test]
    fn reads_records_written_by_earlier_versions() {
        let json = r#"{"id":"c1","name":"Rent","budget":1200}"#;
        let category: Category = serde_json::from_str(json).expect("deserialize");
        assert_eq!(category.id, "c1");
        assert!((category.budget - 1200.0).abs() < f64::EPSILON);
    }
}
