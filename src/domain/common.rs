use uuid::Uuid;

/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> &str;
}

/// Supplies a presentation-ready label for UI or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Exposes the monetary amount carried by an entity.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Generates a fresh identifier in the canonical hyphenated UUID v4 form.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
