//! Core traits shared by the domain models

/// Primary key type as issued by the remote store
pub type Id = i64;

/// Trait for records that carry a primary key.
///
/// New records created client-side have no id until the server confirms
/// them on the next refetch.
pub trait Identifiable {
    fn id(&self) -> Option<Id>;

    fn is_persisted(&self) -> bool {
        self.id().is_some()
    }
}

/// Trait for records scoped to a project
pub trait ProjectScoped {
    fn project_id(&self) -> Option<Id>;

    fn belongs_to(&self, project_id: Id) -> bool {
        self.project_id() == Some(project_id)
    }
}

/// Trait for stock-tracked resources (materials and machines).
///
/// Exposes the raw counters the derivations in `consty-calc` are computed
/// from. `used` and `damaged` are cumulative; `quantity` is the total ever
/// acquired, so `quantity - used - damaged` is what remains usable.
pub trait StockTracked {
    fn quantity(&self) -> f64;
    fn used(&self) -> f64;
    fn damaged(&self) -> f64;
    fn unit_price(&self) -> f64;

    /// Human-readable type name for validation messages
    fn kind_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        id: Option<Id>,
        project_id: Option<Id>,
    }

    impl Identifiable for Row {
        fn id(&self) -> Option<Id> {
            self.id
        }
    }

    impl ProjectScoped for Row {
        fn project_id(&self) -> Option<Id> {
            self.project_id
        }
    }

    #[test]
    fn test_persisted() {
        assert!(Row { id: Some(1), project_id: None }.is_persisted());
        assert!(!Row { id: None, project_id: None }.is_persisted());
    }

    #[test]
    fn test_belongs_to() {
        let row = Row { id: Some(1), project_id: Some(7) };
        assert!(row.belongs_to(7));
        assert!(!row.belongs_to(8));

        let unscoped = Row { id: Some(2), project_id: None };
        assert!(!unscoped.belongs_to(7));
    }
}
