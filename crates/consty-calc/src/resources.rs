//! Resource usage derivations for stock-tracked records
//!
//! Materials and machines share the same counters, so everything here is
//! generic over [`StockTracked`].

use chrono::{DateTime, Utc};
use consty_core::error::ValidationErrors;
use consty_core::traits::{Id, StockTracked};
use serde::{Deserialize, Serialize};

/// Remaining usable quantity. Never negative: over-consumed records
/// coming back from the server floor at zero.
pub fn leftover(resource: &impl StockTracked) -> f64 {
    (resource.quantity() - resource.used() - resource.damaged()).max(0.0)
}

/// Money spent on consumed stock, damaged units included.
pub fn money_spent(resource: &impl StockTracked) -> f64 {
    (resource.used() + resource.damaged()) * resource.unit_price()
}

/// Total spend across a list of resources
pub fn total_money_spent<'a, T, I>(resources: I) -> f64
where
    T: StockTracked + 'a,
    I: IntoIterator<Item = &'a T>,
{
    resources.into_iter().map(|r| money_spent(r)).sum()
}

/// The derived pair shown on every resource row
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResourceSummary {
    pub leftover: f64,
    pub money_spent: f64,
}

impl ResourceSummary {
    pub fn of(resource: &impl StockTracked) -> Self {
        Self {
            leftover: leftover(resource),
            money_spent: money_spent(resource),
        }
    }
}

/// A proposed usage-log delta
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsageDelta {
    pub used: f64,
    pub damaged: f64,
}

impl UsageDelta {
    pub fn total(&self) -> f64 {
        self.used + self.damaged
    }
}

/// Check a proposed delta against the resource's current leftover.
///
/// A failing delta must cause no state change and no network call; the
/// caller surfaces the errors and stops.
pub fn validate_usage(
    resource: &impl StockTracked,
    delta: &UsageDelta,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if delta.used < 0.0 {
        errors.add("quantity_used", "must not be negative");
    }
    if delta.damaged < 0.0 {
        errors.add("quantity_damaged", "must not be negative");
    }
    if errors.is_empty() {
        if delta.total() <= 0.0 {
            errors.add_base("nothing to log: enter a used or damaged quantity");
        } else if delta.total() > leftover(resource) {
            errors.add_base(format!(
                "requested {} exceeds the {} units of {} left",
                delta.total(),
                leftover(resource),
                resource.kind_name(),
            ));
        }
    }

    errors.into_result()
}

/// A usage-log line appended optimistically after a delta is accepted.
///
/// The id is client-generated from the timestamp and replaced by the
/// server-issued record on the next refetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageLogEntry {
    pub id: i64,
    pub resource_id: Option<Id>,
    pub resource_kind: String,
    pub used: f64,
    pub damaged: f64,
    pub logged_at: DateTime<Utc>,
}

impl UsageLogEntry {
    pub fn synthetic(
        resource_id: Option<Id>,
        resource_kind: &str,
        delta: &UsageDelta,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: now.timestamp_millis(),
            resource_id,
            resource_kind: resource_kind.to_string(),
            used: delta.used,
            damaged: delta.damaged,
            logged_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use consty_models::Material;

    fn cement() -> Material {
        Material {
            id: Some(9),
            name: "Cement".into(),
            quantity: 100.0,
            used: 20.0,
            damaged: 5.0,
            unit_price: 10.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_leftover_and_money_spent() {
        let material = cement();
        assert_eq!(leftover(&material), 75.0);
        assert_eq!(money_spent(&material), 250.0);

        let summary = ResourceSummary::of(&material);
        assert_eq!(summary.leftover, 75.0);
        assert_eq!(summary.money_spent, 250.0);
    }

    #[test]
    fn test_leftover_never_negative() {
        let material = Material {
            quantity: 10.0,
            used: 8.0,
            damaged: 5.0,
            ..cement()
        };
        assert_eq!(leftover(&material), 0.0);
    }

    #[test]
    fn test_total_money_spent() {
        let materials = vec![cement(), cement()];
        assert_eq!(total_money_spent(&materials), 500.0);
    }

    #[test]
    fn test_delta_within_leftover_accepted() {
        let delta = UsageDelta {
            used: 60.0,
            damaged: 15.0,
        };
        assert!(validate_usage(&cement(), &delta).is_ok());
    }

    #[test]
    fn test_delta_exceeding_leftover_rejected() {
        // leftover is 75; 60 + 20 = 80 must be rejected.
        let delta = UsageDelta {
            used: 60.0,
            damaged: 20.0,
        };
        let errors = validate_usage(&cement(), &delta).unwrap_err();
        assert!(!errors.base_errors.is_empty());
    }

    #[test]
    fn test_negative_and_empty_deltas_rejected() {
        let negative = UsageDelta {
            used: -1.0,
            damaged: 0.0,
        };
        let errors = validate_usage(&cement(), &negative).unwrap_err();
        assert!(errors.has_error("quantity_used"));

        let empty = UsageDelta {
            used: 0.0,
            damaged: 0.0,
        };
        assert!(validate_usage(&cement(), &empty).is_err());
    }

    #[test]
    fn test_synthetic_entry_id_from_timestamp() {
        let now = Utc::now();
        let delta = UsageDelta {
            used: 3.0,
            damaged: 1.0,
        };
        let entry = UsageLogEntry::synthetic(Some(9), "material", &delta, now);
        assert_eq!(entry.id, now.timestamp_millis());
        assert_eq!(entry.used, 3.0);
        assert_eq!(entry.resource_kind, "material");
    }
}
