//! The routing decision itself: carrier, platform, warehouse, confidence.

use rand::Rng;
use shiproute_core::{regions, Carrier, CustomerRecord, WarehouseInfo};

use crate::decision::RoutingDecision;

/// States whose warehouses are preferred when nothing matches the
/// customer's own state, in priority order.
const PREFERRED_WAREHOUSE_STATES: &[&str] = &["NEVADA", "CALIFORNIA"];

/// Route one order.
///
/// Carrier comes from the per-state preference table (UPS when the state
/// has no entry), the platform from the fixed carrier→platform mapping,
/// and the warehouse from [`select_warehouse`]'s match cascade. An
/// explicit carrier on the record does not bypass the table here;
/// callers apply user selections through
/// [`RoutingDecision::with_override`].
#[must_use]
pub fn route_order(customer: &CustomerRecord, warehouses: &[WarehouseInfo]) -> RoutingDecision {
    let carrier = select_carrier(customer);
    let platform = carrier.platform();
    let warehouse = select_warehouse(customer, warehouses);
    let confidence = routing_confidence(customer, carrier, warehouse.is_some());

    tracing::debug!(
        %carrier,
        %platform,
        warehouse_id = warehouse.as_ref().map_or("", |w| w.id.as_str()),
        confidence,
        "routed order"
    );

    RoutingDecision {
        platform,
        carrier,
        warehouse,
        confidence,
    }
}

/// First entry of the state's carrier preference list, or UPS.
fn select_carrier(customer: &CustomerRecord) -> Carrier {
    customer
        .state
        .as_deref()
        .and_then(regions::preferred_carriers)
        .and_then(|preferences| preferences.first().copied())
        .unwrap_or(Carrier::Ups)
}

/// Warehouse match cascade.
///
/// 1. First warehouse whose region contains the customer's state
///    (case-insensitive substring).
/// 2. First warehouse in a preferred state, in priority order.
/// 3. Uniform random pick from the list.
/// 4. Empty list → `None`.
fn select_warehouse(
    customer: &CustomerRecord,
    warehouses: &[WarehouseInfo],
) -> Option<WarehouseInfo> {
    if warehouses.is_empty() {
        return None;
    }

    if let Some(state) = customer.state.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        let needle = state.to_uppercase();
        if let Some(matched) = warehouses
            .iter()
            .find(|warehouse| warehouse.region.to_uppercase().contains(&needle))
        {
            return Some(matched.clone());
        }
    }

    for preferred in PREFERRED_WAREHOUSE_STATES {
        if let Some(matched) = warehouses
            .iter()
            .find(|warehouse| warehouse.region.to_uppercase().contains(preferred))
        {
            tracing::debug!(preferred, "no warehouse in customer state, using preferred state");
            return Some(matched.clone());
        }
    }

    let index = rand::rng().random_range(0..warehouses.len());
    tracing::debug!(index, "no regional match, picking a warehouse at random");
    Some(warehouses[index].clone())
}

/// Additive completeness score, capped at 100.
fn routing_confidence(customer: &CustomerRecord, carrier: Carrier, warehouse_found: bool) -> f64 {
    let present = |field: &Option<String>| field.as_deref().is_some_and(|v| !v.trim().is_empty());

    let mut confidence: f64 = 50.0;
    if present(&customer.phone) {
        confidence += 10.0;
    }
    if present(&customer.email) {
        confidence += 10.0;
    }
    if present(&customer.address_1) {
        confidence += 15.0;
    }
    if present(&customer.postal_code) {
        confidence += 10.0;
    }
    if warehouse_found {
        confidence += 20.0;
    }
    if carrier == Carrier::Fedex {
        confidence += 5.0;
    }
    confidence.min(100.0)
}
