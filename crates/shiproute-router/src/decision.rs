use serde::{Deserialize, Serialize};
use shiproute_core::{Carrier, Platform, WarehouseInfo};

/// The routing engine's output for one order.
///
/// `platform` always equals `carrier.platform()`; [`Self::with_override`]
/// preserves that invariant when a caller applies an explicit user
/// selection after the fact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingDecision {
    pub platform: Platform,
    pub carrier: Carrier,
    /// `None` when no warehouse was available.
    pub warehouse: Option<WarehouseInfo>,
    /// Completeness confidence in `[0, 100]`.
    pub confidence: f64,
}

impl RoutingDecision {
    /// Replace the carrier with an explicit user selection.
    ///
    /// The platform is recomputed from the fixed carrier→platform
    /// mapping, so an override can never produce an inconsistent pair.
    #[must_use]
    pub fn with_override(self, carrier: Carrier) -> Self {
        RoutingDecision {
            carrier,
            platform: carrier.platform(),
            ..self
        }
    }
}
