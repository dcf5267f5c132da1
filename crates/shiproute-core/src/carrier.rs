use serde::{Deserialize, Serialize};

/// Shipping carrier used for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Carrier {
    Fedex,
    Ups,
    Dhl,
    Usps,
}

impl Carrier {
    /// Parse a carrier code in any casing. Returns `None` for unknown codes.
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "FEDEX" => Some(Carrier::Fedex),
            "UPS" => Some(Carrier::Ups),
            "DHL" => Some(Carrier::Dhl),
            "USPS" => Some(Carrier::Usps),
            _ => None,
        }
    }

    /// The backing platform that fulfills orders for this carrier.
    ///
    /// FedEx ships through Easyship; every other carrier ships through
    /// Veeqo. The mapping is total.
    #[must_use]
    pub fn platform(self) -> Platform {
        match self {
            Carrier::Fedex => Platform::Easyship,
            Carrier::Ups | Carrier::Dhl | Carrier::Usps => Platform::Veeqo,
        }
    }
}

impl std::fmt::Display for Carrier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Carrier::Fedex => write!(f, "FEDEX"),
            Carrier::Ups => write!(f, "UPS"),
            Carrier::Dhl => write!(f, "DHL"),
            Carrier::Usps => write!(f, "USPS"),
        }
    }
}

/// One of the two backing fulfillment platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Platform {
    Veeqo,
    Easyship,
}

impl Platform {
    /// Parse a platform tag in any casing. Returns `None` for unknown tags.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_uppercase().as_str() {
            "VEEQO" => Some(Platform::Veeqo),
            "EASYSHIP" => Some(Platform::Easyship),
            _ => None,
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Veeqo => write!(f, "VEEQO"),
            Platform::Easyship => write!(f, "EASYSHIP"),
        }
    }
}

/// Resolve a free-form carrier code to its platform.
///
/// Unknown codes resolve to [`Platform::Veeqo`], the default platform, so
/// every input maps to exactly one platform.
#[must_use]
pub fn platform_for_carrier(code: &str) -> Platform {
    Carrier::parse(code).map_or(Platform::Veeqo, Carrier::platform)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carrier_parse_is_case_insensitive() {
        assert_eq!(Carrier::parse("fedex"), Some(Carrier::Fedex));
        assert_eq!(Carrier::parse(" Ups "), Some(Carrier::Ups));
        assert_eq!(Carrier::parse("DHL"), Some(Carrier::Dhl));
        assert_eq!(Carrier::parse("royal mail"), None);
    }

    #[test]
    fn every_carrier_resolves_to_a_platform() {
        for carrier in [Carrier::Fedex, Carrier::Ups, Carrier::Dhl, Carrier::Usps] {
            // platform() is total; the match below would not compile otherwise.
            let platform = carrier.platform();
            assert!(matches!(platform, Platform::Veeqo | Platform::Easyship));
        }
    }

    #[test]
    fn fedex_ships_through_easyship() {
        assert_eq!(Carrier::Fedex.platform(), Platform::Easyship);
    }

    #[test]
    fn non_fedex_carriers_ship_through_veeqo() {
        assert_eq!(Carrier::Ups.platform(), Platform::Veeqo);
        assert_eq!(Carrier::Dhl.platform(), Platform::Veeqo);
        assert_eq!(Carrier::Usps.platform(), Platform::Veeqo);
    }

    #[test]
    fn unknown_carrier_code_falls_back_to_default_platform() {
        assert_eq!(platform_for_carrier("PIGEON"), Platform::Veeqo);
        assert_eq!(platform_for_carrier(""), Platform::Veeqo);
    }

    #[test]
    fn display_matches_wire_codes() {
        assert_eq!(Carrier::Fedex.to_string(), "FEDEX");
        assert_eq!(Platform::Easyship.to_string(), "EASYSHIP");
        assert_eq!(Platform::Veeqo.to_string(), "VEEQO");
    }

    #[test]
    fn serde_uses_uppercase_codes() {
        assert_eq!(
            serde_json::to_string(&Carrier::Usps).unwrap(),
            "\"USPS\""
        );
        let platform: Platform = serde_json::from_str("\"EASYSHIP\"").unwrap();
        assert_eq!(platform, Platform::Easyship);
    }
}
