//! Paid extension tiers offered in the extend menu

/// One coin amount and the session time it buys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtensionTier {
    pub label: &'static str,
    pub coins: u32,
    pub seconds: u64,
}

pub const EXTENSION_TIERS: [ExtensionTier; 4] = [
    ExtensionTier {
        label: "5 pesos (25 mins)",
        coins: 5,
        seconds: 25 * 60,
    },
    ExtensionTier {
        label: "10 pesos (50 mins)",
        coins: 10,
        seconds: 50 * 60,
    },
    ExtensionTier {
        label: "15 pesos (1hr 15mins)",
        coins: 15,
        seconds: 75 * 60,
    },
    ExtensionTier {
        label: "20 pesos (1hr 40mins)",
        coins: 20,
        seconds: 100 * 60,
    },
];

/// Look up the tier that buys exactly `seconds`
pub fn tier_for_seconds(seconds: u64) -> Option<&'static ExtensionTier> {
    EXTENSION_TIERS.iter().find(|tier| tier.seconds == seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_buy_five_minutes_per_coin() {
        for tier in EXTENSION_TIERS {
            assert_eq!(tier.seconds, u64::from(tier.coins) * 300);
        }
    }

    #[test]
    fn tiers_are_listed_cheapest_first() {
        let seconds: Vec<u64> = EXTENSION_TIERS.iter().map(|t| t.seconds).collect();
        assert_eq!(seconds, vec![1500, 3000, 4500, 6000]);
    }

    #[test]
    fn finds_tier_by_duration() {
        assert_eq!(tier_for_seconds(4500).map(|t| t.coins), Some(15));
        assert!(tier_for_seconds(60).is_none());
    }
}
