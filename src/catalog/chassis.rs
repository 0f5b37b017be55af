use serde::Serialize;

use super::Tier;

/// A chassis manufacturer carried by the venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChassisBrand {
    /// Brand name as shown to drivers
    pub name: &'static str,
    /// Short sales description
    pub description: &'static str,
    /// Price tiers the brand has karts in
    pub tiers: &'static [Tier],
}

impl ChassisBrand {
    /// True if the brand sells into at least one of the given tiers.
    pub fn serves_any(&self, tiers: &[Tier]) -> bool {
        self.tiers.iter().any(|t| tiers.contains(t))
    }
}

/// Every chassis brand, in the order they are presented.
pub static CHASSIS_BRANDS: &[ChassisBrand] = &[
    ChassisBrand {
        name: "Tillotson",
        description: "Affordable complete packages, great starter kart",
        tiers: &[Tier::Entry, Tier::Mid],
    },
    ChassisBrand {
        name: "DAP Kart",
        description: "Entry-level, good value for new racers",
        tiers: &[Tier::Entry],
    },
    ChassisBrand {
        name: "CRG",
        description: "Versatile brand with options at every level",
        tiers: &[Tier::Entry, Tier::Mid, Tier::Premium],
    },
    ChassisBrand {
        name: "CompKart",
        description: "Competitive value, solid mid-range performance",
        tiers: &[Tier::Mid],
    },
    ChassisBrand {
        name: "Birel / Freeline",
        description: "Premium engineering, proven performance",
        tiers: &[Tier::Mid, Tier::Premium],
    },
    ChassisBrand {
        name: "Kart Republic",
        description: "Top-tier competition chassis, elite level",
        tiers: &[Tier::Mid, Tier::Premium],
    },
    ChassisBrand {
        name: "FA Alonso Kart",
        description: "Fernando Alonso's brand, prestige racing",
        tiers: &[Tier::Premium],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_names_are_unique() {
        let mut names: Vec<_> = CHASSIS_BRANDS.iter().map(|b| b.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), CHASSIS_BRANDS.len());
    }

    #[test]
    fn test_every_brand_serves_a_tier() {
        for brand in CHASSIS_BRANDS {
            assert!(!brand.tiers.is_empty(), "{} has no tiers", brand.name);
        }
    }

    #[test]
    fn test_serves_any() {
        let crg = &CHASSIS_BRANDS[2];
        assert!(crg.serves_any(&[Tier::Premium]));

        let dap = &CHASSIS_BRANDS[1];
        assert!(!dap.serves_any(&[Tier::Mid, Tier::Premium]));
        assert!(!dap.serves_any(&[]));
    }
}
