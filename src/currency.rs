use std::fmt;

/// One of the ten gemstone families a sphere can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gemstone {
    Diamond,
    Garnet,
    Heliodor,
    Topaz,
    Ruby,
    Smokestone,
    Zircon,
    Amethyst,
    Sapphire,
    Emerald,
}

impl fmt::Display for Gemstone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Gemstone::Diamond => "Diamond",
            Gemstone::Garnet => "Garnet",
            Gemstone::Heliodor => "Heliodor",
            Gemstone::Topaz => "Topaz",
            Gemstone::Ruby => "Ruby",
            Gemstone::Smokestone => "Smokestone",
            Gemstone::Zircon => "Zircon",
            Gemstone::Amethyst => "Amethyst",
            Gemstone::Sapphire => "Sapphire",
            Gemstone::Emerald => "Emerald",
        };
        f.write_str(name)
    }
}

/// Sphere size class. Ordered by unit value within a family: a chip is worth
/// less than a mark, which is worth less than a broam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    Chip,
    Mark,
    Broam,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Chip => "Chip",
            Tier::Mark => "Mark",
            Tier::Broam => "Broam",
        };
        f.write_str(name)
    }
}

/// A single denomination: one gemstone family at one tier, with its exchange
/// value in diamond marks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Denomination {
    pub gemstone: Gemstone,
    pub tier: Tier,
    pub unit_value: f64,
}

const fn d(gemstone: Gemstone, tier: Tier, unit_value: f64) -> Denomination {
    Denomination {
        gemstone,
        tier,
        unit_value,
    }
}

/// Every denomination in circulation, valued in diamond marks.
///
/// Ten gemstone families at three tiers each. The table is read-only and
/// shared by all invocations of the generator.
pub static DENOMINATIONS: [Denomination; 30] = [
    d(Gemstone::Diamond, Tier::Chip, 0.2),
    d(Gemstone::Diamond, Tier::Mark, 1.0),
    d(Gemstone::Diamond, Tier::Broam, 4.0),
    d(Gemstone::Garnet, Tier::Chip, 1.0),
    d(Gemstone::Garnet, Tier::Mark, 5.0),
    d(Gemstone::Garnet, Tier::Broam, 20.0),
    d(Gemstone::Heliodor, Tier::Chip, 1.0),
    d(Gemstone::Heliodor, Tier::Mark, 5.0),
    d(Gemstone::Heliodor, Tier::Broam, 20.0),
    d(Gemstone::Topaz, Tier::Chip, 1.0),
    d(Gemstone::Topaz, Tier::Mark, 5.0),
    d(Gemstone::Topaz, Tier::Broam, 20.0),
    d(Gemstone::Ruby, Tier::Chip, 2.0),
    d(Gemstone::Ruby, Tier::Mark, 10.0),
    d(Gemstone::Ruby, Tier::Broam, 40.0),
    d(Gemstone::Smokestone, Tier::Chip, 2.0),
    d(Gemstone::Smokestone, Tier::Mark, 10.0),
    d(Gemstone::Smokestone, Tier::Broam, 40.0),
    d(Gemstone::Zircon, Tier::Chip, 2.0),
    d(Gemstone::Zircon, Tier::Mark, 10.0),
    d(Gemstone::Zircon, Tier::Broam, 40.0),
    d(Gemstone::Amethyst, Tier::Chip, 5.0),
    d(Gemstone::Amethyst, Tier::Mark, 25.0),
    d(Gemstone::Amethyst, Tier::Broam, 100.0),
    d(Gemstone::Sapphire, Tier::Chip, 5.0),
    d(Gemstone::Sapphire, Tier::Mark, 25.0),
    d(Gemstone::Sapphire, Tier::Broam, 100.0),
    d(Gemstone::Emerald, Tier::Chip, 10.0),
    d(Gemstone::Emerald, Tier::Mark, 50.0),
    d(Gemstone::Emerald, Tier::Broam, 200.0),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_has_thirty_positive_denominations() {
        assert_eq!(DENOMINATIONS.len(), 30);
        for denomination in &DENOMINATIONS {
            assert!(
                denomination.unit_value > 0.0,
                "{} {} has non-positive value",
                denomination.gemstone,
                denomination.tier
            );
        }
    }

    #[test]
    fn test_no_duplicate_gemstone_tier_pairs() {
        let mut seen = HashSet::new();
        for denomination in &DENOMINATIONS {
            assert!(
                seen.insert((denomination.gemstone, denomination.tier)),
                "duplicate entry for {} {}",
                denomination.gemstone,
                denomination.tier
            );
        }
    }

    #[test]
    fn test_tiers_increase_in_value_within_each_family() {
        for chip in DENOMINATIONS.iter().filter(|d| d.tier == Tier::Chip) {
            let mark = DENOMINATIONS
                .iter()
                .find(|d| d.gemstone == chip.gemstone && d.tier == Tier::Mark)
                .unwrap();
            let broam = DENOMINATIONS
                .iter()
                .find(|d| d.gemstone == chip.gemstone && d.tier == Tier::Broam)
                .unwrap();
            assert!(chip.unit_value < mark.unit_value);
            assert!(mark.unit_value < broam.unit_value);
        }
    }

    #[test]
    fn test_tier_ordering() {
        assert!(Tier::Chip < Tier::Mark);
        assert!(Tier::Mark < Tier::Broam);
    }
}
