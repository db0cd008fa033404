use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A single base stat.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Stat {
    #[string = "hp"]
    Hp,
    #[string = "attack"]
    Attack,
    #[string = "defense"]
    Defense,
    #[string = "special-attack"]
    SpecialAttack,
    #[string = "special-defense"]
    SpecialDefense,
    #[string = "speed"]
    Speed,
}

/// The canonical order of stats, used for display and comparison.
pub const CANONICAL_STAT_ORDER: [Stat; 6] = [
    Stat::Hp,
    Stat::Attack,
    Stat::Defense,
    Stat::SpecialAttack,
    Stat::SpecialDefense,
    Stat::Speed,
];

impl Stat {
    /// Short label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hp => "HP",
            Self::Attack => "ATK",
            Self::Defense => "DEF",
            Self::SpecialAttack => "SpA",
            Self::SpecialDefense => "SpD",
            Self::Speed => "SPD",
        }
    }
}

fn next_stat_for_iterator(stat: Stat) -> Option<Stat> {
    match stat {
        Stat::Hp => Some(Stat::Attack),
        Stat::Attack => Some(Stat::Defense),
        Stat::Defense => Some(Stat::SpecialAttack),
        Stat::SpecialAttack => Some(Stat::SpecialDefense),
        Stat::SpecialDefense => Some(Stat::Speed),
        Stat::Speed => None,
    }
}

/// Iterator over the entries of a [`StatTable`], in canonical order.
pub struct StatTableEntries<'s> {
    table: &'s StatTable,
    next_stat: Option<Stat>,
}

impl<'s> StatTableEntries<'s> {
    fn new(table: &'s StatTable) -> Self {
        Self {
            table,
            next_stat: Some(Stat::Hp),
        }
    }
}

impl<'s> Iterator for StatTableEntries<'s> {
    type Item = (Stat, u32);

    fn next(&mut self) -> Option<Self::Item> {
        let stat = self.next_stat?;
        let value = self.table.get(stat);
        self.next_stat = next_stat_for_iterator(stat);
        Some((stat, value))
    }
}

/// A full table of base stat values, keyed by stat name.
///
/// Stats missing from the source are 0.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct StatTable {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl StatTable {
    /// Returns the value for the given stat.
    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpecialAttack => self.special_attack,
            Stat::SpecialDefense => self.special_defense,
            Stat::Speed => self.speed,
        }
    }

    fn set(&mut self, stat: Stat, value: u32) {
        let stat = match stat {
            Stat::Hp => &mut self.hp,
            Stat::Attack => &mut self.attack,
            Stat::Defense => &mut self.defense,
            Stat::SpecialAttack => &mut self.special_attack,
            Stat::SpecialDefense => &mut self.special_defense,
            Stat::Speed => &mut self.speed,
        };
        *stat = value;
    }

    /// Creates an iterator over all stat entries.
    pub fn entries<'s>(&'s self) -> StatTableEntries<'s> {
        StatTableEntries::new(self)
    }

    /// Creates an iterator over all stat values.
    pub fn values<'s>(&'s self) -> impl Iterator<Item = u32> + 's {
        self.entries().map(|(_, value)| value)
    }

    /// Sums up all stats in the table.
    ///
    /// Values are widened before adding, so six maximal stats cannot overflow.
    pub fn sum(&self) -> u64 {
        self.values().map(u64::from).sum()
    }
}

impl FromIterator<(Stat, u32)> for StatTable {
    fn from_iter<T: IntoIterator<Item = (Stat, u32)>>(iter: T) -> Self {
        let mut out = StatTable::default();
        for (stat, value) in iter {
            out.set(stat, value);
        }
        out
    }
}
