//! The SW5e skill list and governing abilities

use std::fmt;

use crate::ability::Ability;

/// The eighteen skills of Star Wars 5e.
///
/// The list follows the SW5e Player's Handbook: History becomes Lore,
/// Arcana and Religion are folded into Technology and Lore, and Piloting
/// is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Skill {
    /// Balance, tumbling, staying on your feet
    Acrobatics,
    /// Calming, controlling, and reading beasts
    AnimalHandling,
    /// Climbing, jumping, swimming, grappling
    Athletics,
    /// Hiding the truth convincingly
    Deception,
    /// Reading intentions and moods
    Insight,
    /// Influence through threats and menace
    Intimidation,
    /// Deduction and searching for clues
    Investigation,
    /// Galactic history, cultures, and the Force
    Lore,
    /// Stabilizing the dying and diagnosing ailments
    Medicine,
    /// Terrain, flora, fauna, and weather
    Nature,
    /// Noticing what there is to notice
    Perception,
    /// Entertaining an audience
    Performance,
    /// Influence through tact and charm
    Persuasion,
    /// Operating vehicles and starships
    Piloting,
    /// Manual trickery and lifting pockets
    SleightOfHand,
    /// Moving unseen and unheard
    Stealth,
    /// Tracking, foraging, and enduring the wilds
    Survival,
    /// Computers, droids, and slicing
    Technology,
}

impl Skill {
    /// All eighteen skills, in the book's alphabetical order.
    pub const ALL: [Self; 18] = [
        Self::Acrobatics,
        Self::AnimalHandling,
        Self::Athletics,
        Self::Deception,
        Self::Insight,
        Self::Intimidation,
        Self::Investigation,
        Self::Lore,
        Self::Medicine,
        Self::Nature,
        Self::Perception,
        Self::Performance,
        Self::Persuasion,
        Self::Piloting,
        Self::SleightOfHand,
        Self::Stealth,
        Self::Survival,
        Self::Technology,
    ];

    /// The ability a check with this skill is rolled against.
    ///
    /// # Examples
    ///
    /// ```
    /// use sw5e::{Ability, Skill};
    ///
    /// assert_eq!(Skill::Athletics.ability(), Ability::Strength);
    /// assert_eq!(Skill::Piloting.ability(), Ability::Intelligence);
    /// assert_eq!(Skill::Perception.ability(), Ability::Wisdom);
    /// ```
    #[must_use]
    pub const fn ability(self) -> Ability {
        match self {
            Self::Athletics => Ability::Strength,
            Self::Acrobatics | Self::SleightOfHand | Self::Stealth => Ability::Dexterity,
            Self::Investigation
            | Self::Lore
            | Self::Nature
            | Self::Piloting
            | Self::Technology => Ability::Intelligence,
            Self::AnimalHandling
            | Self::Insight
            | Self::Medicine
            | Self::Perception
            | Self::Survival => Ability::Wisdom,
            Self::Deception | Self::Intimidation | Self::Performance | Self::Persuasion => {
                Ability::Charisma
            }
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Acrobatics => "Acrobatics",
            Self::AnimalHandling => "Animal Handling",
            Self::Athletics => "Athletics",
            Self::Deception => "Deception",
            Self::Insight => "Insight",
            Self::Intimidation => "Intimidation",
            Self::Investigation => "Investigation",
            Self::Lore => "Lore",
            Self::Medicine => "Medicine",
            Self::Nature => "Nature",
            Self::Perception => "Perception",
            Self::Performance => "Performance",
            Self::Persuasion => "Persuasion",
            Self::Piloting => "Piloting",
            Self::SleightOfHand => "Sleight of Hand",
            Self::Stealth => "Stealth",
            Self::Survival => "Survival",
            Self::Technology => "Technology",
        };
        write!(f, "{}", name)
    }
}
