//! Abilities, ability scores, and score modifiers

use std::fmt;

use crate::error::{Result, Sw5eError};

// ═══════════════════════════════════════════════════════════════════
// Ability
// ═══════════════════════════════════════════════════════════════════

/// The six abilities every creature has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ability {
    /// Physical power
    Strength,
    /// Agility and reflexes
    Dexterity,
    /// Endurance and vital force
    Constitution,
    /// Reasoning and memory
    Intelligence,
    /// Awareness and intuition
    Wisdom,
    /// Force of personality
    Charisma,
}

impl Ability {
    /// All six abilities, in the book's canonical order.
    pub const ALL: [Self; 6] = [
        Self::Strength,
        Self::Dexterity,
        Self::Constitution,
        Self::Intelligence,
        Self::Wisdom,
        Self::Charisma,
    ];

    /// The three-letter abbreviation used on character sheets.
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Dexterity => "DEX",
            Self::Constitution => "CON",
            Self::Intelligence => "INT",
            Self::Wisdom => "WIS",
            Self::Charisma => "CHA",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Constitution => "Constitution",
            Self::Intelligence => "Intelligence",
            Self::Wisdom => "Wisdom",
            Self::Charisma => "Charisma",
        };
        write!(f, "{}", name)
    }
}

// ═══════════════════════════════════════════════════════════════════
// AbilityScore
// ═══════════════════════════════════════════════════════════════════

/// A single ability score, valid from 1 to 30.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct AbilityScore(u8);

impl AbilityScore {
    /// The lowest legal score.
    pub const MIN: u8 = 1;

    /// The highest legal score.
    pub const MAX: u8 = 30;

    /// Creates a score, rejecting values outside 1..=30.
    ///
    /// # Examples
    ///
    /// ```
    /// use sw5e::AbilityScore;
    ///
    /// assert!(AbilityScore::new(14).is_ok());
    /// assert!(AbilityScore::new(0).is_err());
    /// assert!(AbilityScore::new(31).is_err());
    /// ```
    pub fn new(raw: u8) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&raw) {
            return Err(Sw5eError::ScoreOutOfRange { got: raw });
        }
        Ok(Self(raw))
    }

    /// The raw score.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// The modifier this score adds to rolls: `(score - 10) / 2`,
    /// rounded toward negative infinity.
    ///
    /// # Examples
    ///
    /// ```
    /// use sw5e::AbilityScore;
    ///
    /// assert_eq!(AbilityScore::new(1).unwrap().modifier(), -5);
    /// assert_eq!(AbilityScore::new(9).unwrap().modifier(), -1);
    /// assert_eq!(AbilityScore::new(10).unwrap().modifier(), 0);
    /// assert_eq!(AbilityScore::new(11).unwrap().modifier(), 0);
    /// assert_eq!(AbilityScore::new(20).unwrap().modifier(), 5);
    /// assert_eq!(AbilityScore::new(30).unwrap().modifier(), 10);
    /// ```
    #[must_use]
    pub const fn modifier(self) -> i8 {
        (self.0 as i8 - 10).div_euclid(2)
    }
}

impl Default for AbilityScore {
    fn default() -> Self {
        Self(10)
    }
}

impl TryFrom<u8> for AbilityScore {
    type Error = Sw5eError;

    fn try_from(raw: u8) -> Result<Self> {
        Self::new(raw)
    }
}

impl From<AbilityScore> for u8 {
    fn from(score: AbilityScore) -> Self {
        score.0
    }
}

impl fmt::Display for AbilityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ═══════════════════════════════════════════════════════════════════
// AbilityScores
// ═══════════════════════════════════════════════════════════════════

/// A full block of six ability scores.
///
/// `Default` gives the flat array of 10s a blank sheet starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityScores {
    /// Strength score
    pub strength: AbilityScore,
    /// Dexterity score
    pub dexterity: AbilityScore,
    /// Constitution score
    pub constitution: AbilityScore,
    /// Intelligence score
    pub intelligence: AbilityScore,
    /// Wisdom score
    pub wisdom: AbilityScore,
    /// Charisma score
    pub charisma: AbilityScore,
}

impl AbilityScores {
    /// Creates a block from six raw scores in canonical order, rejecting
    /// any that are out of range.
    pub fn new(strength: u8, dexterity: u8, constitution: u8, intelligence: u8, wisdom: u8, charisma: u8) -> Result<Self> {
        Ok(Self {
            strength: AbilityScore::new(strength)?,
            dexterity: AbilityScore::new(dexterity)?,
            constitution: AbilityScore::new(constitution)?,
            intelligence: AbilityScore::new(intelligence)?,
            wisdom: AbilityScore::new(wisdom)?,
            charisma: AbilityScore::new(charisma)?,
        })
    }

    /// The score for the given ability.
    #[must_use]
    pub const fn get(&self, ability: Ability) -> AbilityScore {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }

    /// The modifier for the given ability.
    #[must_use]
    pub const fn modifier(&self, ability: Ability) -> i8 {
        self.get(ability).modifier()
    }
}
