//! Roll modes and check-modifier arithmetic

use std::fmt;

use crate::ability::AbilityScore;
use crate::level::CharacterLevel;
use crate::proficency::Proficency;

/// How many d20s a roll uses and which one counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RollMode {
    /// One die, taken as rolled
    #[default]
    Normal,
    /// Two dice, keep the higher
    Advantage,
    /// Two dice, keep the lower
    Disadvantage,
}

impl RollMode {
    /// Combines two sources of roll mode into one.
    ///
    /// Any advantage and any disadvantage cancel to `Normal`, no matter
    /// how many sources of each there are; otherwise the non-normal
    /// operand wins. Commutative.
    ///
    /// # Examples
    ///
    /// ```
    /// use sw5e::RollMode::*;
    ///
    /// assert_eq!(Normal.combine(Advantage), Advantage);
    /// assert_eq!(Advantage.combine(Disadvantage), Normal);
    /// assert_eq!(Disadvantage.combine(Disadvantage), Disadvantage);
    /// ```
    #[must_use]
    pub const fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Normal, mode) | (mode, Self::Normal) => mode,
            (Self::Advantage, Self::Advantage) => Self::Advantage,
            (Self::Disadvantage, Self::Disadvantage) => Self::Disadvantage,
            _ => Self::Normal,
        }
    }

    /// How many d20s this mode rolls.
    #[must_use]
    pub const fn dice(self) -> u8 {
        match self {
            Self::Normal => 1,
            Self::Advantage | Self::Disadvantage => 2,
        }
    }
}

impl fmt::Display for RollMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Normal => "normal",
            Self::Advantage => "advantage",
            Self::Disadvantage => "disadvantage",
        };
        write!(f, "{}", name)
    }
}

/// The flat modifier added to a d20 check: the ability modifier plus the
/// tier's share of the level's proficiency bonus.
///
/// # Examples
///
/// ```
/// use sw5e::{check_modifier, AbilityScore, CharacterLevel, Proficency};
///
/// let dex = AbilityScore::new(16).unwrap();
/// let level = CharacterLevel::new(5).unwrap();
///
/// assert_eq!(check_modifier(Proficency::Untrained, level, dex), 3);
/// assert_eq!(check_modifier(Proficency::Proficent, level, dex), 6);
/// assert_eq!(check_modifier(Proficency::Expertise, level, dex), 9);
/// ```
#[must_use]
pub const fn check_modifier(
    proficency: Proficency,
    level: CharacterLevel,
    score: AbilityScore,
) -> i8 {
    score.modifier() + proficency.bonus(level.proficiency_bonus())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_is_commutative() {
        let modes = [RollMode::Normal, RollMode::Advantage, RollMode::Disadvantage];
        for a in modes {
            for b in modes {
                assert_eq!(a.combine(b), b.combine(a));
            }
        }
    }

    #[test]
    fn test_advantage_and_disadvantage_cancel() {
        assert_eq!(
            RollMode::Advantage.combine(RollMode::Disadvantage),
            RollMode::Normal
        );
    }

    #[test]
    fn test_normal_is_identity() {
        for mode in [RollMode::Normal, RollMode::Advantage, RollMode::Disadvantage] {
            assert_eq!(RollMode::Normal.combine(mode), mode);
        }
    }

    #[test]
    fn test_dice_counts() {
        assert_eq!(RollMode::Normal.dice(), 1);
        assert_eq!(RollMode::Advantage.dice(), 2);
        assert_eq!(RollMode::Disadvantage.dice(), 2);
    }

    #[test]
    fn test_check_modifier_with_penalty() {
        // Low score, untrained: the modifier can go negative.
        let str_score = AbilityScore::new(6).unwrap();
        let level = CharacterLevel::new(1).unwrap();
        assert_eq!(check_modifier(Proficency::Untrained, level, str_score), -2);
        assert_eq!(check_modifier(Proficency::Trained, level, str_score), -1);
    }
}
