//! Proficency tiers and their mechanical effects

use std::fmt;

/// The seven proficency tiers of Star Wars 5e, in ascending order.
///
/// Beyond the familiar d20 ladder of untrained, proficient, and expert,
/// SW5e layers three mastery tiers on top, each granting advantage and
/// progressively stronger reroll entitlements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Proficency {
    /// No training at all. Adds nothing to the roll.
    #[default]
    Untrained,
    /// Half the proficiency bonus, rounded down. Obtainable in skills,
    /// tools, saving throws, and weapons.
    Trained,
    /// The full proficiency bonus. Obtainable in skills, tools, saving
    /// throws, and weapons.
    Proficent,
    /// Twice the proficiency bonus. Obtainable in skills, tools, and
    /// saving throws only.
    Expertise,
    /// Twice the proficiency bonus, and the roll is always made with
    /// advantage. Obtainable in skills, tools, and saving throws only.
    Mastery,
    /// As `Mastery`, and when rolling with advantage one of the dice may
    /// be rerolled once; the new roll must be used. Obtainable in skills,
    /// tools, and saving throws only.
    HighMastery,
    /// As `Mastery`, and when rolling with advantage each die may be
    /// rerolled once; the new rolls must be used. Obtainable in skills,
    /// tools, and saving throws only.
    GrandMastery,
}

/// The four kinds of thing training can be obtained in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrainingKind {
    /// A skill check (see [`crate::Skill`]).
    Skill,
    /// A tool or kit.
    Tool,
    /// A saving throw, keyed by ability.
    SavingThrow,
    /// A weapon.
    Weapon,
}

impl Proficency {
    /// Returns the next proficency tier, or `None` if the current tier is
    /// `GrandMastery`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sw5e::Proficency::*;
    ///
    /// assert_eq!(Untrained.increase(), Some(Trained));
    /// assert_eq!(Trained.increase(), Some(Proficent));
    /// assert_eq!(Proficent.increase(), Some(Expertise));
    /// assert_eq!(Expertise.increase(), Some(Mastery));
    /// assert_eq!(Mastery.increase(), Some(HighMastery));
    /// assert_eq!(HighMastery.increase(), Some(GrandMastery));
    /// assert_eq!(GrandMastery.increase(), None);
    /// ```
    #[must_use]
    pub const fn increase(self) -> Option<Self> {
        match self {
            Self::Untrained => Some(Self::Trained),
            Self::Trained => Some(Self::Proficent),
            Self::Proficent => Some(Self::Expertise),
            Self::Expertise => Some(Self::Mastery),
            Self::Mastery => Some(Self::HighMastery),
            Self::HighMastery => Some(Self::GrandMastery),
            Self::GrandMastery => None,
        }
    }

    /// Returns the next proficency tier, wrapping around to `Untrained`
    /// if the current tier is `GrandMastery`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sw5e::Proficency::*;
    ///
    /// assert_eq!(Untrained.increase_wrapping(), Trained);
    /// assert_eq!(GrandMastery.increase_wrapping(), Untrained);
    /// ```
    #[must_use]
    pub const fn increase_wrapping(self) -> Self {
        match self.increase() {
            Some(next) => next,
            None => Self::Untrained,
        }
    }

    /// Returns the previous proficency tier, or `None` if the current
    /// tier is `Untrained`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sw5e::Proficency::*;
    ///
    /// assert_eq!(Untrained.decrease(), None);
    /// assert_eq!(Trained.decrease(), Some(Untrained));
    /// assert_eq!(Proficent.decrease(), Some(Trained));
    /// assert_eq!(Expertise.decrease(), Some(Proficent));
    /// assert_eq!(Mastery.decrease(), Some(Expertise));
    /// assert_eq!(HighMastery.decrease(), Some(Mastery));
    /// assert_eq!(GrandMastery.decrease(), Some(HighMastery));
    /// ```
    #[must_use]
    pub const fn decrease(self) -> Option<Self> {
        match self {
            Self::Untrained => None,
            Self::Trained => Some(Self::Untrained),
            Self::Proficent => Some(Self::Trained),
            Self::Expertise => Some(Self::Proficent),
            Self::Mastery => Some(Self::Expertise),
            Self::HighMastery => Some(Self::Mastery),
            Self::GrandMastery => Some(Self::HighMastery),
        }
    }

    /// Returns the previous proficency tier, wrapping around to
    /// `GrandMastery` if the current tier is `Untrained`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sw5e::Proficency::*;
    ///
    /// assert_eq!(Untrained.decrease_wrapping(), GrandMastery);
    /// assert_eq!(Trained.decrease_wrapping(), Untrained);
    /// ```
    #[must_use]
    pub const fn decrease_wrapping(self) -> Self {
        match self.decrease() {
            Some(prev) => prev,
            None => Self::GrandMastery,
        }
    }

    /// The portion of `proficiency_bonus` this tier adds to a roll.
    ///
    /// `Untrained` adds nothing, `Trained` adds half the bonus rounded
    /// down, `Proficent` adds the full bonus, and every tier from
    /// `Expertise` up adds twice the bonus.
    ///
    /// # Examples
    ///
    /// ```
    /// use sw5e::Proficency::*;
    ///
    /// assert_eq!(Untrained.bonus(3), 0);
    /// assert_eq!(Trained.bonus(3), 1);
    /// assert_eq!(Proficent.bonus(3), 3);
    /// assert_eq!(Expertise.bonus(3), 6);
    /// assert_eq!(GrandMastery.bonus(3), 6);
    /// ```
    #[must_use]
    pub const fn bonus(self, proficiency_bonus: i8) -> i8 {
        match self {
            Self::Untrained => 0,
            Self::Trained => proficiency_bonus / 2,
            Self::Proficent => proficiency_bonus,
            Self::Expertise | Self::Mastery | Self::HighMastery | Self::GrandMastery => {
                proficiency_bonus * 2
            }
        }
    }

    /// Whether rolls at this tier are always made with advantage.
    ///
    /// True for `Mastery` and every tier above it.
    #[must_use]
    pub const fn grants_advantage(self) -> bool {
        matches!(self, Self::Mastery | Self::HighMastery | Self::GrandMastery)
    }

    /// How many of the advantage dice may be rerolled once at this tier.
    ///
    /// `HighMastery` may reroll one die, `GrandMastery` may reroll each
    /// of the two dice; every other tier rerolls nothing. The new rolls
    /// must be used.
    #[must_use]
    pub const fn rerolls(self) -> u8 {
        match self {
            Self::HighMastery => 1,
            Self::GrandMastery => 2,
            _ => 0,
        }
    }

    /// Whether this tier can be obtained in the given training target.
    ///
    /// Weapons cap out at `Proficent`; skills, tools, and saving throws
    /// can be trained all the way to `GrandMastery`. `Untrained` is the
    /// universal default and is allowed everywhere.
    ///
    /// # Examples
    ///
    /// ```
    /// use sw5e::{Proficency, TrainingKind};
    ///
    /// assert!(Proficency::Proficent.allowed_for(TrainingKind::Weapon));
    /// assert!(!Proficency::Expertise.allowed_for(TrainingKind::Weapon));
    /// assert!(Proficency::GrandMastery.allowed_for(TrainingKind::Skill));
    /// ```
    #[must_use]
    pub const fn allowed_for(self, target: TrainingKind) -> bool {
        match self {
            Self::Untrained | Self::Trained | Self::Proficent => true,
            Self::Expertise | Self::Mastery | Self::HighMastery | Self::GrandMastery => {
                !matches!(target, TrainingKind::Weapon)
            }
        }
    }
}

impl fmt::Display for Proficency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Untrained => "Untrained",
            Self::Trained => "Trained",
            Self::Proficent => "Proficent",
            Self::Expertise => "Expertise",
            Self::Mastery => "Mastery",
            Self::HighMastery => "High Mastery",
            Self::GrandMastery => "Grand Mastery",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for TrainingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Skill => "skills",
            Self::Tool => "tools",
            Self::SavingThrow => "saving throws",
            Self::Weapon => "weapons",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_untrained() {
        assert_eq!(Proficency::default(), Proficency::Untrained);
    }

    #[test]
    fn test_bonus_table() {
        // Every tier at every proficiency bonus a character can have.
        for pb in 2..=6i8 {
            assert_eq!(Proficency::Untrained.bonus(pb), 0);
            assert_eq!(Proficency::Trained.bonus(pb), pb / 2);
            assert_eq!(Proficency::Proficent.bonus(pb), pb);
            assert_eq!(Proficency::Expertise.bonus(pb), pb * 2);
            assert_eq!(Proficency::Mastery.bonus(pb), pb * 2);
            assert_eq!(Proficency::HighMastery.bonus(pb), pb * 2);
            assert_eq!(Proficency::GrandMastery.bonus(pb), pb * 2);
        }
    }

    #[test]
    fn test_half_bonus_rounds_down() {
        assert_eq!(Proficency::Trained.bonus(3), 1);
        assert_eq!(Proficency::Trained.bonus(5), 2);
    }

    #[test]
    fn test_advantage_starts_at_mastery() {
        assert!(!Proficency::Untrained.grants_advantage());
        assert!(!Proficency::Proficent.grants_advantage());
        assert!(!Proficency::Expertise.grants_advantage());
        assert!(Proficency::Mastery.grants_advantage());
        assert!(Proficency::HighMastery.grants_advantage());
        assert!(Proficency::GrandMastery.grants_advantage());
    }

    #[test]
    fn test_reroll_entitlements() {
        assert_eq!(Proficency::Mastery.rerolls(), 0);
        assert_eq!(Proficency::HighMastery.rerolls(), 1);
        assert_eq!(Proficency::GrandMastery.rerolls(), 2);
    }

    #[test]
    fn test_weapons_cap_at_proficent() {
        assert!(Proficency::Trained.allowed_for(TrainingKind::Weapon));
        assert!(Proficency::Proficent.allowed_for(TrainingKind::Weapon));
        assert!(!Proficency::Expertise.allowed_for(TrainingKind::Weapon));
        assert!(!Proficency::GrandMastery.allowed_for(TrainingKind::Weapon));
    }

    #[test]
    fn test_skills_allow_every_tier() {
        let mut tier = Proficency::Untrained;
        loop {
            assert!(tier.allowed_for(TrainingKind::Skill));
            assert!(tier.allowed_for(TrainingKind::Tool));
            assert!(tier.allowed_for(TrainingKind::SavingThrow));
            match tier.increase() {
                Some(next) => tier = next,
                None => break,
            }
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Proficency::HighMastery.to_string(), "High Mastery");
        assert_eq!(TrainingKind::SavingThrow.to_string(), "saving throws");
    }
}
