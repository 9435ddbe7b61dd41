//! Training sheets: what a character is trained in, and at what tier

use indexmap::IndexMap;

use crate::ability::{Ability, AbilityScores};
use crate::check::{check_modifier, RollMode};
use crate::error::{Result, Sw5eError};
use crate::level::CharacterLevel;
use crate::proficency::{Proficency, TrainingKind};
use crate::skill::Skill;

/// The training section of a character sheet.
///
/// Records the proficency tier held in each skill, each saving throw,
/// and in weapons. Entries never written read back as
/// [`Proficency::Untrained`], and every setter enforces the tier's
/// applicability rules, so a sheet can only hold legal training.
///
/// # Examples
///
/// ```
/// use sw5e::{
///     AbilityScores, CharacterLevel, Proficency, Skill, TrainingSheet,
/// };
///
/// let mut sheet = TrainingSheet::new();
/// sheet.set_skill(Skill::Stealth, Proficency::Expertise).unwrap();
///
/// let scores = AbilityScores::new(10, 16, 10, 10, 10, 10).unwrap();
/// let level = CharacterLevel::new(5).unwrap();
///
/// // DEX +3, Expertise doubles the +3 proficiency bonus.
/// assert_eq!(sheet.skill_modifier(Skill::Stealth, &scores, level), 9);
/// assert_eq!(sheet.skill(Skill::Perception), Proficency::Untrained);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainingSheet {
    skills: IndexMap<Skill, Proficency>,
    saving_throws: IndexMap<Ability, Proficency>,
    weapon: Proficency,
}

impl TrainingSheet {
    /// Creates a sheet with no training recorded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the tier held in a skill.
    ///
    /// # Errors
    ///
    /// Returns [`Sw5eError::TrainingNotAllowed`] if the tier cannot be
    /// obtained in skills; the sheet is left unchanged.
    pub fn set_skill(&mut self, skill: Skill, level: Proficency) -> Result<()> {
        Self::check_allowed(level, TrainingKind::Skill)?;
        self.skills.insert(skill, level);
        Ok(())
    }

    /// Builder form of [`set_skill`](Self::set_skill).
    pub fn with_skill(mut self, skill: Skill, level: Proficency) -> Result<Self> {
        self.set_skill(skill, level)?;
        Ok(self)
    }

    /// The tier held in a skill; `Untrained` if never set.
    #[must_use]
    pub fn skill(&self, skill: Skill) -> Proficency {
        self.skills.get(&skill).copied().unwrap_or_default()
    }

    /// Records the tier held in a saving throw.
    ///
    /// # Errors
    ///
    /// Returns [`Sw5eError::TrainingNotAllowed`] if the tier cannot be
    /// obtained in saving throws; the sheet is left unchanged.
    pub fn set_saving_throw(&mut self, ability: Ability, level: Proficency) -> Result<()> {
        Self::check_allowed(level, TrainingKind::SavingThrow)?;
        self.saving_throws.insert(ability, level);
        Ok(())
    }

    /// Builder form of [`set_saving_throw`](Self::set_saving_throw).
    pub fn with_saving_throw(mut self, ability: Ability, level: Proficency) -> Result<Self> {
        self.set_saving_throw(ability, level)?;
        Ok(self)
    }

    /// The tier held in a saving throw; `Untrained` if never set.
    #[must_use]
    pub fn saving_throw(&self, ability: Ability) -> Proficency {
        self.saving_throws.get(&ability).copied().unwrap_or_default()
    }

    /// Records the tier held in weapons.
    ///
    /// # Errors
    ///
    /// Returns [`Sw5eError::TrainingNotAllowed`] for `Expertise` and
    /// above: weapon training caps at `Proficent`.
    pub fn set_weapon(&mut self, level: Proficency) -> Result<()> {
        Self::check_allowed(level, TrainingKind::Weapon)?;
        self.weapon = level;
        Ok(())
    }

    /// The tier held in weapons.
    #[must_use]
    pub const fn weapon(&self) -> Proficency {
        self.weapon
    }

    /// The total modifier for a check with the given skill.
    ///
    /// Adds the governing ability's modifier and the recorded tier's
    /// share of the level's proficiency bonus.
    #[must_use]
    pub fn skill_modifier(
        &self,
        skill: Skill,
        scores: &AbilityScores,
        level: CharacterLevel,
    ) -> i8 {
        check_modifier(self.skill(skill), level, scores.get(skill.ability()))
    }

    /// The total modifier for a saving throw with the given ability.
    #[must_use]
    pub fn save_modifier(
        &self,
        ability: Ability,
        scores: &AbilityScores,
        level: CharacterLevel,
    ) -> i8 {
        check_modifier(self.saving_throw(ability), level, scores.get(ability))
    }

    /// The roll mode a check with the given skill starts from:
    /// `Advantage` once the recorded tier grants it, `Normal` otherwise.
    #[must_use]
    pub fn skill_roll_mode(&self, skill: Skill) -> RollMode {
        if self.skill(skill).grants_advantage() {
            RollMode::Advantage
        } else {
            RollMode::Normal
        }
    }

    /// Recorded skill training, in the order it was written.
    pub fn skills(&self) -> impl Iterator<Item = (Skill, Proficency)> + '_ {
        self.skills.iter().map(|(&skill, &level)| (skill, level))
    }

    /// Recorded saving-throw training, in the order it was written.
    pub fn saving_throws(&self) -> impl Iterator<Item = (Ability, Proficency)> + '_ {
        self.saving_throws
            .iter()
            .map(|(&ability, &level)| (ability, level))
    }

    fn check_allowed(level: Proficency, target: TrainingKind) -> Result<()> {
        if level.allowed_for(target) {
            Ok(())
        } else {
            Err(Sw5eError::TrainingNotAllowed { level, target })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_entries_read_untrained() {
        let sheet = TrainingSheet::new();
        assert_eq!(sheet.skill(Skill::Athletics), Proficency::Untrained);
        assert_eq!(sheet.saving_throw(Ability::Wisdom), Proficency::Untrained);
        assert_eq!(sheet.weapon(), Proficency::Untrained);
    }

    #[test]
    fn test_weapon_rejects_expertise() {
        let mut sheet = TrainingSheet::new();
        assert_eq!(
            sheet.set_weapon(Proficency::Expertise),
            Err(Sw5eError::TrainingNotAllowed {
                level: Proficency::Expertise,
                target: TrainingKind::Weapon,
            })
        );
        // Rejected set leaves the sheet unchanged.
        assert_eq!(sheet.weapon(), Proficency::Untrained);
    }

    #[test]
    fn test_builder_chain() {
        let sheet = TrainingSheet::new()
            .with_skill(Skill::Piloting, Proficency::Proficent)
            .unwrap()
            .with_saving_throw(Ability::Dexterity, Proficency::Trained)
            .unwrap();
        assert_eq!(sheet.skill(Skill::Piloting), Proficency::Proficent);
        assert_eq!(sheet.saving_throw(Ability::Dexterity), Proficency::Trained);
    }

    #[test]
    fn test_iteration_keeps_insertion_order() {
        let mut sheet = TrainingSheet::new();
        sheet.set_skill(Skill::Stealth, Proficency::Trained).unwrap();
        sheet
            .set_skill(Skill::Acrobatics, Proficency::Proficent)
            .unwrap();
        let recorded: Vec<Skill> = sheet.skills().map(|(skill, _)| skill).collect();
        assert_eq!(recorded, vec![Skill::Stealth, Skill::Acrobatics]);
    }

    #[test]
    fn test_mastery_grants_advantage_on_checks() {
        let mut sheet = TrainingSheet::new();
        sheet.set_skill(Skill::Lore, Proficency::Mastery).unwrap();
        assert_eq!(sheet.skill_roll_mode(Skill::Lore), RollMode::Advantage);
        assert_eq!(sheet.skill_roll_mode(Skill::Nature), RollMode::Normal);
    }
}
