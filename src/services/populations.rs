use log::{debug, warn};

use crate::data::populations::{
    starter_modifications, CONDITION_GUIDELINES, POPULATION_GUIDELINES, STARTER_PROGRESSION_RULE, STARTER_STAGES,
};
use crate::errors::AppError;
use crate::models::guideline::AgeBracket;
use crate::models::population::{
    AdaptedPrescription, ChronicCondition, ConditionGuideline, ConditionSection, PopulationGuideline,
    SpecialPopulation, StarterProgram,
};

const SEDENTARY_LEVEL: &str = "sedentary";

pub fn population_guideline(population: SpecialPopulation) -> Result<&'static PopulationGuideline, AppError> {
    POPULATION_GUIDELINES.get(&population).ok_or_else(|| {
        warn!("No guideline table for population '{}'", population.key());
        AppError::NotFound(format!("No guidelines for population '{}'", population.key()))
    })
}

pub fn condition_guideline(condition: ChronicCondition) -> Result<&'static ConditionGuideline, AppError> {
    CONDITION_GUIDELINES.get(&condition).ok_or_else(|| {
        warn!("No guideline table for condition '{}'", condition.key());
        AppError::NotFound(format!("No guidelines for condition '{}'", condition.key()))
    })
}

fn starter_program(population: SpecialPopulation) -> StarterProgram {
    StarterProgram {
        stages: STARTER_STAGES,
        progression_rule: STARTER_PROGRESSION_RULE,
        modifications: starter_modifications(population),
    }
}

/// Population guidance, optionally narrowed by a chronic condition, with a
/// starter program for sedentary individuals.
pub fn create_adapted_prescription(
    population: SpecialPopulation,
    age: i32,
    condition: Option<ChronicCondition>,
    activity_level: &str,
) -> Result<AdaptedPrescription, AppError> {
    let base = population_guideline(population)?;

    let chronic_condition = condition
        .map(|condition| {
            condition_guideline(condition).map(|info| ConditionSection {
                condition,
                benefits: info.exercise_benefits,
                specific_recommendations: info.recommendations,
                additional_precautions: info.precautions,
                additional_contraindications: info.contraindications,
            })
        })
        .transpose()?;

    let starter_program = activity_level
        .eq_ignore_ascii_case(SEDENTARY_LEVEL)
        .then(|| starter_program(population));

    debug!(
        "Adapted prescription for {} (age {}), starter program: {}",
        population.key(),
        age,
        starter_program.is_some()
    );

    Ok(AdaptedPrescription {
        population: base.population,
        age_group: AgeBracket::from_age(age).key(),
        medical_clearance_required: base.medical_clearance,
        general_recommendations: base.general_recommendations,
        recommended_activities: base.specific_activities,
        contraindications: base.contraindications,
        precautions: base.precautions,
        progression: base.progression_notes,
        chronic_condition,
        starter_program,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chronic_disease_population_is_not_found() {
        let result = create_adapted_prescription(SpecialPopulation::ChronicDisease, 50, None, "sedentary");
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn undocumented_condition_is_not_found() {
        assert!(matches!(condition_guideline(ChronicCondition::Copd), Err(AppError::NotFound(_))));
        let result = create_adapted_prescription(
            SpecialPopulation::Sedentary,
            50,
            Some(ChronicCondition::Osteoporosis),
            "sedentary",
        );
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn pregnancy_starter_program_carries_modifications() {
        let prescription =
            create_adapted_prescription(SpecialPopulation::Pregnancy, 30, None, "sedentary").unwrap();

        assert_eq!(prescription.population, "Pregnant Women");
        assert_eq!(prescription.age_group, "adults");
        assert!(prescription.medical_clearance_required);
        assert!(prescription.chronic_condition.is_none());

        let starter = prescription.starter_program.unwrap();
        assert_eq!(starter.stages.len(), 3);
        assert_eq!(starter.modifications.map(|m| m.len()), Some(3));
    }

    #[test]
    fn active_sedentary_population_skips_starter() {
        let prescription = create_adapted_prescription(
            SpecialPopulation::Sedentary,
            70,
            Some(ChronicCondition::Diabetes),
            "active",
        )
        .unwrap();

        assert_eq!(prescription.age_group, "older_adults");
        assert!(prescription.starter_program.is_none());
        let section = prescription.chronic_condition.unwrap();
        assert_eq!(section.condition, ChronicCondition::Diabetes);
        assert_eq!(section.benefits[0], "Improved glucose control");
    }

    #[test]
    fn postpartum_starter_has_no_modifications() {
        let prescription =
            create_adapted_prescription(SpecialPopulation::Postpartum, 28, None, "Sedentary").unwrap();
        let starter = prescription.starter_program.unwrap();
        assert_eq!(starter.modifications, None);
    }

    #[test]
    fn activity_level_ignores_ascii_case() {
        for level in ["sedentary", "Sedentary", "SEDENTARY"] {
            let prescription =
                create_adapted_prescription(SpecialPopulation::Sedentary, 40, None, level).unwrap();
            assert!(prescription.starter_program.is_some(), "level {}", level);
        }
        let prescription =
            create_adapted_prescription(SpecialPopulation::Sedentary, 40, None, "sedentary-ish").unwrap();
        assert!(prescription.starter_program.is_none());
    }
}
