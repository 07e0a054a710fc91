use serde::Serialize;

use crate::models::activity::Intensity;
use crate::models::guideline::Note;

/// How one intensity class looks and feels in practice.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IntensityBand {
    pub intensity: Intensity,
    pub label: &'static str,
    pub met_range: &'static str,
    pub signs: &'static str,
    pub feel: &'static str,
    pub examples: &'static str,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Topic {
    pub topic: &'static str,
    pub points: &'static [Note],
}

/// Reference material on what a MET is and how to use it.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetIntroduction {
    pub basic_concepts: &'static [Note],
    pub intensity_classes: &'static [IntensityBand],
    pub applications: &'static [Topic],
    pub usage_notes: &'static [Note],
}

/// Short MET explanation attached to individualized prescriptions.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetExplanation {
    pub definition: &'static str,
    pub intensity_levels: &'static [Note],
    pub practical_uses: &'static str,
    pub prescription_guidance: &'static [Note],
}
