use std::collections::HashMap;

use serde::Deserialize;

use crate::errors::CatalogError;
use crate::models::PersonalityType;
use crate::profile::{
    CommunicationStyle, DecisionStyle, RelationshipStyle, TraitProfile, TypeCode,
};
use crate::quiz::QuestionSetSize;

/// Read-only map from type code to personality type, one catalog per
/// question-set size.
///
/// A catalog loaded from JSON may be partial; the classifier falls
/// back to [`synthesize_type`] for absent codes, so a gap degrades
/// content, never correctness. `validate` is the strict completeness
/// check for deployments that require authored text for all 27 codes.
#[derive(Debug, Clone)]
pub struct TypeCatalog {
    size: QuestionSetSize,
    entries: HashMap<TypeCode, PersonalityType>,
}

/// Authored catalog entry as it appears in JSON. The map key carries
/// the code, so entries hold narrative fields only.
#[derive(Debug, Deserialize)]
struct TypeEntry {
    name: String,
    icon: String,
    description: String,
    #[serde(default)]
    strengths: Vec<String>,
    #[serde(default)]
    weaknesses: Vec<String>,
}

impl TypeCatalog {
    /// Complete catalog generated compositionally, no authored data.
    pub fn builtin(size: QuestionSetSize) -> Self {
        let entries = TraitProfile::all()
            .map(|profile| (profile.code(), synthesize_type(profile)))
            .collect();
        Self { size, entries }
    }

    /// Parse an authored catalog from a JSON map of code to entry.
    pub fn from_json_str(size: QuestionSetSize, json: &str) -> Result<Self, CatalogError> {
        let raw: HashMap<String, TypeEntry> = serde_json::from_str(json)?;
        let mut entries = HashMap::with_capacity(raw.len());
        for (key, entry) in raw {
            let code: TypeCode = key.parse().map_err(CatalogError::from)?;
            entries.insert(
                code,
                PersonalityType {
                    code,
                    name: entry.name,
                    icon: entry.icon,
                    description: entry.description,
                    traits: code.profile(),
                    strengths: entry.strengths,
                    weaknesses: entry.weaknesses,
                },
            );
        }
        Ok(Self { size, entries })
    }

    /// Require all 27 codes to be present.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for profile in TraitProfile::all() {
            if !self.entries.contains_key(&profile.code()) {
                return Err(CatalogError::MissingType {
                    code: profile.code().to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn get(&self, code: TypeCode) -> Option<&PersonalityType> {
        self.entries.get(&code)
    }

    pub fn size(&self) -> QuestionSetSize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build a personality type compositionally from its three traits.
///
/// This is both the classifier's fallback for catalog gaps and the
/// source of [`TypeCatalog::builtin`], so a synthesized type and a
/// builtin entry for the same profile are identical.
pub fn synthesize_type(profile: TraitProfile) -> PersonalityType {
    let name = format!(
        "{} {} {}",
        comm_word(profile.communication),
        decision_word(profile.decision),
        relationship_word(profile.relationship)
    );
    let description = format!(
        "{} {} {}",
        comm_sentence(profile.communication),
        decision_sentence(profile.decision),
        relationship_sentence(profile.relationship)
    );
    PersonalityType {
        code: profile.code(),
        name,
        icon: icon_for(profile.relationship).to_string(),
        description,
        traits: profile,
        strengths: vec![
            comm_strength(profile.communication).to_string(),
            decision_strength(profile.decision).to_string(),
            relationship_strength(profile.relationship).to_string(),
        ],
        weaknesses: vec![
            comm_weakness(profile.communication).to_string(),
            decision_weakness(profile.decision).to_string(),
            relationship_weakness(profile.relationship).to_string(),
        ],
    }
}

fn comm_word(style: CommunicationStyle) -> &'static str {
    match style {
        CommunicationStyle::Assertive => "Direct",
        CommunicationStyle::Receptive => "Attentive",
        CommunicationStyle::Balanced => "Measured",
    }
}

fn decision_word(style: DecisionStyle) -> &'static str {
    match style {
        DecisionStyle::Logical => "Analytical",
        DecisionStyle::Intuitive => "Instinctive",
        DecisionStyle::Flexible => "Versatile",
    }
}

fn relationship_word(style: RelationshipStyle) -> &'static str {
    match style {
        RelationshipStyle::Independent => "Pioneer",
        RelationshipStyle::Devoted => "Anchor",
        RelationshipStyle::Adaptive => "Harmonizer",
    }
}

fn icon_for(style: RelationshipStyle) -> &'static str {
    match style {
        RelationshipStyle::Independent => "🦅",
        RelationshipStyle::Devoted => "🌳",
        RelationshipStyle::Adaptive => "🌊",
    }
}

fn comm_sentence(style: CommunicationStyle) -> &'static str {
    match style {
        CommunicationStyle::Assertive => "Speaks up early and sets the conversational pace.",
        CommunicationStyle::Receptive => "Listens first and makes room for the quieter thought.",
        CommunicationStyle::Balanced => "Moves between speaking and listening as the moment asks.",
    }
}

fn decision_sentence(style: DecisionStyle) -> &'static str {
    match style {
        DecisionStyle::Logical => "Big choices get weighed against evidence before anything moves.",
        DecisionStyle::Intuitive => "Decisions ride on felt sense more than on analysis.",
        DecisionStyle::Flexible => "Keeps options open and fits the method to the call.",
    }
}

fn relationship_sentence(style: RelationshipStyle) -> &'static str {
    match style {
        RelationshipStyle::Independent => "In closeness, personal territory stays part of the map.",
        RelationshipStyle::Devoted => "In closeness, the shared world comes first.",
        RelationshipStyle::Adaptive => "In closeness, distance is tuned to the partner's rhythm.",
    }
}

fn comm_strength(style: CommunicationStyle) -> &'static str {
    match style {
        CommunicationStyle::Assertive => "Brings issues into the open before they fester",
        CommunicationStyle::Receptive => "Makes space where the quietest concern can be said",
        CommunicationStyle::Balanced => "Matches the other person's conversational energy",
    }
}

fn decision_strength(style: DecisionStyle) -> &'static str {
    match style {
        DecisionStyle::Logical => "Keeps big decisions anchored to facts",
        DecisionStyle::Intuitive => "Catches what the numbers miss",
        DecisionStyle::Flexible => "Adjusts course without drama",
    }
}

fn relationship_strength(style: RelationshipStyle) -> &'static str {
    match style {
        RelationshipStyle::Independent => "Brings a full life into the relationship",
        RelationshipStyle::Devoted => "Shows up, every time",
        RelationshipStyle::Adaptive => "Bends around the partner's season without losing shape",
    }
}

fn comm_weakness(style: CommunicationStyle) -> &'static str {
    match style {
        CommunicationStyle::Assertive => "Can fill silences the other person needed",
        CommunicationStyle::Receptive => "May sit on an objection until it hardens",
        CommunicationStyle::Balanced => "Can read as distant when a strong stance is wanted",
    }
}

fn decision_weakness(style: DecisionStyle) -> &'static str {
    match style {
        DecisionStyle::Logical => "May discount feelings that resist measurement",
        DecisionStyle::Intuitive => "Struggles to explain a no",
        DecisionStyle::Flexible => "Lets deadlines drift while options stay open",
    }
}

fn relationship_weakness(style: RelationshipStyle) -> &'static str {
    match style {
        RelationshipStyle::Independent => "Forgets that distance can read as absence",
        RelationshipStyle::Devoted => "Can mistake self-sacrifice for closeness",
        RelationshipStyle::Adaptive => "Own needs can vanish behind accommodation",
    }
}
