use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::traits::{
    CommunicationStyle, DecisionStyle, ParseTraitError, Polarity, RelationshipStyle,
};
use crate::quiz::Axis;

/// One trait per axis; the classifier's output.
///
/// Exactly 27 profiles exist. `all()` enumerates them in a stable
/// order so exhaustive sweeps over the type universe are cheap.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TraitProfile {
    pub communication: CommunicationStyle,
    pub decision: DecisionStyle,
    pub relationship: RelationshipStyle,
}

impl TraitProfile {
    pub fn new(
        communication: CommunicationStyle,
        decision: DecisionStyle,
        relationship: RelationshipStyle,
    ) -> Self {
        Self {
            communication,
            decision,
            relationship,
        }
    }

    /// Profile from one polarity per axis.
    pub fn from_polarities(communication: Polarity, decision: Polarity, relationship: Polarity) -> Self {
        Self {
            communication: CommunicationStyle::from_polarity(communication),
            decision: DecisionStyle::from_polarity(decision),
            relationship: RelationshipStyle::from_polarity(relationship),
        }
    }

    /// Canonical code for this profile.
    pub fn code(self) -> TypeCode {
        TypeCode(self)
    }

    /// Polarity of this profile's trait on `axis`.
    pub fn polarity(self, axis: Axis) -> Polarity {
        match axis {
            Axis::Communication => self.communication.polarity(),
            Axis::Decision => self.decision.polarity(),
            Axis::Relationship => self.relationship.polarity(),
        }
    }

    /// Every profile in the 27-entry universe, in a stable order.
    pub fn all() -> impl Iterator<Item = TraitProfile> {
        CommunicationStyle::ALL.into_iter().flat_map(|communication| {
            DecisionStyle::ALL.into_iter().flat_map(move |decision| {
                RelationshipStyle::ALL
                    .into_iter()
                    .map(move |relationship| TraitProfile {
                        communication,
                        decision,
                        relationship,
                    })
            })
        })
    }
}

/// Canonical key of a personality type: the three trait labels joined
/// with `-`, e.g. `assertive-logical-independent`.
///
/// Internally this is just the profile, so a parsed code is already a
/// validated one and the universe stays closed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct TypeCode(TraitProfile);

impl TypeCode {
    pub fn profile(self) -> TraitProfile {
        self.0
    }
}

impl From<TraitProfile> for TypeCode {
    fn from(profile: TraitProfile) -> Self {
        TypeCode(profile)
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.0.communication.label(),
            self.0.decision.label(),
            self.0.relationship.label()
        )
    }
}

impl FromStr for TypeCode {
    type Err = ParseTraitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, '-');
        let (Some(comm), Some(dec), Some(rel)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(ParseTraitError::MalformedCode {
                code: s.to_string(),
            });
        };
        Ok(TypeCode(TraitProfile {
            communication: comm.parse()?,
            decision: dec.parse()?,
            relationship: rel.parse()?,
        }))
    }
}

impl TryFrom<String> for TypeCode {
    type Error = ParseTraitError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeCode> for String {
    fn from(code: TypeCode) -> Self {
        code.to_string()
    }
}
