//! Rumors gathered around London and the secrets verified from them.
//!
//! Recording a rumor is deterministic. Verification walks the unverified
//! rumors in the order they were recorded and asks the
//! [`VerificationPolicy`] once per rumor; that single decision point is the
//! only place chance enters the system.

use std::fmt;

use bw_core::{LocationId, RandomSource};
use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// Identifier of a recorded rumor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RumorId(pub u32);

impl fmt::Display for RumorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Something overheard at a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rumor {
    /// Identifier.
    pub id: RumorId,
    /// Where it was heard.
    pub location: LocationId,
    /// What was heard.
    pub note: String,
    /// Whether it has been turned into a secret.
    pub verified: bool,
}

/// A verified rumor. Secrets are never removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Secret {
    /// Identifier, in order of discovery.
    pub id: u32,
    /// The confirmed text.
    pub text: String,
    /// The rumor it came from.
    pub rumor: RumorId,
    /// Where the rumor was heard.
    pub location: LocationId,
    /// Day it was confirmed.
    pub day: u32,
}

/// How likely a rumor is to check out, and what it is worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationPolicy {
    /// Weight of the "verified" outcome.
    pub success_weight: u32,
    /// Weight of the "stays unverified" outcome.
    pub failure_weight: u32,
    /// Knowledge granted per new secret.
    pub knowledge_per_secret: u32,
}

impl Default for VerificationPolicy {
    fn default() -> Self {
        Self {
            success_weight: 2,
            failure_weight: 1,
            knowledge_per_secret: 10,
        }
    }
}

impl VerificationPolicy {
    /// Decide one rumor. Consumes exactly one draw.
    pub fn decide(&self, rng: &mut RandomSource) -> MechResult<bool> {
        let outcomes = [(true, self.success_weight), (false, self.failure_weight)];
        Ok(*rng.weighted_choice(&outcomes)?)
    }
}

/// Result of one verification pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Verification {
    /// Secrets confirmed in this pass.
    pub secrets: Vec<Secret>,
    /// Rumors checked in this pass.
    pub checked: usize,
    /// Knowledge to grant for the new secrets.
    pub knowledge_gained: u32,
}

/// Rumors and secrets of one session.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Investigation {
    rumors: Vec<Rumor>,
    secrets: Vec<Secret>,
    #[serde(skip)]
    next_rumor: u32,
}

impl Investigation {
    /// An empty investigation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an unverified rumor.
    pub fn record_rumor(&mut self, location: LocationId, note: &str) -> MechResult<RumorId> {
        let note = note.trim();
        if note.is_empty() {
            return Err(MechError::Validation("rumor note cannot be empty".into()));
        }
        self.next_rumor += 1;
        let id = RumorId(self.next_rumor);
        self.rumors.push(Rumor {
            id,
            location,
            note: note.to_string(),
            verified: false,
        });
        Ok(id)
    }

    /// Remove an unverified rumor.
    pub fn discard_rumor(&mut self, id: RumorId) -> MechResult<Rumor> {
        let index = self
            .rumors
            .iter()
            .position(|r| r.id == id && !r.verified)
            .ok_or_else(|| MechError::NotFound {
                kind: "unverified rumor",
                id: id.to_string(),
            })?;
        Ok(self.rumors.remove(index))
    }

    /// Try to verify every unverified rumor.
    ///
    /// All decisions are drawn before anything is written, so an error
    /// leaves the rumors untouched.
    pub fn verify_rumors(
        &mut self,
        rng: &mut RandomSource,
        policy: &VerificationPolicy,
        day: u32,
    ) -> MechResult<Verification> {
        let decisions = self
            .rumors
            .iter()
            .enumerate()
            .filter(|(_, r)| !r.verified)
            .map(|(i, _)| policy.decide(rng).map(|ok| (i, ok)))
            .collect::<MechResult<Vec<_>>>()?;

        let mut result = Verification {
            checked: decisions.len(),
            ..Verification::default()
        };
        for (index, verified) in decisions {
            if !verified {
                continue;
            }
            let rumor = &mut self.rumors[index];
            rumor.verified = true;
            let secret = Secret {
                id: self.secrets.len() as u32 + 1,
                text: rumor.note.clone(),
                rumor: rumor.id,
                location: rumor.location,
                day,
            };
            self.secrets.push(secret.clone());
            result.secrets.push(secret);
            result.knowledge_gained += policy.knowledge_per_secret;
        }
        Ok(result)
    }

    /// All rumors, in recording order.
    pub fn rumors(&self) -> &[Rumor] {
        &self.rumors
    }

    /// All secrets, in discovery order.
    pub fn secrets(&self) -> &[Secret] {
        &self.secrets
    }

    /// Number of rumors still awaiting verification.
    pub fn unverified_count(&self) -> usize {
        self.rumors.iter().filter(|r| !r.verified).count()
    }
}
