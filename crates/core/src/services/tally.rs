//! Tally engine.
//!
//! Aggregates valid ballots into per-candidate counts and produces a
//! signed results snapshot. Weights are summed rather than rows
//! counted so weighted ballots aggregate correctly; `total_votes` is
//! the number of counted ballot rows.

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset, Utc};
use openballot_common::{AppError, AppResult};
use openballot_db::{
    entities::{candidate, vote, voting_results},
    repositories::{CandidateRepository, ResultsRepository, SessionRepository, VoteRepository},
};
use rust_decimal::Decimal;
use serde_json::json;
use sha2::Sha256;

/// One candidate's aggregate in a computed tally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateTally {
    /// The candidate row.
    pub candidate: candidate::Model,
    /// Summed weight of valid ballots for this candidate.
    pub tally: Decimal,
}

/// Tally engine service.
#[derive(Clone)]
pub struct TallyService {
    session_repo: SessionRepository,
    candidate_repo: CandidateRepository,
    vote_repo: VoteRepository,
    results_repo: ResultsRepository,
    signing_key: String,
}

impl TallyService {
    /// Create a new tally service.
    #[must_use]
    pub const fn new(
        session_repo: SessionRepository,
        candidate_repo: CandidateRepository,
        vote_repo: VoteRepository,
        results_repo: ResultsRepository,
        signing_key: String,
    ) -> Self {
        Self {
            session_repo,
            candidate_repo,
            vote_repo,
            results_repo,
            signing_key,
        }
    }

    /// Compute a results snapshot for a session and persist it,
    /// replacing any earlier snapshot.
    ///
    /// Recomputation is idempotent: with no new votes the payload is
    /// identical; only the timestamp and token change.
    pub async fn compute(&self, session_id: &str) -> AppResult<voting_results::Model> {
        let session = self.session_repo.get_by_id(session_id).await?;

        let roster = self.candidate_repo.find_by_session(session_id).await?;
        let roster_ids: Vec<String> = roster.iter().map(|c| c.id.clone()).collect();

        // One scan over all valid ballots for the whole roster; the
        // snapshot must not interleave with concurrent casts.
        let votes = self.vote_repo.find_valid_by_candidates(&roster_ids).await?;
        let total_votes = votes.len() as i64;

        let ranked = rank_tallies(&roster, &votes);
        let payload = json!(
            ranked
                .iter()
                .map(|entry| {
                    json!({
                        "candidateId": entry.candidate.id,
                        "tally": entry.tally.to_string(),
                    })
                })
                .collect::<Vec<_>>()
        );

        let generated_at: DateTime<FixedOffset> = Utc::now().into();
        let payload_text = serde_json::to_string(&payload)
            .map_err(|e| AppError::Internal(format!("Failed to serialize payload: {e}")))?;
        let signature = sign_payload(&self.signing_key, &session.id, &generated_at, &payload_text);

        let snapshot = voting_results::Model {
            session_id: session.id,
            generated_at,
            total_votes,
            payload,
            signature: Some(signature),
        };

        self.results_repo.upsert(snapshot).await
    }

    /// Per-candidate aggregates in ranked order, without persisting.
    pub async fn roster_tallies(&self, session_id: &str) -> AppResult<Vec<CandidateTally>> {
        self.session_repo.get_by_id(session_id).await?;

        let roster = self.candidate_repo.find_by_session(session_id).await?;
        let roster_ids: Vec<String> = roster.iter().map(|c| c.id.clone()).collect();
        let votes = self.vote_repo.find_valid_by_candidates(&roster_ids).await?;

        Ok(rank_tallies(&roster, &votes))
    }

    /// Fetch the persisted snapshot for a session, if any.
    pub async fn find_snapshot(&self, session_id: &str) -> AppResult<Option<voting_results::Model>> {
        self.results_repo.find_by_session(session_id).await
    }

    /// Verify the integrity token of a persisted snapshot.
    ///
    /// Detects post-hoc tampering with the stored payload; it is not
    /// a ballot-secrecy mechanism.
    pub fn verify(&self, snapshot: &voting_results::Model) -> AppResult<bool> {
        let Some(ref signature) = snapshot.signature else {
            return Ok(false);
        };

        let payload_text = serde_json::to_string(&snapshot.payload)
            .map_err(|e| AppError::Internal(format!("Failed to serialize payload: {e}")))?;
        let expected = sign_payload(
            &self.signing_key,
            &snapshot.session_id,
            &snapshot.generated_at,
            &payload_text,
        );

        Ok(*signature == expected)
    }
}

/// Sum valid ballot weights per candidate and order the roster by
/// descending tally, breaking ties by insertion order.
///
/// Candidates with no ballots appear with a tally of zero.
#[must_use]
pub fn rank_tallies(roster: &[candidate::Model], votes: &[vote::Model]) -> Vec<CandidateTally> {
    let mut sums: HashMap<&str, Decimal> = HashMap::new();
    for vote in votes {
        *sums.entry(vote.candidate_id.as_str()).or_insert(Decimal::ZERO) += vote.weight;
    }

    let mut entries: Vec<(usize, CandidateTally)> = roster
        .iter()
        .enumerate()
        .map(|(index, candidate)| {
            let tally = sums
                .get(candidate.id.as_str())
                .copied()
                .unwrap_or(Decimal::ZERO);
            (
                index,
                CandidateTally {
                    candidate: candidate.clone(),
                    tally,
                },
            )
        })
        .collect();

    entries.sort_by(|(ia, a), (ib, b)| b.tally.cmp(&a.tally).then(ia.cmp(ib)));
    entries.into_iter().map(|(_, entry)| entry).collect()
}

#[allow(clippy::expect_used)] // HMAC accepts any key size, this cannot fail
fn sign_payload(
    key: &str,
    session_id: &str,
    generated_at: &DateTime<FixedOffset>,
    payload_text: &str,
) -> String {
    use hmac::{Hmac, Mac};

    type HmacSha256 = Hmac<Sha256>;

    let mut mac =
        HmacSha256::new_from_slice(key.as_bytes()).expect("HMAC can take key of any size");
    mac.update(session_id.as_bytes());
    mac.update(b"\n");
    mac.update(generated_at.to_rfc3339().as_bytes());
    mac.update(b"\n");
    mac.update(payload_text.as_bytes());
    let result = mac.finalize();

    format!("sha256={}", hex::encode(result.into_bytes()))
}
