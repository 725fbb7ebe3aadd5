//! Ballot state transitions and winner selection.
//!
//! Nothing here touches storage. A transition takes the voter's current
//! [`VoteRecord`] and an intent, and returns the next record together with
//! every option delta it implies, so the caller can commit all of it or
//! nothing.

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::errors::{
    ERR_ALREADY_COMPLETED, ERR_ALREADY_RATED, ERR_ARITHMETIC_OVERFLOW, ERR_INVALID_OPTION,
    ERR_INVALID_SCORE, ERR_INVALID_SCORE_ARRAY_LENGTH,
};
use crate::types::{ProposalOption, VoteRecord};
use crate::{MAX_SCORE, MIN_SCORE};

pub enum BallotIntent<M: ManagedTypeApi> {
    /// Rate a single option.
    Rate { option_index: u64, score: u8 },
    /// Rate every option in one call, on a ballot with nothing rated yet.
    Complete { scores: ManagedVec<M, u8> },
}

/// Contribution of one rating to one option's aggregates.
#[derive(ManagedVecItem, Clone, Copy, PartialEq, Debug)]
pub struct OptionDelta {
    pub option_index: u64,
    /// `score * weight`, added to `total_score`.
    pub weighted_score: u64,
    /// Added to `weighted_vote_count`. `total_ratings` grows by one.
    pub weight: u64,
}

pub struct BallotTransition<M: ManagedTypeApi> {
    pub record: VoteRecord<M>,
    pub deltas: ManagedVec<M, OptionDelta>,
    /// True when this transition flipped `has_voted`.
    pub completed: bool,
}

pub fn is_valid_score(score: u8) -> bool {
    (MIN_SCORE..=MAX_SCORE).contains(&score)
}

pub fn apply<M: ManagedTypeApi>(
    record: VoteRecord<M>,
    intent: BallotIntent<M>,
) -> Result<BallotTransition<M>, &'static str> {
    if record.has_voted {
        return Err(ERR_ALREADY_COMPLETED);
    }

    match intent {
        BallotIntent::Rate {
            option_index,
            score,
        } => rate(record, option_index, score),
        BallotIntent::Complete { scores } => complete(record, scores),
    }
}

fn rate<M: ManagedTypeApi>(
    record: VoteRecord<M>,
    option_index: u64,
    score: u8,
) -> Result<BallotTransition<M>, &'static str> {
    let option_count = record.option_scores.len();
    // Compared before narrowing: usize is 32 bits on wasm32.
    if option_index >= option_count as u64 {
        return Err(ERR_INVALID_OPTION);
    }
    let option_index = option_index as usize;
    if !is_valid_score(score) {
        return Err(ERR_INVALID_SCORE);
    }
    if record.option_scores.get(option_index) != 0 {
        return Err(ERR_ALREADY_RATED);
    }

    let mut option_scores = ManagedVec::new();
    for (index, existing) in record.option_scores.iter().enumerate() {
        option_scores.push(if index == option_index { score } else { existing });
    }

    let rated_options_count = record.rated_options_count + 1;
    let completed = rated_options_count == option_count as u64;

    let mut deltas = ManagedVec::new();
    deltas.push(OptionDelta {
        option_index: option_index as u64,
        weighted_score: weighted_score(score, record.weight)?,
        weight: record.weight,
    });

    Ok(BallotTransition {
        record: VoteRecord {
            has_voted: completed,
            option_scores,
            rated_options_count,
            department_id: record.department_id,
            weight: record.weight,
        },
        deltas,
        completed,
    })
}

fn complete<M: ManagedTypeApi>(
    record: VoteRecord<M>,
    scores: ManagedVec<M, u8>,
) -> Result<BallotTransition<M>, &'static str> {
    let option_count = record.option_scores.len();
    if scores.len() != option_count {
        return Err(ERR_INVALID_SCORE_ARRAY_LENGTH);
    }
    if !scores.iter().all(is_valid_score) {
        return Err(ERR_INVALID_SCORE);
    }
    // Options rated one by one are already in the aggregates.
    if record.rated_options_count > 0 {
        return Err(ERR_ALREADY_RATED);
    }

    let mut deltas = ManagedVec::new();
    for (index, score) in scores.iter().enumerate() {
        deltas.push(OptionDelta {
            option_index: index as u64,
            weighted_score: weighted_score(score, record.weight)?,
            weight: record.weight,
        });
    }

    Ok(BallotTransition {
        record: VoteRecord {
            has_voted: true,
            option_scores: scores,
            rated_options_count: option_count as u64,
            department_id: record.department_id,
            weight: record.weight,
        },
        deltas,
        completed: true,
    })
}

fn weighted_score(score: u8, weight: u64) -> Result<u64, &'static str> {
    (score as u64)
        .checked_mul(weight)
        .ok_or(ERR_ARITHMETIC_OVERFLOW)
}

/// Adds `delta` to an option's aggregates, or `None` if a total would overflow.
pub fn accumulate<M: ManagedTypeApi>(
    option: &ProposalOption<M>,
    delta: &OptionDelta,
) -> Option<ProposalOption<M>> {
    Some(ProposalOption {
        description: option.description.clone(),
        total_score: option.total_score.checked_add(delta.weighted_score)?,
        total_ratings: option.total_ratings.checked_add(1)?,
        weighted_vote_count: option.weighted_vote_count.checked_add(delta.weight)?,
    })
}

/// Index of the strictly greatest total. Ties keep the lowest index.
pub fn select_winner<I>(total_scores: I) -> usize
where
    I: IntoIterator<Item = u64>,
{
    let mut winner = 0;
    let mut best = None;
    for (index, total) in total_scores.into_iter().enumerate() {
        if best.map_or(true, |max| total > max) {
            best = Some(total);
            winner = index;
        }
    }
    winner
}
