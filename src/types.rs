multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Roles: closed set, one explicit check per operation
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Role {
    /// Bootstrap super-admin. Manages role membership.
    DefaultAdmin,
    /// Manages departments, voters and proposals; finalizes results.
    Admin,
}

// ============================================================
// Department: weighted voting group, soft-deleted only
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Department<M: ManagedTypeApi> {
    pub id: u64,
    pub name: ManagedBuffer<M>,
    pub weight: u64,
    pub active: bool,
}

// ============================================================
// Voter: one department per identity
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub struct Voter {
    pub department_id: u64,
    pub registered: bool,
}

// ============================================================
// Proposal: time-boxed decision over two or more options
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Start time not reached yet.
    Upcoming,
    /// Inside [start_time, end_time], both ends inclusive.
    Active,
    /// Past end_time, waiting for an admin to finalize.
    Ended,
    /// Winner computed. Terminal state.
    Finalized,
}

impl ProposalStatus {
    pub fn at(now: u64, start_time: u64, end_time: u64, finalized: bool) -> Self {
        if finalized {
            ProposalStatus::Finalized
        } else if now < start_time {
            ProposalStatus::Upcoming
        } else if now <= end_time {
            ProposalStatus::Active
        } else {
            ProposalStatus::Ended
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub description: ManagedBuffer<M>,
    pub start_time: u64,
    pub end_time: u64,
    pub finalized: bool,
    /// Number of completed ballots.
    pub total_votes: u64,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn status_at(&self, now: u64) -> ProposalStatus {
        ProposalStatus::at(now, self.start_time, self.end_time, self.finalized)
    }
}

#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, PartialEq, Debug,
)]
pub struct ProposalOption<M: ManagedTypeApi> {
    pub description: ManagedBuffer<M>,
    /// Sum of score * weight over every rating of this option.
    pub total_score: u64,
    pub total_ratings: u64,
    /// Sum of the weights behind those ratings.
    pub weighted_vote_count: u64,
}

impl<M: ManagedTypeApi> ProposalOption<M> {
    pub fn new(description: ManagedBuffer<M>) -> Self {
        ProposalOption {
            description,
            total_score: 0,
            total_ratings: 0,
            weighted_vote_count: 0,
        }
    }
}

// ============================================================
// Vote Record: per proposal, per voter ballot
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct VoteRecord<M: ManagedTypeApi> {
    pub has_voted: bool,
    /// One entry per option, 0 = not rated yet.
    pub option_scores: ManagedVec<M, u8>,
    pub rated_options_count: u64,
    /// Department and weight frozen when the ballot was opened.
    pub department_id: u64,
    pub weight: u64,
}

impl<M: ManagedTypeApi> VoteRecord<M> {
    /// Empty ballot for `option_count` options, stamped with the voter's
    /// department and its current weight.
    pub fn open(option_count: usize, department_id: u64, weight: u64) -> Self {
        let mut option_scores = ManagedVec::new();
        for _ in 0..option_count {
            option_scores.push(0u8);
        }
        VoteRecord {
            has_voted: false,
            option_scores,
            rated_options_count: 0,
            department_id,
            weight,
        }
    }
}

// ============================================================
// Vote Eligibility: reason codes for the presentation layer
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum VoteEligibility {
    Eligible,
    NotRegistered,
    VotingNotStarted,
    VotingEnded,
    ProposalFinalized,
    DepartmentInactive,
    NotAMember,
    DepartmentNotParticipating,
    AlreadyVoted,
}

impl VoteEligibility {
    pub fn is_eligible(&self) -> bool {
        *self == VoteEligibility::Eligible
    }

    /// The error an endpoint raises when it is rejected for this reason.
    pub fn error_message(&self) -> &'static str {
        match self {
            VoteEligibility::Eligible => "",
            VoteEligibility::NotRegistered => crate::errors::ERR_NOT_REGISTERED,
            VoteEligibility::VotingNotStarted => crate::errors::ERR_VOTING_NOT_STARTED,
            VoteEligibility::VotingEnded => crate::errors::ERR_VOTING_ENDED,
            VoteEligibility::ProposalFinalized => crate::errors::ERR_PROPOSAL_FINALIZED,
            VoteEligibility::DepartmentInactive => crate::errors::ERR_DEPARTMENT_INACTIVE,
            VoteEligibility::NotAMember => crate::errors::ERR_NOT_A_MEMBER,
            VoteEligibility::DepartmentNotParticipating => {
                crate::errors::ERR_DEPARTMENT_NOT_PARTICIPATING
            },
            VoteEligibility::AlreadyVoted => crate::errors::ERR_ALREADY_COMPLETED,
        }
    }
}
