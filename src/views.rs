multiversx_sc::imports!();

use crate::errors::{ERR_INVALID_OPTION, ERR_NOT_FINALIZED, ERR_NOT_REGISTERED};
use crate::types::{ProposalStatus, VoteEligibility};
use crate::{MAX_SCORE, MIN_OPTIONS, MIN_SCORE};

/// Fixed-point scale of `getOptionWeightedAverage` (two decimals).
const AVERAGE_SCALE: u64 = 100;

/// Derived, read-only views for frontends. Nothing here writes storage.
#[multiversx_sc::module]
pub trait ViewsModule:
    crate::access_control::AccessControlModule
    + crate::departments::DepartmentsModule
    + crate::voters::VotersModule
    + crate::proposals::ProposalsModule
    + crate::tally::TallyModule
    + crate::events::EventsModule
{
    #[view(getProposalStatus)]
    fn get_proposal_status(&self, proposal_id: u64) -> ProposalStatus {
        let proposal = self.require_proposal(proposal_id);
        proposal.status_at(self.blockchain().get_block_timestamp())
    }

    /// `(description, totalScore, totalRatings, weightedVoteCount)`
    #[view(getOptionDetails)]
    fn get_option_details(
        &self,
        proposal_id: u64,
        option_index: u64,
    ) -> MultiValue4<ManagedBuffer, u64, u64, u64> {
        let option = self.require_option(proposal_id, option_index);
        (
            option.description,
            option.total_score,
            option.total_ratings,
            option.weighted_vote_count,
        )
            .into()
    }

    /// `totalScore / weightedVoteCount`, scaled by 100. Zero while unrated.
    #[view(getOptionWeightedAverage)]
    fn get_option_weighted_average(&self, proposal_id: u64, option_index: u64) -> u64 {
        let option = self.require_option(proposal_id, option_index);
        if option.weighted_vote_count == 0 {
            return 0;
        }
        let scaled = option.total_score as u128 * AVERAGE_SCALE as u128;
        (scaled / option.weighted_vote_count as u128) as u64
    }

    /// `(hasVoted, optionScores, ratedOptionsCount, departmentId, weight)`
    ///
    /// Fails with `NotRegistered` when the voter has neither a ballot nor a
    /// registration.
    #[view(getVoteDetails)]
    fn get_vote_details(
        &self,
        proposal_id: u64,
        voter: &ManagedAddress,
    ) -> MultiValue5<bool, ManagedVec<u8>, u64, u64, u64> {
        self.require_proposal(proposal_id);
        let record = match self.current_ballot(proposal_id, voter) {
            Some(record) => record,
            None => sc_panic!(ERR_NOT_REGISTERED),
        };
        (
            record.has_voted,
            record.option_scores,
            record.rated_options_count,
            record.department_id,
            record.weight,
        )
            .into()
    }

    #[view(canVoteOnProposal)]
    fn can_vote_on_proposal(
        &self,
        proposal_id: u64,
        voter: &ManagedAddress,
    ) -> MultiValue2<bool, VoteEligibility> {
        let proposal = self.require_proposal(proposal_id);
        let eligibility = self.vote_eligibility(&proposal, voter);
        (eligibility.is_eligible(), eligibility).into()
    }

    /// Polled by ballot frontends between single ratings; same checks as
    /// `canVoteOnProposal`.
    #[view(canStillVote)]
    fn can_still_vote(
        &self,
        proposal_id: u64,
        voter: &ManagedAddress,
    ) -> MultiValue2<bool, VoteEligibility> {
        self.can_vote_on_proposal(proposal_id, voter)
    }

    #[view(getWinningOption)]
    fn get_winning_option(&self, proposal_id: u64) -> u64 {
        let proposal = self.require_proposal(proposal_id);
        require!(proposal.finalized, ERR_NOT_FINALIZED);
        self.winning_option(proposal_id).get()
    }

    /// `(minScore, maxScore, minOptions)`
    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue3<u8, u8, u64> {
        (MIN_SCORE, MAX_SCORE, MIN_OPTIONS as u64).into()
    }

    fn require_option(
        &self,
        proposal_id: u64,
        option_index: u64,
    ) -> crate::types::ProposalOption<Self::Api> {
        self.require_proposal(proposal_id);
        let options = self.proposal_options(proposal_id);
        require!(option_index < options.len() as u64, ERR_INVALID_OPTION);
        options.get(option_index as usize + 1)
    }
}
