multiversx_sc::imports!();

use crate::ballot::{self, BallotIntent, BallotTransition};
use crate::types::ProposalOption;
use crate::errors::{
    ERR_ALREADY_FINALIZED, ERR_ARITHMETIC_OVERFLOW, ERR_NOT_REGISTERED, ERR_VOTING_STILL_ACTIVE,
};

#[multiversx_sc::module]
pub trait TallyModule:
    crate::access_control::AccessControlModule
    + crate::departments::DepartmentsModule
    + crate::voters::VotersModule
    + crate::proposals::ProposalsModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: rateOption
    // One option at a time. The rating that fills the ballot
    // also completes it.
    // ========================================================

    #[endpoint(rateOption)]
    fn rate_option(&self, proposal_id: u64, option_index: u64, score: u8) {
        let caller = self.blockchain().get_caller();
        let intent = BallotIntent::Rate { option_index, score };
        self.cast_ballot(proposal_id, &caller, intent);
        self.option_rated_event(proposal_id, &caller, option_index, score);
    }

    // ========================================================
    // ENDPOINT: completeVoting
    // Every option rated in a single call.
    // ========================================================

    #[endpoint(completeVoting)]
    fn complete_voting(&self, proposal_id: u64, scores: ManagedVec<u8>) {
        let caller = self.blockchain().get_caller();
        self.cast_ballot(proposal_id, &caller, BallotIntent::Complete { scores });
    }

    // ========================================================
    // ENDPOINT: finalizeProposal
    // Terminal. Highest weighted total wins, ties go to the lowest index.
    // ========================================================

    #[endpoint(finalizeProposal)]
    fn finalize_proposal(&self, proposal_id: u64) -> u64 {
        self.require_admin();
        let mut proposal = self.require_proposal(proposal_id);
        require!(!proposal.finalized, ERR_ALREADY_FINALIZED);

        let now = self.blockchain().get_block_timestamp();
        require!(now > proposal.end_time, ERR_VOTING_STILL_ACTIVE);

        let winning_option = ballot::select_winner(
            self.proposal_options(proposal_id)
                .iter()
                .map(|option| option.total_score),
        ) as u64;

        proposal.finalized = true;
        self.proposals(proposal_id).set(&proposal);
        self.winning_option(proposal_id).set(winning_option);

        self.proposal_finalized_event(proposal_id, winning_option);

        winning_option
    }

    // ========================================================
    // INTERNAL: ballot commit
    // Validation happens entirely before the first write.
    // ========================================================

    fn cast_ballot(
        &self,
        proposal_id: u64,
        voter: &ManagedAddress,
        intent: BallotIntent<Self::Api>,
    ) {
        let mut proposal = self.require_proposal(proposal_id);
        let eligibility = self.vote_eligibility(&proposal, voter);
        let message = eligibility.error_message();
        require!(eligibility.is_eligible(), message);

        let record = match self.current_ballot(proposal_id, voter) {
            Some(record) => record,
            None => sc_panic!(ERR_NOT_REGISTERED),
        };
        let transition = match ballot::apply(record, intent) {
            Ok(transition) => transition,
            Err(message) => sc_panic!(message),
        };

        let BallotTransition {
            record,
            deltas,
            completed,
        } = transition;

        let mut options = self.proposal_options(proposal_id);
        let mut updated = ManagedVec::<Self::Api, ProposalOption<Self::Api>>::new();
        for delta in deltas.iter() {
            let option = options.get(delta.option_index as usize + 1);
            match ballot::accumulate(&option, &delta) {
                Some(next) => updated.push(next),
                None => sc_panic!(ERR_ARITHMETIC_OVERFLOW),
            }
        }

        for (delta, option) in deltas.iter().zip(updated.iter()) {
            options.set(delta.option_index as usize + 1, &option);
        }

        self.vote_records(proposal_id, voter).set(&record);

        if completed {
            proposal.total_votes += 1;
            self.proposals(proposal_id).set(&proposal);
            self.voting_completed_event(proposal_id, voter, record.weight);
        }
    }

    #[storage_mapper("winningOption")]
    fn winning_option(&self, proposal_id: u64) -> SingleValueMapper<u64>;
}
