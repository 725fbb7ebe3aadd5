multiversx_sc::imports!();

use crate::errors::{
    ERR_DEPARTMENT_INACTIVE, ERR_DEPARTMENT_INDEX_OUT_OF_RANGE, ERR_EMPTY_DESCRIPTION,
    ERR_EMPTY_OPTION, ERR_INVALID_DURATION, ERR_INVALID_START_TIME,
    ERR_NO_PARTICIPATING_DEPARTMENTS, ERR_NOT_ENOUGH_OPTIONS, ERR_PROPOSAL_NOT_FOUND,
};
use crate::types::{Proposal, ProposalOption, ProposalStatus, VoteEligibility, VoteRecord};
use crate::MIN_OPTIONS;

#[multiversx_sc::module]
pub trait ProposalsModule:
    crate::access_control::AccessControlModule
    + crate::departments::DepartmentsModule
    + crate::voters::VotersModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: createProposal
    // The participating department set is frozen here.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(
        &self,
        description: ManagedBuffer,
        options: ManagedVec<ManagedBuffer>,
        start_time: u64,
        duration: u64,
        participating_departments: ManagedVec<u64>,
    ) -> u64 {
        self.require_admin();
        require!(!description.is_empty(), ERR_EMPTY_DESCRIPTION);
        require!(options.len() >= MIN_OPTIONS, ERR_NOT_ENOUGH_OPTIONS);
        for option in options.iter() {
            require!(!option.is_empty(), ERR_EMPTY_OPTION);
        }

        let now = self.blockchain().get_block_timestamp();
        require!(start_time > now, ERR_INVALID_START_TIME);
        require!(duration > 0, ERR_INVALID_DURATION);
        let end_time = match start_time.checked_add(duration) {
            Some(end_time) => end_time,
            None => sc_panic!(ERR_INVALID_DURATION),
        };

        require!(
            !participating_departments.is_empty(),
            ERR_NO_PARTICIPATING_DEPARTMENTS
        );
        for department_id in participating_departments.iter() {
            let department = self.require_department(department_id);
            require!(department.active, ERR_DEPARTMENT_INACTIVE);
        }

        let proposal_id = self.proposal_count().get();
        let proposal = Proposal {
            id: proposal_id,
            description,
            start_time,
            end_time,
            finalized: false,
            total_votes: 0,
        };

        for option in options.iter() {
            self.proposal_options(proposal_id)
                .push(&ProposalOption::new(option.clone_value()));
        }
        for department_id in participating_departments.iter() {
            self.proposal_departments(proposal_id).insert(department_id);
        }
        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id + 1);

        self.proposal_created_event(proposal_id, start_time, end_time, &proposal.description);

        proposal_id
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProposalCount)]
    fn get_proposal_count(&self) -> u64 {
        self.proposal_count().get()
    }

    /// `(description, startTime, endTime, finalized, totalVotes, optionCount,
    /// participatingDepartmentCount)`
    #[view(getProposalDetails)]
    fn get_proposal_details(
        &self,
        proposal_id: u64,
    ) -> MultiValue7<ManagedBuffer, u64, u64, bool, u64, u64, u64> {
        let proposal = self.require_proposal(proposal_id);
        let option_count = self.proposal_options(proposal_id).len() as u64;
        let department_count = self.proposal_departments(proposal_id).len() as u64;
        (
            proposal.description,
            proposal.start_time,
            proposal.end_time,
            proposal.finalized,
            proposal.total_votes,
            option_count,
            department_count,
        )
            .into()
    }

    #[view(getProposalParticipatingDepartment)]
    fn get_proposal_participating_department(&self, proposal_id: u64, index: u64) -> u64 {
        self.require_proposal(proposal_id);
        let departments = self.proposal_departments(proposal_id);
        require!(
            index < departments.len() as u64,
            ERR_DEPARTMENT_INDEX_OUT_OF_RANGE
        );
        departments.get_by_index(index as usize + 1)
    }

    #[view(isDepartmentParticipatingInProposal)]
    fn is_department_participating_in_proposal(
        &self,
        proposal_id: u64,
        department_id: u64,
    ) -> bool {
        self.proposal_departments(proposal_id).contains(&department_id)
    }

    // ========================================================
    // INTERNAL: eligibility
    // Checks run in a fixed order; the first failure is the reason.
    // ========================================================

    fn vote_eligibility(
        &self,
        proposal: &Proposal<Self::Api>,
        voter: &ManagedAddress,
    ) -> VoteEligibility {
        let registration = match self.registered_voter(voter) {
            Some(registration) => registration,
            None => return VoteEligibility::NotRegistered,
        };

        let now = self.blockchain().get_block_timestamp();
        match proposal.status_at(now) {
            ProposalStatus::Upcoming => return VoteEligibility::VotingNotStarted,
            ProposalStatus::Ended => return VoteEligibility::VotingEnded,
            ProposalStatus::Finalized => return VoteEligibility::ProposalFinalized,
            ProposalStatus::Active => {},
        }

        let department_id = registration.department_id;
        if !self.departments(department_id).get().active {
            return VoteEligibility::DepartmentInactive;
        }
        if !self.department_members(department_id).contains(voter) {
            return VoteEligibility::NotAMember;
        }
        if !self.proposal_departments(proposal.id).contains(&department_id) {
            return VoteEligibility::DepartmentNotParticipating;
        }

        let record = self.vote_records(proposal.id, voter);
        if !record.is_empty() && record.get().has_voted {
            return VoteEligibility::AlreadyVoted;
        }

        VoteEligibility::Eligible
    }

    /// The voter's stored ballot, or a fresh one stamped with the
    /// department and weight the voter has right now. `None` for an
    /// unregistered voter with no ballot. Never writes.
    fn current_ballot(
        &self,
        proposal_id: u64,
        voter: &ManagedAddress,
    ) -> Option<VoteRecord<Self::Api>> {
        let stored = self.vote_records(proposal_id, voter);
        if !stored.is_empty() {
            return Some(stored.get());
        }

        let registration = self.registered_voter(voter)?;
        let option_count = self.proposal_options(proposal_id).len();
        let weight = self.departments(registration.department_id).get().weight;
        Some(VoteRecord::open(
            option_count,
            registration.department_id,
            weight,
        ))
    }

    fn require_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        require!(
            !self.proposals(proposal_id).is_empty(),
            ERR_PROPOSAL_NOT_FOUND
        );
        self.proposals(proposal_id).get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, proposal_id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("proposalOptions")]
    fn proposal_options(&self, proposal_id: u64) -> VecMapper<ProposalOption<Self::Api>>;

    #[storage_mapper("proposalDepartments")]
    fn proposal_departments(&self, proposal_id: u64) -> UnorderedSetMapper<u64>;

    #[storage_mapper("voteRecords")]
    fn vote_records(
        &self,
        proposal_id: u64,
        voter: &ManagedAddress,
    ) -> SingleValueMapper<VoteRecord<Self::Api>>;
}
