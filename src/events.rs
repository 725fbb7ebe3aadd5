multiversx_sc::imports!();

use crate::types::Role;

#[multiversx_sc::module]
pub trait EventsModule {
    // ── Access control ──

    #[event("roleGranted")]
    fn role_granted_event(
        &self,
        #[indexed] role: Role,
        #[indexed] account: &ManagedAddress,
        sender: &ManagedAddress,
    );

    #[event("roleRevoked")]
    fn role_revoked_event(
        &self,
        #[indexed] role: Role,
        #[indexed] account: &ManagedAddress,
        sender: &ManagedAddress,
    );

    // ── Departments ──

    #[event("departmentCreated")]
    fn department_created_event(
        &self,
        #[indexed] department_id: u64,
        #[indexed] weight: u64,
        name: &ManagedBuffer,
    );

    #[event("departmentUpdated")]
    fn department_updated_event(
        &self,
        #[indexed] department_id: u64,
        #[indexed] weight: u64,
        name: &ManagedBuffer,
    );

    #[event("departmentDeactivated")]
    fn department_deactivated_event(&self, #[indexed] department_id: u64);

    #[event("memberAdded")]
    fn member_added_event(
        &self,
        #[indexed] department_id: u64,
        #[indexed] member: &ManagedAddress,
    );

    #[event("memberRemoved")]
    fn member_removed_event(
        &self,
        #[indexed] department_id: u64,
        #[indexed] member: &ManagedAddress,
    );

    // ── Voters ──

    #[event("voterRegistered")]
    fn voter_registered_event(
        &self,
        #[indexed] voter: &ManagedAddress,
        #[indexed] department_id: u64,
    );

    // ── Proposals ──

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] start_time: u64,
        #[indexed] end_time: u64,
        description: &ManagedBuffer,
    );

    #[event("optionRated")]
    fn option_rated_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] option_index: u64,
        score: u8,
    );

    #[event("votingCompleted")]
    fn voting_completed_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        weight: u64,
    );

    #[event("proposalFinalized")]
    fn proposal_finalized_event(&self, #[indexed] proposal_id: u64, winning_option: u64);
}
