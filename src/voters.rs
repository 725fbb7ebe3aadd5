multiversx_sc::imports!();

use crate::errors::{ERR_DEPARTMENT_INACTIVE, ERR_NOT_A_MEMBER, ERR_NOT_REGISTERED};
use crate::types::Voter;

#[multiversx_sc::module]
pub trait VotersModule:
    crate::access_control::AccessControlModule
    + crate::departments::DepartmentsModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: registerVoter
    // Re-registering moves the voter to another department. Ballots
    // already opened keep the department and weight they were stamped with.
    // ========================================================

    #[endpoint(registerVoter)]
    fn register_voter(&self, voter: ManagedAddress, department_id: u64) {
        self.require_admin();
        let department = self.require_department(department_id);
        require!(department.active, ERR_DEPARTMENT_INACTIVE);
        require!(
            self.department_members(department_id).contains(&voter),
            ERR_NOT_A_MEMBER
        );

        self.voters(&voter).set(Voter {
            department_id,
            registered: true,
        });

        self.voter_registered_event(&voter, department_id);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isVoterRegistered)]
    fn is_voter_registered(&self, voter: &ManagedAddress) -> bool {
        self.registered_voter(voter).is_some()
    }

    #[view(getVoterDepartment)]
    fn get_voter_department(&self, voter: &ManagedAddress) -> u64 {
        match self.registered_voter(voter) {
            Some(registration) => registration.department_id,
            None => sc_panic!(ERR_NOT_REGISTERED),
        }
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn registered_voter(&self, voter: &ManagedAddress) -> Option<Voter> {
        let mapper = self.voters(voter);
        if mapper.is_empty() {
            return None;
        }
        let registration = mapper.get();
        if registration.registered {
            Some(registration)
        } else {
            None
        }
    }

    #[storage_mapper("voters")]
    fn voters(&self, voter: &ManagedAddress) -> SingleValueMapper<Voter>;
}
