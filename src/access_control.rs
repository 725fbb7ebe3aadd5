multiversx_sc::imports!();

use crate::errors::ERR_UNAUTHORIZED;
use crate::types::Role;

/// Role table. `DefaultAdmin` manages membership of every role; `Admin`
/// gates registry management and finalization. Holding one role never
/// implies the other.
#[multiversx_sc::module]
pub trait AccessControlModule: crate::events::EventsModule {
    #[endpoint(grantRole)]
    fn grant_role(&self, role: Role, account: ManagedAddress) {
        self.require_role(Role::DefaultAdmin);
        self.add_role_member(role, &account);
    }

    #[endpoint(revokeRole)]
    fn revoke_role(&self, role: Role, account: ManagedAddress) {
        self.require_role(Role::DefaultAdmin);
        self.remove_role_member(role, &account);
    }

    /// Drops one of the caller's own roles.
    #[endpoint(renounceRole)]
    fn renounce_role(&self, role: Role) {
        let caller = self.blockchain().get_caller();
        self.remove_role_member(role, &caller);
    }

    #[view(hasRole)]
    fn has_role(&self, role: Role, account: &ManagedAddress) -> bool {
        self.role_members(role).contains(account)
    }

    #[view(getRoleMembers)]
    fn get_role_members(&self, role: Role) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for member in self.role_members(role).iter() {
            result.push(member);
        }
        result
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_role(&self, role: Role) {
        let caller = self.blockchain().get_caller();
        require!(self.has_role(role, &caller), ERR_UNAUTHORIZED);
    }

    fn require_admin(&self) {
        self.require_role(Role::Admin);
    }

    fn add_role_member(&self, role: Role, account: &ManagedAddress) {
        if self.role_members(role).insert(account.clone()) {
            let sender = self.blockchain().get_caller();
            self.role_granted_event(role, account, &sender);
        }
    }

    fn remove_role_member(&self, role: Role, account: &ManagedAddress) {
        if self.role_members(role).swap_remove(account) {
            let sender = self.blockchain().get_caller();
            self.role_revoked_event(role, account, &sender);
        }
    }

    #[storage_mapper("roleMembers")]
    fn role_members(&self, role: Role) -> UnorderedSetMapper<ManagedAddress>;
}
