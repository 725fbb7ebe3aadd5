#![no_std]

multiversx_sc::imports!();

pub mod access_control;
pub mod ballot;
pub mod departments;
pub mod errors;
pub mod events;
pub mod proposals;
pub mod tally;
pub mod types;
pub mod views;
pub mod voters;

use types::Role;

// ============================================================
// Constants
// ============================================================

/// Lowest score a voter can give an option. 0 is reserved for "not rated".
pub const MIN_SCORE: u8 = 1;

/// Highest score a voter can give an option.
pub const MAX_SCORE: u8 = 5;

/// A proposal needs at least this many options.
pub const MIN_OPTIONS: usize = 2;

// ============================================================
// Contract
// ============================================================

/// Weighted, department-scoped multi-option voting.
///
/// Admins build departments (each with a voting weight and a member
/// roster), register members as voters and open proposals to a fixed set
/// of departments. Registered voters rate every option from 1 to 5; each
/// rating counts `score * department weight` towards the option's total.
/// After the voting window closes an admin finalizes the proposal and the
/// option with the highest weighted total wins.
#[multiversx_sc::contract]
pub trait DepartmentVoting:
    access_control::AccessControlModule
    + departments::DepartmentsModule
    + voters::VotersModule
    + proposals::ProposalsModule
    + tally::TallyModule
    + views::ViewsModule
    + events::EventsModule
{
    // ========================================================
    // Init / Upgrade
    // The deployer becomes the bootstrap super-admin and an admin.
    // ========================================================

    #[init]
    fn init(&self) {
        let deployer = self.blockchain().get_caller();
        self.add_role_member(Role::DefaultAdmin, &deployer);
        self.add_role_member(Role::Admin, &deployer);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
