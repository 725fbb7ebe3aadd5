multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_INACTIVE, ERR_DEPARTMENT_INACTIVE, ERR_DEPARTMENT_NOT_FOUND, ERR_EMPTY_NAME,
    ERR_INVALID_WEIGHT, ERR_MEMBER_INDEX_OUT_OF_RANGE, ERR_NOT_A_MEMBER,
};
use crate::types::Department;

#[multiversx_sc::module]
pub trait DepartmentsModule:
    crate::access_control::AccessControlModule + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: createDepartment
    // ========================================================

    #[endpoint(createDepartment)]
    fn create_department(&self, name: ManagedBuffer, weight: u64) -> u64 {
        self.require_admin();
        require!(!name.is_empty(), ERR_EMPTY_NAME);
        require!(weight > 0, ERR_INVALID_WEIGHT);

        let department_id = self.department_count().get();
        let department = Department {
            id: department_id,
            name,
            weight,
            active: true,
        };

        self.departments(department_id).set(&department);
        self.department_count().set(department_id + 1);

        self.department_created_event(department_id, weight, &department.name);

        department_id
    }

    // ========================================================
    // ENDPOINT: updateDepartment
    // Weight changes apply to ballots opened afterwards only.
    // ========================================================

    #[endpoint(updateDepartment)]
    fn update_department(&self, department_id: u64, name: ManagedBuffer, weight: u64) {
        self.require_admin();
        let mut department = self.require_active_department(department_id);
        require!(!name.is_empty(), ERR_EMPTY_NAME);
        require!(weight > 0, ERR_INVALID_WEIGHT);

        department.name = name;
        department.weight = weight;
        self.departments(department_id).set(&department);

        self.department_updated_event(department_id, weight, &department.name);
    }

    // ========================================================
    // ENDPOINT: deactivateDepartment
    // Soft delete: the record and its roster stay readable.
    // ========================================================

    #[endpoint(deactivateDepartment)]
    fn deactivate_department(&self, department_id: u64) {
        self.require_admin();
        let mut department = self.require_department(department_id);
        require!(department.active, ERR_ALREADY_INACTIVE);

        department.active = false;
        self.departments(department_id).set(&department);

        self.department_deactivated_event(department_id);
    }

    // ========================================================
    // ENDPOINTS: roster management
    // ========================================================

    #[endpoint(addMemberToDepartment)]
    fn add_member_to_department(&self, department_id: u64, member: ManagedAddress) {
        self.require_admin();
        self.require_active_department(department_id);

        if self.department_members(department_id).insert(member.clone()) {
            self.member_added_event(department_id, &member);
        }
    }

    #[endpoint(removeMemberFromDepartment)]
    fn remove_member_from_department(&self, department_id: u64, member: ManagedAddress) {
        self.require_admin();
        self.require_active_department(department_id);
        require!(
            self.department_members(department_id).swap_remove(&member),
            ERR_NOT_A_MEMBER
        );

        self.member_removed_event(department_id, &member);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getDepartmentCount)]
    fn get_department_count(&self) -> u64 {
        self.department_count().get()
    }

    /// `(name, weight, active, memberCount)`
    #[view(getDepartmentDetails)]
    fn get_department_details(
        &self,
        department_id: u64,
    ) -> MultiValue4<ManagedBuffer, u64, bool, u64> {
        let department = self.require_department(department_id);
        let member_count = self.department_members(department_id).len() as u64;
        (department.name, department.weight, department.active, member_count).into()
    }

    #[view(getDepartmentMember)]
    fn get_department_member(&self, department_id: u64, index: u64) -> ManagedAddress {
        self.require_department(department_id);
        let members = self.department_members(department_id);
        require!(index < members.len() as u64, ERR_MEMBER_INDEX_OUT_OF_RANGE);
        members.get_by_index(index as usize + 1)
    }

    #[view(isMemberOfDepartment)]
    fn is_member_of_department(&self, department_id: u64, account: &ManagedAddress) -> bool {
        self.department_members(department_id).contains(account)
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_department(&self, department_id: u64) -> Department<Self::Api> {
        require!(
            !self.departments(department_id).is_empty(),
            ERR_DEPARTMENT_NOT_FOUND
        );
        self.departments(department_id).get()
    }

    fn require_active_department(&self, department_id: u64) -> Department<Self::Api> {
        let department = self.require_department(department_id);
        require!(department.active, ERR_DEPARTMENT_INACTIVE);
        department
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("departmentCount")]
    fn department_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("departments")]
    fn departments(&self, department_id: u64) -> SingleValueMapper<Department<Self::Api>>;

    #[storage_mapper("departmentMembers")]
    fn department_members(&self, department_id: u64) -> UnorderedSetMapper<ManagedAddress>;
}
