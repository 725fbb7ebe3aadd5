// ── Authorization ──
pub const ERR_UNAUTHORIZED: &str = "Unauthorized";

// ── Departments ──
pub const ERR_DEPARTMENT_NOT_FOUND: &str = "Department does not exist";
pub const ERR_EMPTY_NAME: &str = "Name cannot be empty";
pub const ERR_INVALID_WEIGHT: &str = "Weight must be positive";
pub const ERR_DEPARTMENT_INACTIVE: &str = "Department is not active";
pub const ERR_ALREADY_INACTIVE: &str = "Department already inactive";
pub const ERR_NOT_A_MEMBER: &str = "Not a member of the department";
pub const ERR_MEMBER_INDEX_OUT_OF_RANGE: &str = "Member index out of range";

// ── Voters ──
pub const ERR_NOT_REGISTERED: &str = "Voter is not registered";

// ── Proposals ──
pub const ERR_PROPOSAL_NOT_FOUND: &str = "Proposal does not exist";
pub const ERR_EMPTY_DESCRIPTION: &str = "Description cannot be empty";
pub const ERR_NOT_ENOUGH_OPTIONS: &str = "At least two options required";
pub const ERR_EMPTY_OPTION: &str = "Option description cannot be empty";
pub const ERR_INVALID_START_TIME: &str = "Start time must be in the future";
pub const ERR_INVALID_DURATION: &str = "Duration must be positive";
pub const ERR_NO_PARTICIPATING_DEPARTMENTS: &str = "At least one department required";
pub const ERR_DEPARTMENT_INDEX_OUT_OF_RANGE: &str = "Department index out of range";
pub const ERR_DEPARTMENT_NOT_PARTICIPATING: &str = "Department not participating";

// ── Voting window ──
pub const ERR_VOTING_NOT_STARTED: &str = "Voting has not started";
pub const ERR_VOTING_ENDED: &str = "Voting has ended";
pub const ERR_VOTING_STILL_ACTIVE: &str = "Voting is still active";
pub const ERR_PROPOSAL_FINALIZED: &str = "Proposal is finalized";

// ── Ballots ──
pub const ERR_INVALID_OPTION: &str = "Invalid option";
pub const ERR_INVALID_SCORE: &str = "Score must be between 1 and 5";
pub const ERR_INVALID_SCORE_ARRAY_LENGTH: &str = "Scores must match option count";
pub const ERR_ALREADY_RATED: &str = "Option already rated";
pub const ERR_ALREADY_COMPLETED: &str = "Already completed voting";
pub const ERR_ARITHMETIC_OVERFLOW: &str = "Weighted total overflow";

// ── Finalization ──
pub const ERR_ALREADY_FINALIZED: &str = "Proposal already finalized";
pub const ERR_NOT_FINALIZED: &str = "Proposal not finalized";
