pub mod leave_request;
pub mod loan_request;
