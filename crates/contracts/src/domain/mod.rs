pub mod attendance;
pub mod finance_request;
pub mod leave;
pub mod message;
