pub mod api_utils;
pub mod date_utils;
pub mod dom;
pub mod notify;
pub mod storage;
