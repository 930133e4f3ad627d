pub mod money;
pub mod requests;
pub mod response;
