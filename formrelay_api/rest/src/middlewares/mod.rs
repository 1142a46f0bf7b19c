pub mod cors;
pub mod request_id;
pub mod trace;
