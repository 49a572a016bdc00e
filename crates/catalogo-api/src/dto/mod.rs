//! Transfer objects crossing the API boundary.

pub mod request;
pub mod response;
