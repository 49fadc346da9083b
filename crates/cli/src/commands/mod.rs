pub mod capture;
pub mod collect;
pub mod common;
pub mod replay;
