pub mod errors;
pub mod tab;
