pub mod instructions;
pub mod status;
