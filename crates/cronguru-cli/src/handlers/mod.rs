pub mod check;
pub mod edit;
