pub mod tutor;
pub mod validation;
