pub mod root;
pub mod tutor;
