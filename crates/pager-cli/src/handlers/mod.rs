pub mod goto;
pub mod pages;
pub mod range;
