pub mod compare;
pub mod panels;
pub mod plot;
