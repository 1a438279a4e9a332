pub mod diet;
pub mod logbook;
