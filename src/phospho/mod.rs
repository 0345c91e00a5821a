pub mod model;
pub mod modification;
pub mod motif;
pub mod run;
