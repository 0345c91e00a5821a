pub mod composition;
pub mod constants;
pub mod model;
pub mod table;
