pub mod catalog;
pub mod location;
pub mod model;
pub mod query;
