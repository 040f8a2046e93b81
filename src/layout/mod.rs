pub mod dimension;
pub mod dsl;
pub mod environment;
pub mod kind;
pub mod model;
pub mod solver;
