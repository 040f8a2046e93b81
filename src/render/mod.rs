pub mod registry;
pub mod view;
