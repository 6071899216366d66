pub mod budget;
pub mod error;
pub mod reference;
pub mod settings;
pub mod types;
