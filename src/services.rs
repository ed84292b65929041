pub mod catalog;
pub mod orchestrator;
