pub mod error;
pub mod id;
pub mod intent;
pub mod money;
pub mod order;
pub mod outcome;
pub mod processor;
pub mod webhook;
