//! Background maintenance tasks spawned at server startup.

pub mod session_pruner;
