//! Concrete backend implementations

pub mod arkworks;
