pub mod pet;
pub mod task;
