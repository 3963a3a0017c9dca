pub mod lifecycle;
pub mod prediction;
pub mod selection;
