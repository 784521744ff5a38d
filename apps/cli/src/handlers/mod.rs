pub mod field;
pub mod lookup;
