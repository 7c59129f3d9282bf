pub mod money;

pub use money::{from_minor_units, to_minor_units};
