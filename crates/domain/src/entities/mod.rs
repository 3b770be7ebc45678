pub mod casting;

pub use casting::Casting;
