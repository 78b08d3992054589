//! Fluid amounts.
//!
//! [`FluidValue`] stores an amount of fluid in droplets. It is immutable, never
//! negative and serializes to json (`{"value": …}`), NBT and the network.

mod codec;
mod parse;
mod value;

pub use parse::FluidValueError;
pub use value::FluidValue;
