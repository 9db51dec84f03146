#[macro_use]
mod macros;

pub mod area;
pub mod fuel;
pub mod length;
pub mod money;
pub mod speed;
pub mod time;
