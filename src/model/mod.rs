pub mod drink;
pub mod ingredient;
pub mod taste;

pub use drink::*;
pub use ingredient::*;
pub use taste::*;
