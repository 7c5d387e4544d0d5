pub mod iterated;
pub mod sampled;
mod traits;
pub use self::traits::*;
mod transition;
pub use self::transition::transition;
