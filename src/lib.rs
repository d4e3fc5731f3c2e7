pub mod buffer;
pub mod config;
pub mod typed;
pub mod value;

pub use buffer::{Equivalent, GrowMode, Iter, RingBuffer};
pub use config::BufferConfig;
pub use typed::{BufferError, TypedRingBuffer};
pub use value::{Kinded, Value, ValueKind};
