pub mod bubble;

pub use bubble::BubbleSizeScale;
