pub mod category;
pub mod interrupt;

pub use category::Category;
pub use interrupt::InterruptEvent;
