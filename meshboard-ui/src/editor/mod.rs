// Editor module for meshboard UI.

pub mod canvas;
pub mod tools;
pub mod viewport;

pub use canvas::Canvas;
pub use tools::{Control, NavControl};
pub use viewport::{ListenerGuard, ViewportTracker, WindowEvents};
