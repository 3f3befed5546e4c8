//! Interactive plotting for interval linear equations.
//!
//! [`ExplorerApp`] is an egui window with the interval inputs on the left, the
//! analysis and plot in the center, and an explanation of the detected case
//! on the right. [`scene`] turns plot geometry into styled layers.

mod app;

pub mod scene;

pub use app::ExplorerApp;
