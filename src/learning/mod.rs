pub mod markdown;
pub mod navigator;
pub mod view;

pub use navigator::{NavigationState, Navigator};
pub use view::{LearningView, render};
