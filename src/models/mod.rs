pub mod activity;
pub mod registry;

pub use activity::Activity;
pub use registry::Registry;
