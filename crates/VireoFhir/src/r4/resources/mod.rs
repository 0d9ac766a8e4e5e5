pub mod basic;
pub use basic::*;

pub mod observation;
pub use observation::*;

pub mod patient;
pub use patient::*;

pub mod resource;
pub use resource::*;
