pub mod codeable_concept;
pub use codeable_concept::*;

pub mod coding;
pub use coding::*;

pub mod extension;
pub use extension::*;

pub mod human_name;
pub use human_name::*;

pub mod identifier;
pub use identifier::*;

pub mod meta;
pub use meta::*;

pub mod narrative;
pub use narrative::*;

pub mod period;
pub use period::*;

pub mod quantity;
pub use quantity::*;

pub mod reference;
pub use reference::*;
