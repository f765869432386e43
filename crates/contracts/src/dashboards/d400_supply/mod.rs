pub mod dto;

pub use dto::{SupplyPoint, SupplyQuery};
