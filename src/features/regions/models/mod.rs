mod region;

pub use region::{Region, RegionAttributes};
