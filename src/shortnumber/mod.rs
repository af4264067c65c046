mod info;

pub use info::{ShortNumberCost, ShortNumberInfo};
