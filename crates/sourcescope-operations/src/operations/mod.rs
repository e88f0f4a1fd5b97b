mod impact;

pub use impact::{ImpactOperation, ImpactOutput};
