pub mod energy;
pub mod magnetization;

pub use energy::energy_per_bond;
pub use magnetization::{magnetization, magnetization_into};
