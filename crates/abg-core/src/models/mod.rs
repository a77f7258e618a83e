pub mod anion_gap;
pub mod compensation;
pub mod consistency;
pub mod delta_ratio;
pub mod disorder;
pub mod input;
pub mod interpretation;
pub mod osmolar_gap;
