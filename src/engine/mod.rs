pub mod palette;

mod resample;
pub use resample::*;

mod similarity;
pub use similarity::*;

mod catalog;
pub use catalog::*;

mod stroke;
pub use stroke::*;
