// Utils compartidos

pub mod constants;
pub mod animator_ffi;
pub mod i18n;

pub use constants::*;
pub use i18n::*;
