pub mod batch;
pub mod consts;
pub mod dimensions;
pub mod error;
pub mod io;
pub mod resample;
pub mod save;
pub mod settings;
pub mod source;
