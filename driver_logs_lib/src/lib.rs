pub mod geo;
pub mod geocode;
pub mod log_entry;
pub mod suggest;
pub mod trip;
