pub mod companies;
pub mod probes;
