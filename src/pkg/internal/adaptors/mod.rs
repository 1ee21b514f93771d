pub mod companies;
