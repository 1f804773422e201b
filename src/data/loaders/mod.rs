// mod.rs - Table loaders

pub mod csv;
