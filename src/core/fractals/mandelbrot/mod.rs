pub mod algorithm;
pub mod colour_maps;
pub mod errors;
pub mod params;
