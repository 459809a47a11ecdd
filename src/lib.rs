// Library exports for integration tests and external use

pub mod coordinates;
pub mod exporter;
pub mod gps;
pub mod image_finder;
pub mod metadata;
pub mod path_normalizer;
pub mod point_writer;
pub mod tag_value;

#[cfg(test)]
mod test_support;
