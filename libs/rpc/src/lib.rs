//! Generated protobuf and tonic code for the catalog API.
//!
//! Sources live in `proto/`; the files under `src/generated/` are produced by
//! buf (prost + tonic plugins) and checked in.

pub mod catalog {
    pub mod v1 {
        include!("generated/catalog/v1/catalog.v1.rs");
    }
}
