//! Benchmark crate for LayerKV.
//!
//! All content lives in `benches/`; this library is intentionally empty.
