//! A thin presentation layer around the waytour core: KML reading, CLI argument
//! handling, result serialization and plotting. The core itself performs no I/O.

pub mod args;
pub mod kml;
pub mod output;
pub mod plot;
