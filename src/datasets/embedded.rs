//! Embedded datasets
//!
//! Series data compiled into the binary at build time.

// Include generated line tables from build script
include!(concat!(env!("OUT_DIR"), "/naruto.rs"));
include!(concat!(env!("OUT_DIR"), "/naruto_grid.rs"));
include!(concat!(env!("OUT_DIR"), "/one_piece.rs"));
include!(concat!(env!("OUT_DIR"), "/words.rs"));
