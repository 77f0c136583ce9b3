//! Public library API for reading and writing Photoshop `.atn` action files.

/// Action file parsing, descriptor value model, and binary codec.
pub mod atn;
