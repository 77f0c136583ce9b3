/// File-level information command.
pub mod info;
/// Decoded tree rendering command.
pub mod print;
/// Round-trip byte fidelity check command.
pub mod verify;
