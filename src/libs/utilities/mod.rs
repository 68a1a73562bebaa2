// Declares the helper modules shared by the `libs` components.

// Atomic file replacement.
pub mod file_operations;
// Tilde expansion and absolute path helpers.
pub mod path_helpers;
// External command execution with a timeout.
pub mod process;
// Parsing of `reg query` output.
pub mod registry_output;
