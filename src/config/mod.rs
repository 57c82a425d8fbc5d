/// Main configuration module.
///
/// Re-exports the gameplay configuration submodule.
pub mod game;
