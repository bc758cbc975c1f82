// Front-end bindings (feature-gated)

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "browser")]
pub mod browser;
