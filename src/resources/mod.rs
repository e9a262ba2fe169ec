//! ECS resources shared across systems.
//!
//! Submodules overview:
//! - [`assetloader`] – bridge with the background asset loader thread
//! - [`gameconfig`] – settings loaded from the INI configuration file
//! - [`input`] – per-frame keyboard state
//! - [`modelstore`] – loaded raylib models, keyed by name (non-send)
//! - [`scenecamera`] – the active 3D camera parameters
//! - [`worldtime`] – elapsed/delta simulation time

pub mod assetloader;
pub mod gameconfig;
pub mod input;
pub mod modelstore;
pub mod scenecamera;
pub mod worldtime;
