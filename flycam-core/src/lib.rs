//! Free-fly camera controller.
//!
//! A [`Camera`] turns discrete input (direction presses, mouse deltas,
//! scroll deltas) into a pose and a right-handed view matrix. Hosts own
//! the camera, feed it events, and read [`Camera::view_matrix`] and
//! [`Camera::zoom`] once per frame.

pub mod camera;
pub mod config;
pub mod error;

pub use camera::{Camera, CameraMovement, CameraUniform, Projection};
pub use config::CameraConfig;
pub use error::ConfigError;
