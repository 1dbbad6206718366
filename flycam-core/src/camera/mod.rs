mod fly;
mod movement;
mod projection;
mod uniform;

pub use fly::{derive_basis, Basis, Camera, PITCH_LIMIT, ZOOM_MAX, ZOOM_MIN};
pub use movement::CameraMovement;
pub use projection::Projection;
pub use uniform::CameraUniform;
