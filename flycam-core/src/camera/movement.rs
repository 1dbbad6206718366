use serde::{Deserialize, Serialize};

/// Direction of a keyboard move, relative to the camera's current basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CameraMovement
{
  Forward,
  Backward,
  Left,
  Right,
}

impl CameraMovement
{
  pub const ALL: [CameraMovement; 4] = [
    CameraMovement::Forward,
    CameraMovement::Backward,
    CameraMovement::Left,
    CameraMovement::Right,
  ];
}

#[cfg(test)]
mod tests
{
  use super::*;
  use std::collections::HashSet;

  #[test]
  fn all_lists_each_direction_once()
  {
    let set: HashSet<_> = CameraMovement::ALL.iter().collect();
    assert_eq!(set.len(), 4);
  }

  #[test]
  fn serialises_as_variant_name()
  {
    let json = serde_json::to_string(&CameraMovement::Backward).unwrap();
    assert_eq!(json, "\"Backward\"");

    let parsed: CameraMovement = serde_json::from_str("\"Left\"").unwrap();
    assert_eq!(parsed, CameraMovement::Left);
  }
}
