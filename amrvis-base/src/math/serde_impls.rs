#![allow(clippy::missing_inline_in_public_items)]

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::math::{Axis, IndexBox, IndexCoordinate, IndexRect};

#[derive(Debug, Deserialize, Serialize)]
struct IndexBoxSer {
    // Inclusive corners, as in the AMR plotfile box notation.
    small: [IndexCoordinate; 3],
    big: [IndexCoordinate; 3],
}

#[derive(Debug, Deserialize, Serialize)]
struct IndexRectSer {
    small: [IndexCoordinate; 2],
    big: [IndexCoordinate; 2],
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
enum AxisSer {
    X,
    Y,
    Z,
}

impl Serialize for IndexBox {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        IndexBoxSer {
            small: self.small_end().to_array(),
            big: self.big_end().to_array(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for IndexBox {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let IndexBoxSer { small, big } = IndexBoxSer::deserialize(deserializer)?;
        IndexBox::checked_from_corners(small, big).map_err(serde::de::Error::custom)
    }
}

impl Serialize for IndexRect {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        IndexRectSer {
            small: self.small_end().to_array(),
            big: self.big_end().to_array(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for IndexRect {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let IndexRectSer { small, big } = IndexRectSer::deserialize(deserializer)?;
        IndexRect::checked_from_corners(small, big).map_err(serde::de::Error::custom)
    }
}

impl Serialize for Axis {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Axis::X => AxisSer::X,
            Axis::Y => AxisSer::Y,
            Axis::Z => AxisSer::Z,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Axis {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match AxisSer::deserialize(deserializer)? {
            AxisSer::X => Axis::X,
            AxisSer::Y => Axis::Y,
            AxisSer::Z => Axis::Z,
        })
    }
}
