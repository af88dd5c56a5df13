use pysg_runtime::{from_foreign, Dynamic, IntoDynamic};
use serde::{Deserialize, Serialize};

use crate::error::FormsError;

/// Width and height in toolkit units. Either side may be left to the toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: Option<i64>,
    pub height: Option<i64>,
}

impl Size {
    pub const UNSPECIFIED: Size = Size { width: None, height: None };

    pub fn new(width: Option<i64>, height: Option<i64>) -> Self {
        Self { width, height }
    }

    pub fn exact(width: i64, height: i64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    /// Encodes as `(width, height)`.
    pub fn encode(&self) -> Dynamic {
        (self.width, self.height).into_dynamic()
    }

    /// Reads a `(width, height)` pair. A side that is absent or not an
    /// integer comes back as `None`; a value that is not a pair is an error.
    pub fn decode(value: &Dynamic) -> Result<Self, FormsError> {
        let (width, height) = value.as_pair().ok_or_else(|| FormsError::malformed("size", value))?;
        Ok(Self {
            width: from_foreign(width),
            height: from_foreign(height),
        })
    }
}

impl IntoDynamic for Size {
    fn into_dynamic(self) -> Dynamic {
        self.encode()
    }
}

/// Space around an element, one optional amount per side.
///
/// The toolkit groups padding by axis, so the foreign shape is
/// `((left, right), (top, bottom))` regardless of field order here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub top: Option<i64>,
    pub right: Option<i64>,
    pub bottom: Option<i64>,
    pub left: Option<i64>,
}

impl Padding {
    pub fn new(top: Option<i64>, right: Option<i64>, bottom: Option<i64>, left: Option<i64>) -> Self {
        Self { top, right, bottom, left }
    }

    pub fn encode(&self) -> Dynamic {
        Dynamic::pair(
            (self.left, self.right).into_dynamic(),
            (self.top, self.bottom).into_dynamic(),
        )
    }

    /// Inverse of [`Padding::encode`].
    ///
    /// Each side must be an integer or the absent marker; any other element,
    /// or a shape other than a pair of pairs, fails instead of defaulting.
    pub fn decode(value: &Dynamic) -> Result<Self, FormsError> {
        let malformed = || FormsError::malformed("padding", value);
        let (horizontal, vertical) = value.as_pair().ok_or_else(malformed)?;
        let (left, right) = horizontal.as_pair().ok_or_else(malformed)?;
        let (top, bottom) = vertical.as_pair().ok_or_else(malformed)?;
        Ok(Self {
            top: side(top).ok_or_else(malformed)?,
            right: side(right).ok_or_else(malformed)?,
            bottom: side(bottom).ok_or_else(malformed)?,
            left: side(left).ok_or_else(malformed)?,
        })
    }
}

impl IntoDynamic for Padding {
    fn into_dynamic(self) -> Dynamic {
        self.encode()
    }
}

/// `Some(None)` for an absent side, `None` when the element is not a side at all.
fn side(value: &Dynamic) -> Option<Option<i64>> {
    match value {
        Dynamic::None => Some(None),
        Dynamic::Int(amount) => Some(Some(*amount)),
        _ => None,
    }
}
