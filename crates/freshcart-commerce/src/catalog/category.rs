//! Category types.

use serde::{Deserialize, Serialize};

use crate::ids::CategoryId;

/// A browsing category in the storefront navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Icon name used by the navigation.
    pub icon: Option<String>,
    /// Banner image URL.
    pub image_url: Option<String>,
}

impl Category {
    /// Create a category with just a name.
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            icon: None,
            image_url: None,
        }
    }
}
