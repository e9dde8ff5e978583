//! Product listing payload for the storefront's product-creation endpoint.
//!
//! Only the document is built here; sending it is up to the caller.

use serde::{Deserialize, Serialize};

use crate::error::{DesignError, DesignResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductListing {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub sizes: Vec<String>,
    /// Hosted image URLs, usually the uploaded export first.
    #[serde(rename = "image")]
    pub images: Vec<String>,
    #[serde(default)]
    pub variants: Vec<serde_json::Value>,
}

fn required(field: &'static str, value: &str) -> DesignResult<()> {
    if value.trim().is_empty() {
        Err(DesignError::invalid(field, "must not be empty"))
    } else {
        Ok(())
    }
}

impl ProductListing {
    /// Checks the fields the endpoint requires.
    pub fn validate(&self) -> DesignResult<()> {
        required("name", &self.name)?;
        required("description", &self.description)?;
        required("category", &self.category)?;
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(DesignError::invalid("price", format!("{} is not a positive amount", self.price)));
        }
        if self.sizes.iter().all(|s| s.trim().is_empty()) {
            return Err(DesignError::invalid("sizes", "at least one size is required"));
        }
        if self.images.iter().all(|s| s.trim().is_empty()) {
            return Err(DesignError::invalid("image", "at least one image URL is required"));
        }
        Ok(())
    }

    /// Validates and serializes the payload.
    pub fn to_json(&self) -> DesignResult<String> {
        self.validate()?;
        serde_json::to_string_pretty(self).map_err(|e| DesignError::invalid("listing", e.to_string()))
    }
}
