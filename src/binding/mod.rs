//! Declarative listing bindings
//!
//! A listing endpoint can be declared in YAML instead of wired up in code:
//! the request path, where the items and the raw marker live in the
//! response, how the marker continues the listing, and whether a missing
//! collection reads as empty. Loading validates the declaration and turns
//! it into a ready [`Lister`].
//!
//! ```yaml
//! name: servers
//! path: /v2/{region}/servers
//! items_path: servers
//! marker:
//!   style: token
//!   path: next_marker
//!   param: marker
//! absent_as_empty: true
//! ```

mod types;

pub use types::{ListingBinding, MarkerBinding, MarkerStyleBinding};

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Load a listing binding from a YAML file
pub fn load_binding(path: impl AsRef<Path>) -> Result<ListingBinding> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        Error::binding(format!(
            "Failed to read binding file '{}': {e}",
            path.display()
        ))
    })?;
    load_binding_from_str(&content)
}

/// Load a listing binding from a YAML string
pub fn load_binding_from_str(yaml: &str) -> Result<ListingBinding> {
    let binding: ListingBinding = serde_yaml::from_str(yaml)
        .map_err(|e| Error::binding(format!("Failed to parse binding YAML: {e}")))?;

    validate_binding(&binding)?;
    Ok(binding)
}

/// Validate a listing binding
fn validate_binding(binding: &ListingBinding) -> Result<()> {
    if binding.name.is_empty() {
        return Err(Error::binding("Binding name cannot be empty"));
    }

    if binding.path.is_empty() {
        return Err(Error::binding(format!(
            "Binding '{}' path cannot be empty",
            binding.name
        )));
    }

    if binding.items_path.is_empty() {
        return Err(Error::binding(format!(
            "Binding '{}' items_path cannot be empty",
            binding.name
        )));
    }

    if let Some(marker) = &binding.marker {
        if marker.path.is_empty() {
            return Err(Error::binding(format!(
                "Binding '{}' marker path cannot be empty",
                binding.name
            )));
        }
        match marker.style {
            MarkerStyleBinding::NextUrl => {}
            _ if marker.param.is_none() => {
                return Err(Error::binding(format!(
                    "Binding '{}' marker style '{:?}' requires a param",
                    binding.name, marker.style
                )));
            }
            _ => {}
        }
    }

    Ok(())
}
