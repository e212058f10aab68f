//! Resource identifiers of the form `projectID/domainName`.
//!
//! Neither half is escaped. A `/` inside either half yields an identifier that no longer
//! decodes, which is a known limitation rather than something to work around here.

use std::fmt;
use std::str::FromStr;

use crate::error::{RegistrarError, Result};

/// Identity of an ordered domain, as stored by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceId {
    pub project_id: String,
    pub domain_name: String,
}

impl ResourceId {
    pub fn new(project_id: impl Into<String>, domain_name: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            domain_name: domain_name.into(),
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.project_id, self.domain_name)
    }
}

impl FromStr for ResourceId {
    type Err = RegistrarError;

    fn from_str(id: &str) -> Result<Self> {
        let mut parts = id.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(project_id), Some(domain_name), None) => {
                Ok(Self::new(project_id, domain_name))
            }
            _ => Err(RegistrarError::InvalidIdentifier { id: id.to_string() }),
        }
    }
}

/// `projectID + "/" + domainName`.
pub fn encode_id(project_id: &str, domain_name: &str) -> String {
    format!("{project_id}/{domain_name}")
}

/// Extracts the domain name from an identifier.
///
/// # Errors
///
/// [`RegistrarError::InvalidIdentifier`] unless `id` splits into exactly two segments.
pub fn domain_name_from_id(id: &str) -> Result<String> {
    id.parse::<ResourceId>().map(|rid| rid.domain_name)
}
