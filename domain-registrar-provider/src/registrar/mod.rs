//! The remote registrar, as seen by the resource.
//!
//! [`RegistrarApi`] is the seam the resource lifecycle talks to; [`HttpRegistrar`] is
//! the production implementation over the registrar's JSON API.

mod config;
mod http;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{BuyDomainsRequest, Domain, GetDomainRequest, OrderResponse};

pub use config::{ConfigValidationError, RegistrarConfig};
pub use http::HttpRegistrar;

/// Registrar operations used by the order-domain resource.
///
/// Errors are returned exactly as the transport produced them.
#[async_trait]
pub trait RegistrarApi: Send + Sync {
    /// Orders one or more domains.
    async fn buy_domains(&self, request: &BuyDomainsRequest) -> Result<OrderResponse>;

    /// Fetches the current registration of a domain.
    async fn get_domain(&self, request: &GetDomainRequest) -> Result<Domain>;
}
