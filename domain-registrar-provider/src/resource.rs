//! Lifecycle of the "order domain" resource: plan, create and read.

use crate::error::{RegistrarError, Result};
use crate::expand::expand_buy_domains_request;
use crate::flatten::flatten_domain;
use crate::identity::{domain_name_from_id, encode_id};
use crate::registrar::RegistrarApi;
use crate::state::{StateMap, StateMapExt};
use crate::types::GetDomainRequest;
use crate::validate::{ConfigRevision, ResourceDiff, validate_owner_contact};

/// Outcome of a successful create.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedDomain {
    /// `projectID/domainName`.
    pub id: String,
    /// Resource state after the post-create read.
    pub state: StateMap,
}

/// The order-domain resource bound to a registrar.
pub struct OrderDomainResource<R> {
    registrar: R,
}

impl<R: RegistrarApi> OrderDomainResource<R> {
    pub fn new(registrar: R) -> Self {
        Self { registrar }
    }

    pub fn registrar(&self) -> &R {
        &self.registrar
    }

    /// Checks a pending configuration revision before anything is sent.
    ///
    /// # Errors
    ///
    /// [`RegistrarError::Configuration`] if the owner contact is missing or doubly given.
    pub fn plan(&self, diff: &impl ResourceDiff) -> Result<()> {
        validate_owner_contact(diff).inspect_err(|e| log_failure("plan", e))
    }

    /// Orders the configured domain, then reads it back.
    ///
    /// The identifier is built from the project the registrar answered with and the
    /// configured domain name. Configured keys the registrar never reports (duration,
    /// contact IDs) are kept in the returned state.
    ///
    /// # Errors
    ///
    /// Validation errors before any remote call, then registrar errors as returned.
    pub async fn create(&self, config: &StateMap) -> Result<CreatedDomain> {
        self.plan(&ConfigRevision::creating(config.clone()))?;

        let request = expand_buy_domains_request(config);
        let order = self
            .registrar
            .buy_domains(&request)
            .await
            .inspect_err(|e| log_failure("create", e))?;
        log::debug!(
            "[registrar] ordered {:?} in project {} (task {})",
            order.domains,
            order.project_id,
            order.task_id
        );

        let id = encode_id(&order.project_id, &config.string_or_default("domain_name"));
        let mut state = config.clone();
        state.extend(self.read(&id).await?);

        Ok(CreatedDomain { id, state })
    }

    /// Fetches the domain behind `id` and flattens it.
    ///
    /// # Errors
    ///
    /// [`RegistrarError::InvalidIdentifier`] without contacting the registrar if `id` is
    /// malformed, otherwise registrar errors as returned.
    pub async fn read(&self, id: &str) -> Result<StateMap> {
        let domain = domain_name_from_id(id).inspect_err(|e| log_failure("read", e))?;

        let record = self
            .registrar
            .get_domain(&GetDomainRequest { domain })
            .await
            .inspect_err(|e| log_failure("read", e))?;

        Ok(flatten_domain(&record))
    }
}

fn log_failure(operation: &str, error: &RegistrarError) {
    if error.is_expected() {
        log::warn!("[registrar] {operation} failed: {error}");
    } else {
        log::error!("[registrar] {operation} failed: {error}");
    }
}
