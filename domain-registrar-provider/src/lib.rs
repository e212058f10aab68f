//! # domain-registrar-provider
//!
//! State mapping between the flat configuration an infrastructure-as-code host keeps
//! for an "order domain" resource and the nested objects of a domain registrar API.
//!
//! ## Building Blocks
//!
//! | Direction | Entry point | Produces |
//! |-----------|-------------|----------|
//! | config → request | [`expand_buy_domains_request`] | [`BuyDomainsRequest`] |
//! | response → state | [`flatten_domain`] | [`StateMap`] |
//! | identity | [`encode_id`] / [`domain_name_from_id`] | `projectID/domainName` |
//! | plan check | [`validate_owner_contact`] | `Result<()>` |
//!
//! All of the above are pure. Talking to the registrar goes through the
//! [`RegistrarApi`] trait; [`HttpRegistrar`] is the HTTP implementation and
//! [`OrderDomainResource`] wires everything together.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls instead.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use domain_registrar_provider::{
//!     HttpRegistrar, OrderDomainResource, RegistrarConfig, state_map,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let registrar = HttpRegistrar::new(RegistrarConfig::new("scw-secret-key"))?;
//!     let resource = OrderDomainResource::new(registrar);
//!
//!     let created = resource
//!         .create(&state_map! {
//!             "domain_name" => "example.com",
//!             "duration_in_years" => 1_i64,
//!             "project_id" => "11111111-2222-3333-4444-555555555555",
//!             "owner_contact_id" => "contact-id",
//!         })
//!         .await?;
//!     println!("{} -> {:?}", created.id, created.state.get("status"));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every fallible operation returns [`Result<T, RegistrarError>`](RegistrarError):
//!
//! - [`RegistrarError::Configuration`]: owner contact missing or given twice
//! - [`RegistrarError::InvalidIdentifier`]: ID not of the form `projectID/domainName`
//! - [`RegistrarError::DuplicateRecordMatch`] / [`RegistrarError::RecordNotFound`]: DNS
//!   record lookup did not find exactly one record
//!
//! Transport failures are passed through as the registrar client reported them.
//! Nothing is retried.

mod error;
mod expand;
mod flatten;
mod identity;
mod records;
mod registrar;
mod resource;
mod state;
mod types;
mod utils;
mod validate;

// Re-export error types
pub use error::{OwnerContactConflict, RegistrarError, Result};

// Re-export flat state model
pub use state::{StateMap, StateMapExt, StateValue};

// Re-export mapping functions
pub use expand::{
    ContactRole, DEFAULT_DURATION_IN_YEARS, RoleContact, expand_buy_domains_request,
    expand_contact, expand_extension_eu, expand_extension_fr, expand_extension_nl,
    expand_new_contact, expand_role_contact,
};
pub use flatten::{
    flatten_contact, flatten_dns_zones, flatten_domain, flatten_extension_eu,
    flatten_extension_fr, flatten_extension_nl, flatten_external_registration_status,
    flatten_tld, flatten_transfer_registration_status,
};
pub use identity::{ResourceId, domain_name_from_id, encode_id};
pub use records::{DEFAULT_REVERSE_SUFFIX, find_default_reverse, get_record_from_type_and_data};
pub use validate::{ConfigRevision, ResourceDiff, validate_owner_contact};

// Re-export registrar seam
pub use registrar::{ConfigValidationError, HttpRegistrar, RegistrarApi, RegistrarConfig};
pub use resource::{CreatedDomain, OrderDomainResource};

// Re-export types
pub use types::{
    BuyDomainsRequest, Contact, ContactExtensionEu, ContactExtensionFr,
    ContactExtensionFrAssociationInfo, ContactExtensionFrCodeAuthAfnicInfo,
    ContactExtensionFrDunsInfo, ContactExtensionFrIndividualInfo, ContactExtensionFrMode,
    ContactExtensionFrTrademarkInfo, ContactExtensionNl, ContactExtensionNlLegalForm,
    ContactLegalForm, DnsZone, DnsZoneStatus, Domain, DomainDnssec, DomainFeatureStatus,
    DomainRegistrationStatusExternalDomain, DomainRegistrationStatusTransfer, DomainStatus,
    GetDomainRequest, LinkedProduct, Money, NewContact, OrderResponse, Record, RecordType, Tld,
    TldOffer, TransferStatus,
};

// Re-export utils module
pub use utils::datetime;
