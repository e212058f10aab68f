use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Declares a string enum with an explicit unknown variant.
///
/// The unknown variant is the `Default` and serialises as its own tag. Listed variants
/// serialise as the tag given next to them. Any other tag is kept verbatim in
/// `Unrecognized` so it survives a decode/encode pass unchanged.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident [$unknown:ident => $unknown_tag:literal] {
            $( $(#[$vmeta:meta])* $variant:ident => $tag:literal, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
        $vis enum $name {
            #[default]
            $unknown,
            $( $(#[$vmeta])* $variant, )*
            /// A tag outside the known list, as received.
            Unrecognized(String),
        }

        impl $name {
            /// Wire tag of this value.
            pub fn as_str(&self) -> &str {
                match self {
                    Self::$unknown => $unknown_tag,
                    $( Self::$variant => $tag, )*
                    Self::Unrecognized(tag) => tag.as_str(),
                }
            }

            /// Parses a wire tag. Tags outside the list become `Unrecognized`.
            pub fn from_tag(tag: &str) -> Self {
                match tag {
                    $unknown_tag => Self::$unknown,
                    $( $tag => Self::$variant, )*
                    other => Self::Unrecognized(other.to_string()),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let tag = <String as Deserialize>::deserialize(deserializer)?;
                Ok(Self::from_tag(&tag))
            }
        }
    };
}

// ============ Enums ============

string_enum! {
    /// Legal form of a contact.
    pub enum ContactLegalForm [LegalFormUnknown => "legal_form_unknown"] {
        Individual => "individual",
        Corporate => "corporate",
        Association => "association",
        Other => "other",
    }
}

string_enum! {
    /// Which kind of French (AFNIC) disclosure a `.fr` contact provides.
    pub enum ContactExtensionFrMode [ModeUnknown => "mode_unknown"] {
        Individual => "individual",
        CompanyIdentificationCode => "company_identification_code",
        Duns => "duns",
        Local => "local",
        Association => "association",
        Trademark => "trademark",
        CodeAuthAfnic => "code_auth_afnic",
    }
}

string_enum! {
    /// Dutch legal form, required for `.nl` registrations.
    pub enum ContactExtensionNlLegalForm [LegalFormUnknown => "legal_form_unknown"] {
        NaturalPerson => "natural_person",
        LimitedCompany => "limited_company",
        LimitedCompanyInFormation => "limited_company_in_formation",
        Cooperative => "cooperative",
        LimitedPartnership => "limited_partnership",
        SoleCompany => "sole_company",
        EuropeanEconomicInterestGroup => "european_economic_interest_group",
        ReligiousEntity => "religious_entity",
        Partnership => "partnership",
        PublicCompany => "public_company",
        MutualBenefitCompany => "mutual_benefit_company",
        Residential => "residential",
        ShippingCompany => "shipping_company",
        Foundation => "foundation",
        Association => "association",
        TradingPartnership => "trading_partnership",
        Other => "other",
    }
}

string_enum! {
    /// Overall lifecycle status of a registered domain.
    pub enum DomainStatus [StatusUnknown => "status_unknown"] {
        Active => "active",
        Creating => "creating",
        CreateError => "create_error",
        Renewing => "renewing",
        RenewError => "renew_error",
        Xfering => "xfering",
        XferError => "xfer_error",
        Expired => "expired",
        Expiring => "expiring",
        Updating => "updating",
        Checking => "checking",
        Locked => "locked",
        Deleting => "deleting",
    }
}

string_enum! {
    /// Status of an optional domain feature (auto-renew, DNSSEC).
    pub enum DomainFeatureStatus [FeatureStatusUnknown => "feature_status_unknown"] {
        Enabling => "enabling",
        Enabled => "enabled",
        Disabling => "disabling",
        Disabled => "disabled",
    }
}

string_enum! {
    pub enum DnsZoneStatus [Unknown => "unknown"] {
        Active => "active",
        Pending => "pending",
        Error => "error",
        Locked => "locked",
    }
}

string_enum! {
    /// Progress of an inbound domain transfer.
    pub enum TransferStatus [StatusUnknown => "status_unknown"] {
        Pending => "pending",
        WaitingVote => "waiting_vote",
        Rejected => "rejected",
        Processing => "processing",
        Done => "done",
    }
}

string_enum! {
    pub enum LinkedProduct [UnknownProduct => "unknown_product"] {
        Vpc => "vpc",
    }
}

string_enum! {
    /// DNS record type as tagged by the registrar.
    pub enum RecordType [Unknown => "unknown"] {
        A => "A",
        Aaaa => "AAAA",
        Cname => "CNAME",
        Txt => "TXT",
        Srv => "SRV",
        Tlsa => "TLSA",
        Mx => "MX",
        Ns => "NS",
        Ptr => "PTR",
        Caa => "CAA",
        Alias => "ALIAS",
        Loc => "LOC",
        Svcb => "SVCB",
        Https => "HTTPS",
        Naptr => "NAPTR",
    }
}

// ============ Contact Extensions ============

/// `.fr` extension: disclosure mode plus the info block matching that mode.
///
/// The registrar expects at most one info block, the one selected by `mode`, but
/// nothing here enforces it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactExtensionFr {
    #[serde(default)]
    pub mode: ContactExtensionFrMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub individual_info: Option<ContactExtensionFrIndividualInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duns_info: Option<ContactExtensionFrDunsInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub association_info: Option<ContactExtensionFrAssociationInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trademark_info: Option<ContactExtensionFrTrademarkInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_auth_afnic_info: Option<ContactExtensionFrCodeAuthAfnicInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactExtensionFrIndividualInfo {
    #[serde(default)]
    pub whois_opt_in: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactExtensionFrDunsInfo {
    #[serde(default)]
    pub duns_id: String,
    #[serde(default)]
    pub local_id: String,
}

/// Publication of a French association in the Journal Officiel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactExtensionFrAssociationInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_jo: Option<DateTime<Utc>>,
    #[serde(default)]
    pub publication_jo_page: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactExtensionFrTrademarkInfo {
    #[serde(default)]
    pub trademark_inpi: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactExtensionFrCodeAuthAfnicInfo {
    #[serde(default)]
    pub code_auth_afnic: String,
}

/// `.eu` extension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactExtensionEu {
    #[serde(default)]
    pub european_citizenship: String,
}

/// `.nl` extension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactExtensionNl {
    #[serde(default)]
    pub legal_form: ContactExtensionNlLegalForm,
    #[serde(default)]
    pub legal_form_registration_number: String,
}

// ============ Contacts ============

/// A contact as returned by the registrar.
///
/// Optional text fields come back as empty strings rather than being left out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub id: String,
    pub legal_form: ContactLegalForm,
    pub firstname: String,
    pub lastname: String,
    pub company_name: String,
    pub email: String,
    pub email_alt: String,
    pub phone_number: String,
    pub fax_number: String,
    pub address_line_1: String,
    pub address_line_2: String,
    pub zip: String,
    pub city: String,
    pub country: String,
    pub vat_identification_code: String,
    pub company_identification_code: String,
    pub lang: String,
    pub resale: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension_fr: Option<ContactExtensionFr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension_eu: Option<ContactExtensionEu>,
    pub whois_opt_in: bool,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension_nl: Option<ContactExtensionNl>,
}

/// Inline contact payload sent when ordering a domain.
///
/// Every `Option` distinguishes "not configured" (`None`, left out of the request) from
/// "configured as empty" (`Some("")`, sent as an empty string).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewContact {
    pub legal_form: ContactLegalForm,
    pub firstname: String,
    pub lastname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_alt: Option<String>,
    pub phone_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fax_number: Option<String>,
    pub address_line_1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line_2: Option<String>,
    pub zip: String,
    pub city: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_identification_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_identification_code: Option<String>,
    #[serde(default)]
    pub resale: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension_fr: Option<ContactExtensionFr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension_eu: Option<ContactExtensionEu>,
    #[serde(default)]
    pub whois_opt_in: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension_nl: Option<ContactExtensionNl>,
}

// ============ Requests ============

/// Request body of the registrar's "buy domains" operation.
///
/// For each role at most one of `*_contact_id` / `*_contact` is set. The owner role
/// must have exactly one; administrative and technical fall back to the owner when
/// both are left out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuyDomainsRequest {
    pub domains: Vec<String>,
    pub duration_in_years: u32,
    pub project_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_contact_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_contact: Option<NewContact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administrative_contact_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administrative_contact: Option<NewContact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_contact_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_contact: Option<NewContact>,
}

/// Answer to a "buy domains" request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderResponse {
    pub domains: Vec<String>,
    pub organization_id: String,
    pub project_id: String,
    pub task_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetDomainRequest {
    pub domain: String,
}

// ============ Domain ============

/// Pricing in the registrar's money representation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Money {
    pub currency_code: String,
    pub units: i64,
    pub nanos: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TldOffer {
    pub action: String,
    pub operation_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Money>,
}

/// Top-level domain metadata: registration constraints and offers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tld {
    pub name: String,
    pub dnssec_support: bool,
    pub duration_in_years_min: u32,
    pub duration_in_years_max: u32,
    pub idn_support: bool,
    pub offers: BTreeMap<String, TldOffer>,
    pub specifications: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DnsZone {
    pub domain: String,
    pub subdomain: String,
    pub ns: Vec<String>,
    pub ns_default: Vec<String>,
    pub ns_master: Vec<String>,
    pub status: DnsZoneStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub project_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainDnssec {
    pub status: DomainFeatureStatus,
}

/// Registration status of a domain registered elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainRegistrationStatusExternalDomain {
    pub validation_token: String,
}

/// Registration status of a domain being transferred in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainRegistrationStatusTransfer {
    pub status: TransferStatus,
    pub vote_current_owner: bool,
    pub vote_new_owner: bool,
}

/// A registered domain as returned by the registrar's "get domain" operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Domain {
    pub domain: String,
    pub organization_id: String,
    pub project_id: String,
    pub auto_renew_status: DomainFeatureStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dnssec: Option<DomainDnssec>,
    pub epp_code: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expired_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub registrar: String,
    pub is_external: bool,
    pub status: DomainStatus,
    pub dns_zones: Vec<DnsZone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical_contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub administrative_contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_domain_registration_status: Option<DomainRegistrationStatusExternalDomain>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_registration_status: Option<DomainRegistrationStatusTransfer>,
    pub linked_products: Vec<LinkedProduct>,
    pub pending_trade: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tld: Option<Tld>,
}

// ============ DNS Records ============

/// A DNS record inside a zone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    pub id: String,
    pub name: String,
    pub data: String,
    pub priority: u32,
    pub ttl: u32,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}
