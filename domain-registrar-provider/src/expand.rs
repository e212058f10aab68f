//! Flat configuration → registrar request.
//!
//! Expansion never fails. Required fields that are missing read as empty strings and
//! are left for the registrar to reject; optional fields of the wrong type are dropped.

use crate::state::{StateMap, StateMapExt};
use crate::types::{
    BuyDomainsRequest, Contact, ContactExtensionEu, ContactExtensionFr,
    ContactExtensionFrAssociationInfo, ContactExtensionFrCodeAuthAfnicInfo,
    ContactExtensionFrDunsInfo, ContactExtensionFrIndividualInfo, ContactExtensionFrMode,
    ContactExtensionFrTrademarkInfo, ContactExtensionNl, ContactExtensionNlLegalForm,
    ContactLegalForm, NewContact,
};
use crate::utils::datetime::parse_rfc3339;

/// Registration length used when `duration_in_years` is not configured.
pub const DEFAULT_DURATION_IN_YEARS: u32 = 1;

/// The three contact roles of a domain registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactRole {
    Owner,
    Administrative,
    Technical,
}

impl ContactRole {
    /// Config key holding a reference to an existing contact.
    pub const fn id_key(self) -> &'static str {
        match self {
            Self::Owner => "owner_contact_id",
            Self::Administrative => "administrative_contact_id",
            Self::Technical => "technical_contact_id",
        }
    }

    /// Config key holding an inline contact map.
    pub const fn contact_key(self) -> &'static str {
        match self {
            Self::Owner => "owner_contact",
            Self::Administrative => "administrative_contact",
            Self::Technical => "technical_contact",
        }
    }
}

/// How a contact role ends up in the order.
#[derive(Debug, Clone, PartialEq)]
pub enum RoleContact {
    /// Reference to a contact the registrar already knows.
    Existing(String),
    /// Inline contact to be created with the order.
    New(Box<NewContact>),
}

/// Resolves one role: a non-empty ID wins, then a non-empty inline map, else nothing.
pub fn expand_role_contact(config: &StateMap, role: ContactRole) -> Option<RoleContact> {
    if let Some(id) = config.get_non_empty_str(role.id_key()) {
        return Some(RoleContact::Existing(id.to_string()));
    }
    config
        .get_non_empty_map(role.contact_key())
        .map(|contact| RoleContact::New(Box::new(expand_new_contact(contact))))
}

/// Builds the "buy domains" request for a single domain from resource configuration.
pub fn expand_buy_domains_request(config: &StateMap) -> BuyDomainsRequest {
    let mut request = BuyDomainsRequest {
        domains: vec![config.string_or_default("domain_name")],
        duration_in_years: expand_duration(config),
        project_id: config.string_or_default("project_id"),
        ..Default::default()
    };

    for role in [
        ContactRole::Owner,
        ContactRole::Administrative,
        ContactRole::Technical,
    ] {
        let (id_slot, contact_slot) = match role {
            ContactRole::Owner => (&mut request.owner_contact_id, &mut request.owner_contact),
            ContactRole::Administrative => (
                &mut request.administrative_contact_id,
                &mut request.administrative_contact,
            ),
            ContactRole::Technical => (
                &mut request.technical_contact_id,
                &mut request.technical_contact,
            ),
        };
        match expand_role_contact(config, role) {
            Some(RoleContact::Existing(id)) => *id_slot = Some(id),
            Some(RoleContact::New(contact)) => *contact_slot = Some(*contact),
            None => {}
        }
    }

    request
}

fn expand_duration(config: &StateMap) -> u32 {
    match config.get_i64("duration_in_years") {
        None => DEFAULT_DURATION_IN_YEARS,
        Some(years) => u32::try_from(years).unwrap_or_else(|_| {
            log::debug!("[registrar] duration_in_years {years} out of range, sending 0");
            0
        }),
    }
}

/// Expands an inline contact for an order.
///
/// Optional text fields are forwarded whenever their key exists, even with an empty
/// value, so an explicit `""` reaches the registrar while an unset key does not.
pub fn expand_new_contact(map: &StateMap) -> NewContact {
    let optional = |key: &str| map.get_str(key).map(str::to_string);

    NewContact {
        legal_form: expand_legal_form(map),
        firstname: map.string_or_default("firstname"),
        lastname: map.string_or_default("lastname"),
        company_name: optional("company_name"),
        email: map.string_or_default("email"),
        email_alt: optional("email_alt"),
        phone_number: map.string_or_default("phone_number"),
        fax_number: optional("fax_number"),
        address_line_1: map.string_or_default("address_line_1"),
        address_line_2: optional("address_line_2"),
        zip: map.string_or_default("zip"),
        city: map.string_or_default("city"),
        country: map.string_or_default("country"),
        vat_identification_code: optional("vat_identification_code"),
        company_identification_code: optional("company_identification_code"),
        resale: map.get_bool("resale").unwrap_or(false),
        extension_fr: map.get_non_empty_map("extension_fr").map(expand_extension_fr),
        extension_eu: map.get_non_empty_map("extension_eu").map(expand_extension_eu),
        whois_opt_in: map.get_bool("whois_opt_in").unwrap_or(false),
        state: optional("state"),
        extension_nl: map.get_non_empty_map("extension_nl").map(expand_extension_nl),
    }
}

/// Expands a full contact record, e.g. for contact updates.
///
/// Stricter than [`expand_new_contact`]: optional text fields are only taken when
/// non-empty, since [`Contact`] cannot tell an empty value from an unset one.
pub fn expand_contact(map: &StateMap) -> Contact {
    let mut contact = Contact {
        legal_form: expand_legal_form(map),
        firstname: map.string_or_default("firstname"),
        lastname: map.string_or_default("lastname"),
        email: map.string_or_default("email"),
        phone_number: map.string_or_default("phone_number"),
        address_line_1: map.string_or_default("address_line_1"),
        zip: map.string_or_default("zip"),
        city: map.string_or_default("city"),
        country: map.string_or_default("country"),
        ..Default::default()
    };

    let optional_fields: [(&str, &mut String); 8] = [
        ("company_name", &mut contact.company_name),
        ("email_alt", &mut contact.email_alt),
        ("fax_number", &mut contact.fax_number),
        ("address_line_2", &mut contact.address_line_2),
        ("vat_identification_code", &mut contact.vat_identification_code),
        (
            "company_identification_code",
            &mut contact.company_identification_code,
        ),
        ("lang", &mut contact.lang),
        ("state", &mut contact.state),
    ];
    for (key, slot) in optional_fields {
        if let Some(value) = map.get_non_empty_str(key) {
            *slot = value.to_string();
        }
    }

    if let Some(resale) = map.get_bool("resale") {
        contact.resale = resale;
    }
    if let Some(opt_in) = map.get_bool("whois_opt_in") {
        contact.whois_opt_in = opt_in;
    }

    contact.extension_fr = map.get_non_empty_map("extension_fr").map(expand_extension_fr);
    contact.extension_eu = map.get_non_empty_map("extension_eu").map(expand_extension_eu);
    contact.extension_nl = map.get_non_empty_map("extension_nl").map(expand_extension_nl);

    contact
}

fn expand_legal_form(map: &StateMap) -> ContactLegalForm {
    map.get_str("legal_form")
        .map_or_else(ContactLegalForm::default, ContactLegalForm::from_tag)
}

// ============ Extensions ============

/// Expands the `.fr` extension. Each info block is set only when its key holds a map.
pub fn expand_extension_fr(map: &StateMap) -> ContactExtensionFr {
    ContactExtensionFr {
        mode: map
            .get_str("mode")
            .map_or(ContactExtensionFrMode::ModeUnknown, ContactExtensionFrMode::from_tag),
        individual_info: map
            .get_map("individual_info")
            .map(expand_fr_individual_info),
        duns_info: map.get_map("duns_info").map(expand_fr_duns_info),
        association_info: map
            .get_map("association_info")
            .map(expand_fr_association_info),
        trademark_info: map.get_map("trademark_info").map(expand_fr_trademark_info),
        code_auth_afnic_info: map
            .get_map("code_auth_afnic_info")
            .map(expand_fr_code_auth_afnic_info),
    }
}

fn expand_fr_individual_info(map: &StateMap) -> ContactExtensionFrIndividualInfo {
    ContactExtensionFrIndividualInfo {
        whois_opt_in: map.get_bool("whois_opt_in").unwrap_or_default(),
    }
}

fn expand_fr_duns_info(map: &StateMap) -> ContactExtensionFrDunsInfo {
    ContactExtensionFrDunsInfo {
        duns_id: map.string_or_default("duns_id"),
        local_id: map.string_or_default("local_id"),
    }
}

/// `publication_jo` must be RFC 3339 and `publication_jo_page` a float; anything else
/// leaves the field unset.
fn expand_fr_association_info(map: &StateMap) -> ContactExtensionFrAssociationInfo {
    let publication_jo = map.get_str("publication_jo").and_then(|raw| {
        let parsed = parse_rfc3339(raw);
        if parsed.is_none() {
            log::debug!("[registrar] dropping unparsable publication_jo {raw:?}");
        }
        parsed
    });

    ContactExtensionFrAssociationInfo {
        publication_jo,
        publication_jo_page: map
            .get_f64("publication_jo_page")
            .map(truncate_page)
            .unwrap_or_default(),
    }
}

/// Saturating float → page number conversion (negative and NaN become 0).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn truncate_page(page: f64) -> u32 {
    page as u32
}

fn expand_fr_trademark_info(map: &StateMap) -> ContactExtensionFrTrademarkInfo {
    ContactExtensionFrTrademarkInfo {
        trademark_inpi: map.string_or_default("trademark_inpi"),
    }
}

fn expand_fr_code_auth_afnic_info(map: &StateMap) -> ContactExtensionFrCodeAuthAfnicInfo {
    ContactExtensionFrCodeAuthAfnicInfo {
        code_auth_afnic: map.string_or_default("code_auth_afnic"),
    }
}

pub fn expand_extension_eu(map: &StateMap) -> ContactExtensionEu {
    ContactExtensionEu {
        european_citizenship: map.string_or_default("european_citizenship"),
    }
}

pub fn expand_extension_nl(map: &StateMap) -> ContactExtensionNl {
    ContactExtensionNl {
        legal_form: map.get_str("legal_form").map_or(
            ContactExtensionNlLegalForm::LegalFormUnknown,
            ContactExtensionNlLegalForm::from_tag,
        ),
        legal_form_registration_number: map.string_or_default("legal_form_registration_number"),
    }
}
