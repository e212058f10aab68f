//! Registrar response → flat resource state.
//!
//! A nested object that the registrar left out produces no key at all, never an empty
//! placeholder, so the host does not see drift where nothing changed. Timestamps are
//! rendered as RFC 3339 and enums as their wire tags.

use std::collections::BTreeMap;

use crate::state::{StateMap, StateValue};
use crate::types::{
    Contact, ContactExtensionEu, ContactExtensionFr, ContactExtensionFrAssociationInfo,
    ContactExtensionFrCodeAuthAfnicInfo, ContactExtensionFrDunsInfo,
    ContactExtensionFrIndividualInfo, ContactExtensionFrTrademarkInfo, ContactExtensionNl,
    DnsZone, Domain, DomainRegistrationStatusExternalDomain, DomainRegistrationStatusTransfer,
    Money, Tld, TldOffer,
};
use crate::utils::datetime::format_rfc3339;

fn set(map: &mut StateMap, key: &str, value: impl Into<StateValue>) {
    map.insert(key.to_string(), value.into());
}

fn set_opt<T: Into<StateValue>>(map: &mut StateMap, key: &str, value: Option<T>) {
    if let Some(value) = value {
        set(map, key, value);
    }
}

/// Flattens a whole domain into resource state.
pub fn flatten_domain(domain: &Domain) -> StateMap {
    let mut state = StateMap::new();

    set(&mut state, "domain_name", domain.domain.as_str());
    set(&mut state, "organization_id", domain.organization_id.as_str());
    set(&mut state, "project_id", domain.project_id.as_str());
    set(&mut state, "auto_renew_status", domain.auto_renew_status.as_str());
    set_opt(
        &mut state,
        "expired_at",
        domain.expired_at.as_ref().map(format_rfc3339),
    );
    set_opt(
        &mut state,
        "updated_at",
        domain.updated_at.as_ref().map(format_rfc3339),
    );
    set(&mut state, "registrar", domain.registrar.as_str());
    set(&mut state, "is_external", domain.is_external);
    set(&mut state, "status", domain.status.as_str());
    set(&mut state, "pending_trade", domain.pending_trade);

    set_opt(
        &mut state,
        "owner_contact",
        domain.owner_contact.as_ref().map(flatten_contact),
    );
    set_opt(
        &mut state,
        "technical_contact",
        domain.technical_contact.as_ref().map(flatten_contact),
    );
    set_opt(
        &mut state,
        "administrative_contact",
        domain.administrative_contact.as_ref().map(flatten_contact),
    );

    set_opt(
        &mut state,
        "dnssec_status",
        domain.dnssec.as_ref().map(|d| d.status.as_str()),
    );
    set(&mut state, "epp_code", domain.epp_code.clone());
    set_opt(&mut state, "tld", domain.tld.as_ref().map(flatten_tld));
    set_opt(
        &mut state,
        "transfer_registration_status",
        domain
            .transfer_registration_status
            .as_ref()
            .map(flatten_transfer_registration_status),
    );
    set_opt(
        &mut state,
        "external_domain_registration_status",
        domain
            .external_domain_registration_status
            .as_ref()
            .map(flatten_external_registration_status),
    );
    set(
        &mut state,
        "linked_products",
        domain
            .linked_products
            .iter()
            .map(|p| p.as_str().to_string())
            .collect::<Vec<_>>(),
    );
    set_opt(&mut state, "dns_zones", flatten_dns_zones(&domain.dns_zones));

    state
}

/// Flattens a contact. The registrar-assigned `id` is not part of the state.
pub fn flatten_contact(contact: &Contact) -> StateMap {
    let mut map = StateMap::new();

    set(&mut map, "phone_number", contact.phone_number.as_str());
    set(&mut map, "legal_form", contact.legal_form.as_str());
    set(&mut map, "firstname", contact.firstname.as_str());
    set(&mut map, "lastname", contact.lastname.as_str());
    set(&mut map, "email", contact.email.as_str());
    set(&mut map, "address_line_1", contact.address_line_1.as_str());
    set(&mut map, "zip", contact.zip.as_str());
    set(&mut map, "city", contact.city.as_str());
    set(&mut map, "country", contact.country.as_str());
    set(&mut map, "company_name", contact.company_name.as_str());
    set(&mut map, "email_alt", contact.email_alt.as_str());
    set(&mut map, "fax_number", contact.fax_number.as_str());
    set(&mut map, "address_line_2", contact.address_line_2.as_str());
    set(
        &mut map,
        "vat_identification_code",
        contact.vat_identification_code.as_str(),
    );
    set(
        &mut map,
        "company_identification_code",
        contact.company_identification_code.as_str(),
    );
    set(&mut map, "lang", contact.lang.as_str());
    set(&mut map, "resale", contact.resale);
    set(&mut map, "state", contact.state.as_str());
    set(&mut map, "whois_opt_in", contact.whois_opt_in);

    set_opt(
        &mut map,
        "extension_fr",
        contact.extension_fr.as_ref().map(flatten_extension_fr),
    );
    set_opt(
        &mut map,
        "extension_eu",
        contact.extension_eu.as_ref().map(flatten_extension_eu),
    );
    set_opt(
        &mut map,
        "extension_nl",
        contact.extension_nl.as_ref().map(flatten_extension_nl),
    );

    map
}

// ============ Extensions ============

pub fn flatten_extension_fr(ext: &ContactExtensionFr) -> StateMap {
    let mut map = StateMap::new();
    set(&mut map, "mode", ext.mode.as_str());
    set_opt(
        &mut map,
        "individual_info",
        ext.individual_info.as_ref().map(flatten_fr_individual_info),
    );
    set_opt(
        &mut map,
        "duns_info",
        ext.duns_info.as_ref().map(flatten_fr_duns_info),
    );
    set_opt(
        &mut map,
        "association_info",
        ext.association_info.as_ref().map(flatten_fr_association_info),
    );
    set_opt(
        &mut map,
        "trademark_info",
        ext.trademark_info.as_ref().map(flatten_fr_trademark_info),
    );
    set_opt(
        &mut map,
        "code_auth_afnic_info",
        ext.code_auth_afnic_info
            .as_ref()
            .map(flatten_fr_code_auth_afnic_info),
    );
    map
}

fn flatten_fr_individual_info(info: &ContactExtensionFrIndividualInfo) -> StateMap {
    let mut map = StateMap::new();
    set(&mut map, "whois_opt_in", info.whois_opt_in);
    map
}

fn flatten_fr_duns_info(info: &ContactExtensionFrDunsInfo) -> StateMap {
    let mut map = StateMap::new();
    set(&mut map, "duns_id", info.duns_id.as_str());
    set(&mut map, "local_id", info.local_id.as_str());
    map
}

/// The page number is stored as a float, the only form the expander reads back.
fn flatten_fr_association_info(info: &ContactExtensionFrAssociationInfo) -> StateMap {
    let mut map = StateMap::new();
    set_opt(
        &mut map,
        "publication_jo",
        info.publication_jo.as_ref().map(format_rfc3339),
    );
    set(
        &mut map,
        "publication_jo_page",
        f64::from(info.publication_jo_page),
    );
    map
}

fn flatten_fr_trademark_info(info: &ContactExtensionFrTrademarkInfo) -> StateMap {
    let mut map = StateMap::new();
    set(&mut map, "trademark_inpi", info.trademark_inpi.as_str());
    map
}

fn flatten_fr_code_auth_afnic_info(info: &ContactExtensionFrCodeAuthAfnicInfo) -> StateMap {
    let mut map = StateMap::new();
    set(&mut map, "code_auth_afnic", info.code_auth_afnic.as_str());
    map
}

pub fn flatten_extension_eu(ext: &ContactExtensionEu) -> StateMap {
    let mut map = StateMap::new();
    set(
        &mut map,
        "european_citizenship",
        ext.european_citizenship.as_str(),
    );
    map
}

pub fn flatten_extension_nl(ext: &ContactExtensionNl) -> StateMap {
    let mut map = StateMap::new();
    set(&mut map, "legal_form", ext.legal_form.as_str());
    set(
        &mut map,
        "legal_form_registration_number",
        ext.legal_form_registration_number.as_str(),
    );
    map
}

// ============ TLD ============

pub fn flatten_tld(tld: &Tld) -> StateMap {
    let mut map = StateMap::new();
    set(&mut map, "name", tld.name.as_str());
    set(&mut map, "dnssec_support", tld.dnssec_support);
    set(&mut map, "duration_in_years_min", tld.duration_in_years_min);
    set(&mut map, "duration_in_years_max", tld.duration_in_years_max);
    set(&mut map, "idn_support", tld.idn_support);
    set(&mut map, "offers", flatten_tld_offers(&tld.offers));
    set(
        &mut map,
        "specifications",
        tld.specifications
            .iter()
            .map(|(k, v)| (k.clone(), StateValue::from(v.as_str())))
            .collect::<StateMap>(),
    );
    map
}

fn flatten_tld_offers(offers: &BTreeMap<String, TldOffer>) -> StateMap {
    offers
        .iter()
        .map(|(name, offer)| {
            let mut map = StateMap::new();
            set(&mut map, "action", offer.action.as_str());
            set(&mut map, "operation_path", offer.operation_path.as_str());
            set_opt(&mut map, "price", offer.price.as_ref().map(flatten_money));
            (name.clone(), StateValue::Map(map))
        })
        .collect()
}

fn flatten_money(price: &Money) -> StateMap {
    let mut map = StateMap::new();
    set(&mut map, "currency_code", price.currency_code.as_str());
    set(&mut map, "units", price.units);
    set(&mut map, "nanos", price.nanos);
    map
}

// ============ DNS zones & registration status ============

/// Flattens zones in order. An empty zone list produces no key.
pub fn flatten_dns_zones(zones: &[DnsZone]) -> Option<Vec<StateMap>> {
    if zones.is_empty() {
        return None;
    }

    Some(
        zones
            .iter()
            .map(|zone| {
                let mut map = StateMap::new();
                set(&mut map, "domain", zone.domain.as_str());
                set(&mut map, "subdomain", zone.subdomain.as_str());
                set(&mut map, "ns", zone.ns.clone());
                set(&mut map, "ns_default", zone.ns_default.clone());
                set(&mut map, "ns_master", zone.ns_master.clone());
                set(&mut map, "status", zone.status.as_str());
                set_opt(&mut map, "message", zone.message.as_deref());
                set_opt(
                    &mut map,
                    "updated_at",
                    zone.updated_at.as_ref().map(format_rfc3339),
                );
                set(&mut map, "project_id", zone.project_id.as_str());
                map
            })
            .collect(),
    )
}

pub fn flatten_transfer_registration_status(
    status: &DomainRegistrationStatusTransfer,
) -> StateMap {
    let mut map = StateMap::new();
    set(&mut map, "status", status.status.as_str());
    set(&mut map, "vote_current_owner", status.vote_current_owner);
    set(&mut map, "vote_new_owner", status.vote_new_owner);
    map
}

pub fn flatten_external_registration_status(
    status: &DomainRegistrationStatusExternalDomain,
) -> StateMap {
    let mut map = StateMap::new();
    set(&mut map, "validation_token", status.validation_token.as_str());
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expand::{expand_contact, expand_new_contact};
    use crate::state::StateMapExt;
    use crate::types::{
        ContactExtensionFrMode, ContactLegalForm, DnsZoneStatus, DomainDnssec,
        DomainFeatureStatus, TransferStatus,
    };
    use crate::utils::datetime::parse_rfc3339;

    fn contact() -> Contact {
        Contact {
            id: "c-1".to_string(),
            legal_form: ContactLegalForm::Corporate,
            firstname: "Grace".to_string(),
            lastname: "Hopper".to_string(),
            company_name: "Navy".to_string(),
            email: "grace@example.com".to_string(),
            phone_number: "+1.5555555".to_string(),
            address_line_1: "1 Main St".to_string(),
            zip: "10001".to_string(),
            city: "New York".to_string(),
            country: "US".to_string(),
            whois_opt_in: true,
            ..Default::default()
        }
    }

    fn zone(domain: &str, status: DnsZoneStatus, updated_at: &str) -> DnsZone {
        DnsZone {
            domain: domain.to_string(),
            ns: vec!["ns0.dom.scw.cloud".to_string(), "ns1.dom.scw.cloud".to_string()],
            status,
            updated_at: parse_rfc3339(updated_at),
            project_id: "proj-1".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn two_dns_zones_keep_order_and_fields() {
        let domain = Domain {
            dns_zones: vec![
                zone("example.com", DnsZoneStatus::Active, "2025-01-02T03:04:05Z"),
                zone("example.com", DnsZoneStatus::Pending, "2025-02-03T04:05:06Z"),
            ],
            ..Default::default()
        };
        let state = flatten_domain(&domain);
        let zones = state.get("dns_zones").and_then(StateValue::as_list);
        assert!(zones.is_some(), "dns_zones missing: {state:?}");
        let Some(zones) = zones else {
            return;
        };
        assert_eq!(zones.len(), 2);

        let first = zones[0].as_map().cloned().unwrap_or_default();
        let second = zones[1].as_map().cloned().unwrap_or_default();
        assert_eq!(first.get_str("status"), Some("active"));
        assert_eq!(second.get_str("status"), Some("pending"));
        assert_eq!(first.get_str("updated_at"), Some("2025-01-02T03:04:05Z"));
        assert_eq!(second.get_str("updated_at"), Some("2025-02-03T04:05:06Z"));
        assert_eq!(
            first.get("ns"),
            Some(&StateValue::from(vec![
                "ns0.dom.scw.cloud".to_string(),
                "ns1.dom.scw.cloud".to_string()
            ]))
        );
        assert!(first.get("message").is_none());
    }

    #[test]
    fn absent_nested_objects_produce_no_keys() {
        let state = flatten_domain(&Domain::default());
        for key in [
            "owner_contact",
            "technical_contact",
            "administrative_contact",
            "dnssec_status",
            "tld",
            "transfer_registration_status",
            "external_domain_registration_status",
            "dns_zones",
            "expired_at",
            "updated_at",
        ] {
            assert!(state.get(key).is_none(), "unexpected key {key}");
        }
        assert_eq!(state.get_str("status"), Some("status_unknown"));
        assert_eq!(state.get("epp_code"), Some(&StateValue::List(vec![])));
    }

    #[test]
    fn scalar_fields_and_statuses() {
        let domain = Domain {
            domain: "example.com".to_string(),
            organization_id: "org-1".to_string(),
            project_id: "proj-1".to_string(),
            auto_renew_status: DomainFeatureStatus::Enabled,
            dnssec: Some(DomainDnssec {
                status: DomainFeatureStatus::Disabled,
            }),
            expired_at: parse_rfc3339("2027-06-01T00:00:00+00:00"),
            registrar: "SCALEWAY".to_string(),
            transfer_registration_status: Some(DomainRegistrationStatusTransfer {
                status: TransferStatus::WaitingVote,
                vote_current_owner: true,
                vote_new_owner: false,
            }),
            external_domain_registration_status: Some(DomainRegistrationStatusExternalDomain {
                validation_token: "tok".to_string(),
            }),
            ..Default::default()
        };
        let state = flatten_domain(&domain);
        assert_eq!(state.get_str("domain_name"), Some("example.com"));
        assert_eq!(state.get_str("auto_renew_status"), Some("enabled"));
        assert_eq!(state.get_str("dnssec_status"), Some("disabled"));
        assert_eq!(state.get_str("expired_at"), Some("2027-06-01T00:00:00Z"));
        assert_eq!(state.get_bool("is_external"), Some(false));

        let transfer = state
            .get_map("transfer_registration_status")
            .cloned()
            .unwrap_or_default();
        assert_eq!(transfer.get_str("status"), Some("waiting_vote"));
        assert_eq!(transfer.get_bool("vote_current_owner"), Some(true));

        let external = state
            .get_map("external_domain_registration_status")
            .cloned()
            .unwrap_or_default();
        assert_eq!(external.get_str("validation_token"), Some("tok"));
    }

    #[test]
    fn unlisted_registrar_tags_flatten_verbatim() {
        let res: serde_json::Result<Domain> = serde_json::from_str(
            r#"{
                "domain": "example.com",
                "status": "transfer_pending",
                "auto_renew_status": "enabling_soon",
                "dnssec": {"status": "enabled"},
                "linked_products": ["vpc", "ipam"],
                "owner_contact": {"legal_form": "organization", "extension_nl": {"legal_form": "Natural_Person"}},
                "dns_zones": [{"domain": "example.com", "status": "locked"}]
            }"#,
        );
        assert!(res.is_ok(), "parse failed: {res:?}");
        let Ok(domain) = res else {
            return;
        };

        let state = flatten_domain(&domain);
        assert_eq!(state.get_str("status"), Some("transfer_pending"));
        assert_eq!(state.get_str("auto_renew_status"), Some("enabling_soon"));
        assert_eq!(state.get_str("dnssec_status"), Some("enabled"));
        assert_eq!(
            state.get("linked_products"),
            Some(&StateValue::from(vec!["vpc".to_string(), "ipam".to_string()]))
        );

        let owner = state.get_map("owner_contact").cloned().unwrap_or_default();
        assert_eq!(owner.get_str("legal_form"), Some("organization"));
        assert_eq!(
            owner
                .get_map("extension_nl")
                .and_then(|nl| nl.get_str("legal_form")),
            Some("Natural_Person")
        );

        let zone = state
            .get("dns_zones")
            .and_then(StateValue::as_list)
            .and_then(|zones| zones.first())
            .and_then(StateValue::as_map)
            .cloned()
            .unwrap_or_default();
        assert_eq!(zone.get_str("status"), Some("locked"));

        // Tags survive another expand and flatten pass.
        let again = flatten_contact(&expand_contact(&owner));
        assert_eq!(again.get_str("legal_form"), Some("organization"));
        assert_eq!(again, owner);
    }

    #[test]
    fn tld_offers_and_price() {
        let tld = Tld {
            name: "fr".to_string(),
            dnssec_support: true,
            duration_in_years_min: 1,
            duration_in_years_max: 10,
            offers: [(
                "create".to_string(),
                TldOffer {
                    action: "create".to_string(),
                    operation_path: "/buy".to_string(),
                    price: Some(Money {
                        currency_code: "EUR".to_string(),
                        units: 7,
                        nanos: 500_000_000,
                    }),
                },
            )]
            .into(),
            specifications: [("idn".to_string(), "false".to_string())].into(),
            ..Default::default()
        };
        let map = flatten_tld(&tld);
        assert_eq!(map.get_i64("duration_in_years_max"), Some(10));
        let price = map
            .get_map("offers")
            .and_then(|o| o.get_map("create"))
            .and_then(|c| c.get_map("price"))
            .cloned()
            .unwrap_or_default();
        assert_eq!(price.get_str("currency_code"), Some("EUR"));
        assert_eq!(price.get_i64("units"), Some(7));
        assert_eq!(price.get_i64("nanos"), Some(500_000_000));
        assert_eq!(
            map.get_map("specifications").and_then(|s| s.get_str("idn")),
            Some("false")
        );
    }

    #[test]
    fn fr_extension_only_emits_present_blocks() {
        let ext = ContactExtensionFr {
            mode: ContactExtensionFrMode::Association,
            association_info: Some(ContactExtensionFrAssociationInfo {
                publication_jo: None,
                publication_jo_page: 12,
            }),
            ..Default::default()
        };
        let map = flatten_extension_fr(&ext);
        assert_eq!(map.get_str("mode"), Some("association"));
        assert!(map.get("duns_info").is_none());
        let assoc = map.get_map("association_info").cloned().unwrap_or_default();
        assert!(assoc.get("publication_jo").is_none());
        assert_eq!(assoc.get_f64("publication_jo_page"), Some(12.0));
    }

    #[test]
    fn contact_round_trip_matches_literal_expansion() {
        let flattened = flatten_contact(&contact());
        let literal = state_map_of_contact_literals();
        assert_eq!(expand_new_contact(&flattened), expand_new_contact(&literal));
    }

    fn state_map_of_contact_literals() -> StateMap {
        crate::state_map! {
            "phone_number" => "+1.5555555",
            "legal_form" => "corporate",
            "firstname" => "Grace",
            "lastname" => "Hopper",
            "email" => "grace@example.com",
            "address_line_1" => "1 Main St",
            "zip" => "10001",
            "city" => "New York",
            "country" => "US",
            "company_name" => "Navy",
            "email_alt" => "",
            "fax_number" => "",
            "address_line_2" => "",
            "vat_identification_code" => "",
            "company_identification_code" => "",
            "lang" => "",
            "resale" => false,
            "state" => "",
            "whois_opt_in" => true,
        }
    }

    #[test]
    fn flatten_expand_flatten_is_stable_with_extensions() {
        let mut original = contact();
        original.lang = "en_US".to_string();
        original.extension_fr = Some(ContactExtensionFr {
            mode: ContactExtensionFrMode::Association,
            association_info: Some(ContactExtensionFrAssociationInfo {
                publication_jo: parse_rfc3339("2024-05-06T00:00:00Z"),
                publication_jo_page: 42,
            }),
            ..Default::default()
        });
        original.extension_eu = Some(ContactExtensionEu {
            european_citizenship: "FR".to_string(),
        });

        let once = flatten_contact(&original);
        let twice = flatten_contact(&expand_contact(&once));
        assert_eq!(once, twice);
    }
}
