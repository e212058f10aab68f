//! 共享测试工具：断言宏、fixture 构造器和内存版 registrar

#![allow(dead_code)]

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use domain_registrar_provider::{
    BuyDomainsRequest, Contact, ContactExtensionFr, ContactExtensionFrAssociationInfo,
    ContactExtensionFrMode, ContactLegalForm, DnsZone, DnsZoneStatus, Domain, DomainDnssec,
    DomainFeatureStatus, DomainStatus, GetDomainRequest, LinkedProduct, Money, OrderResponse,
    RegistrarApi, RegistrarError, Result, StateMap, Tld, TldOffer, state_map,
};
use tokio::sync::RwLock;

/// 取出 `Some` 中的值；为 `None` 时测试失败并提前返回。
///
/// 不带消息时以表达式本身作为失败说明。
#[macro_export]
macro_rules! require_some {
    ($value:expr $(,)?) => {
        $crate::require_some!($value, "`{}` 为 None", stringify!($value))
    };
    ($value:expr, $($ctx:tt)+) => {{
        let slot = $value;
        assert!(slot.is_some(), "{}", format_args!($($ctx)+));
        let Some(inner) = slot else {
            return;
        };
        inner
    }};
}

/// 取出 `Ok` 中的值；为 `Err` 时测试失败（附带错误内容）并提前返回。
#[macro_export]
macro_rules! require_ok {
    ($value:expr $(,)?) => {
        $crate::require_ok!($value, "`{}` 返回错误", stringify!($value))
    };
    ($value:expr, $($ctx:tt)+) => {{
        let outcome = $value;
        assert!(
            outcome.is_ok(),
            "{} => {:?}",
            format_args!($($ctx)+),
            outcome.as_ref().err()
        );
        let Ok(inner) = outcome else {
            return;
        };
        inner
    }};
}

pub const TEST_PROJECT_ID: &str = "11111111-2222-3333-4444-555555555555";
pub const TEST_ORGANIZATION_ID: &str = "99999999-8888-7777-6666-555555555555";

// ===== Fixtures =====

/// 最小可下单配置：通过已有联系人 ID 指定 owner
pub fn order_config(domain_name: &str, owner_contact_id: &str) -> StateMap {
    state_map! {
        "domain_name" => domain_name,
        "duration_in_years" => 1_i64,
        "project_id" => TEST_PROJECT_ID,
        "owner_contact_id" => owner_contact_id,
    }
}

/// 内联 owner 联系人（带 `.fr` 协会扩展）
pub fn inline_owner_contact() -> StateMap {
    state_map! {
        "legal_form" => "association",
        "firstname" => "Marie",
        "lastname" => "Curie",
        "email" => "marie@example.fr",
        "phone_number" => "+33.123456789",
        "address_line_1" => "11 rue Pierre et Marie Curie",
        "zip" => "75005",
        "city" => "Paris",
        "country" => "FR",
        "company_name" => "Institut du Radium",
        "extension_fr" => state_map! {
            "mode" => "association",
            "association_info" => state_map! {
                "publication_jo" => "2024-05-06T00:00:00Z",
                "publication_jo_page" => 42.0_f64,
            },
        },
    }
}

pub fn sample_contact() -> Contact {
    Contact {
        id: "contact-9".to_string(),
        legal_form: ContactLegalForm::Individual,
        firstname: "Ada".to_string(),
        lastname: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone_number: "+44.2071234567".to_string(),
        address_line_1: "12 St James's Square".to_string(),
        zip: "SW1Y 4JH".to_string(),
        city: "London".to_string(),
        country: "GB".to_string(),
        lang: "en_US".to_string(),
        ..Default::default()
    }
}

pub fn sample_dns_zone(domain_name: &str, status: DnsZoneStatus) -> DnsZone {
    DnsZone {
        domain: domain_name.to_string(),
        ns: vec![
            "ns0.dom.scw.cloud".to_string(),
            "ns1.dom.scw.cloud".to_string(),
        ],
        ns_default: vec![
            "ns0.dom.scw.cloud".to_string(),
            "ns1.dom.scw.cloud".to_string(),
        ],
        status,
        updated_at: Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).single(),
        project_id: TEST_PROJECT_ID.to_string(),
        ..Default::default()
    }
}

pub fn sample_tld(name: &str) -> Tld {
    Tld {
        name: name.to_string(),
        dnssec_support: true,
        duration_in_years_min: 1,
        duration_in_years_max: 10,
        idn_support: false,
        offers: [(
            "create".to_string(),
            TldOffer {
                action: "create".to_string(),
                operation_path: "/domain/v2beta1/buy-domains".to_string(),
                price: Some(Money {
                    currency_code: "EUR".to_string(),
                    units: 9,
                    nanos: 990_000_000,
                }),
            },
        )]
        .into(),
        ..Default::default()
    }
}

/// 注册成功后 registrar 返回的典型域名
pub fn sample_domain(domain_name: &str, project_id: &str) -> Domain {
    let tld = domain_name.rsplit('.').next().unwrap_or_default();
    Domain {
        domain: domain_name.to_string(),
        organization_id: TEST_ORGANIZATION_ID.to_string(),
        project_id: project_id.to_string(),
        auto_renew_status: DomainFeatureStatus::Enabled,
        dnssec: Some(DomainDnssec {
            status: DomainFeatureStatus::Disabled,
        }),
        epp_code: vec!["clientTransferProhibited".to_string()],
        expired_at: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).single(),
        updated_at: Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).single(),
        registrar: "SCALEWAY".to_string(),
        status: DomainStatus::Active,
        dns_zones: vec![sample_dns_zone(domain_name, DnsZoneStatus::Active)],
        owner_contact: Some(sample_contact()),
        technical_contact: Some(sample_contact()),
        administrative_contact: Some(sample_contact()),
        linked_products: vec![LinkedProduct::Vpc],
        tld: Some(sample_tld(tld)),
        ..Default::default()
    }
}

/// 把内联 owner 配置转成 registrar 会回显的联系人
pub fn association_contact() -> Contact {
    Contact {
        legal_form: ContactLegalForm::Association,
        firstname: "Marie".to_string(),
        lastname: "Curie".to_string(),
        company_name: "Institut du Radium".to_string(),
        email: "marie@example.fr".to_string(),
        phone_number: "+33.123456789".to_string(),
        address_line_1: "11 rue Pierre et Marie Curie".to_string(),
        zip: "75005".to_string(),
        city: "Paris".to_string(),
        country: "FR".to_string(),
        extension_fr: Some(ContactExtensionFr {
            mode: ContactExtensionFrMode::Association,
            association_info: Some(ContactExtensionFrAssociationInfo {
                publication_jo: Utc.with_ymd_and_hms(2024, 5, 6, 0, 0, 0).single(),
                publication_jo_page: 42,
            }),
            ..Default::default()
        }),
        ..Default::default()
    }
}

// ===== MockRegistrar =====

/// 内存版 registrar：下单即注册成功，查询返回已注册的域名
pub struct MockRegistrar {
    /// 下单响应中使用的项目 ID（可与请求不同，用于验证 ID 取自响应）
    response_project_id: String,
    domains: RwLock<HashMap<String, Domain>>,
    orders: RwLock<Vec<BuyDomainsRequest>>,
    lookups: RwLock<Vec<String>>,
    /// 如果 Some，下一次调用返回此错误
    fail_next: RwLock<Option<RegistrarError>>,
}

impl MockRegistrar {
    pub fn new() -> Self {
        Self::with_response_project(TEST_PROJECT_ID)
    }

    pub fn with_response_project(project_id: &str) -> Self {
        Self {
            response_project_id: project_id.to_string(),
            domains: RwLock::new(HashMap::new()),
            orders: RwLock::new(Vec::new()),
            lookups: RwLock::new(Vec::new()),
            fail_next: RwLock::new(None),
        }
    }

    pub async fn insert_domain(&self, domain: Domain) {
        self.domains
            .write()
            .await
            .insert(domain.domain.clone(), domain);
    }

    pub async fn fail_next(&self, error: RegistrarError) {
        *self.fail_next.write().await = Some(error);
    }

    pub async fn orders(&self) -> Vec<BuyDomainsRequest> {
        self.orders.read().await.clone()
    }

    pub async fn lookups(&self) -> Vec<String> {
        self.lookups.read().await.clone()
    }

    async fn take_failure(&self) -> Option<RegistrarError> {
        self.fail_next.write().await.take()
    }
}

#[async_trait]
impl RegistrarApi for MockRegistrar {
    async fn buy_domains(&self, request: &BuyDomainsRequest) -> Result<OrderResponse> {
        if let Some(e) = self.take_failure().await {
            return Err(e);
        }
        self.orders.write().await.push(request.clone());

        let mut domains = self.domains.write().await;
        for name in &request.domains {
            let mut domain = sample_domain(name, &self.response_project_id);
            if request.owner_contact.is_some() {
                domain.owner_contact = Some(association_contact());
            }
            domains.insert(name.clone(), domain);
        }

        Ok(OrderResponse {
            domains: request.domains.clone(),
            organization_id: TEST_ORGANIZATION_ID.to_string(),
            project_id: self.response_project_id.clone(),
            task_id: format!("task-{}", self.orders.read().await.len()),
            created_at: Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).single(),
        })
    }

    async fn get_domain(&self, request: &GetDomainRequest) -> Result<Domain> {
        self.lookups.write().await.push(request.domain.clone());
        if let Some(e) = self.take_failure().await {
            return Err(e);
        }
        self.domains
            .read()
            .await
            .get(&request.domain)
            .cloned()
            .ok_or_else(|| RegistrarError::DomainNotFound {
                domain: request.domain.clone(),
            })
    }
}
