use serde::{Deserialize, Serialize};

// ============ Market Types ============

/// Identifies a marketplace platform.
///
/// Adapter-backed variants (Coupang, Naver) are gated behind their feature
/// flags. The remaining variants exist so credentials stored for not-yet
/// implemented marketplaces still parse and report a clean
/// `UnsupportedMarket` error instead of failing deserialization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MarketType {
    /// Coupang Wing open API. Requires feature `coupang`.
    #[cfg(feature = "coupang")]
    #[serde(rename = "COUPANG")]
    Coupang,
    /// Naver Smart Store commerce API. Requires feature `naver`.
    #[cfg(feature = "naver")]
    #[serde(rename = "NAVER")]
    Naver,
    /// 11st open market. No adapter yet.
    #[serde(rename = "11ST")]
    ElevenSt,
    /// Gmarket. No adapter yet.
    #[serde(rename = "GMARKET")]
    Gmarket,
    /// Auction. No adapter yet.
    #[serde(rename = "AUCTION")]
    Auction,
}

impl MarketType {
    /// Whether an adapter implementation exists for this marketplace.
    #[must_use]
    pub fn is_supported(&self) -> bool {
        match self {
            #[cfg(feature = "coupang")]
            Self::Coupang => true,
            #[cfg(feature = "naver")]
            Self::Naver => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for MarketType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(feature = "coupang")]
            Self::Coupang => write!(f, "COUPANG"),
            #[cfg(feature = "naver")]
            Self::Naver => write!(f, "NAVER"),
            Self::ElevenSt => write!(f, "11ST"),
            Self::Gmarket => write!(f, "GMARKET"),
            Self::Auction => write!(f, "AUCTION"),
        }
    }
}

// ============ Order Types ============

/// Canonical order lifecycle status, shared across all marketplaces.
///
/// Each adapter maps the vendor's native status vocabulary onto these six
/// states. Serialized as uppercase strings (`"NEW"`, `"PENDING"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    /// Paid, awaiting seller confirmation.
    New,
    /// Confirmed, being prepared for shipment.
    Pending,
    /// Handed to the carrier, in transit.
    Shipping,
    /// Delivery completed.
    Delivered,
    /// Cancelled by buyer or seller.
    Cancelled,
    /// Returned or exchanged through reverse logistics.
    Returned,
}

impl OrderStatus {
    /// All canonical statuses, in lifecycle order.
    pub const ALL: [Self; 6] = [
        Self::New,
        Self::Pending,
        Self::Shipping,
        Self::Delivered,
        Self::Cancelled,
        Self::Returned,
    ];
}

/// Uniqueness key for an order: the marketplace plus the vendor's own order
/// number. Two fetches of the same vendor order always produce the same key,
/// which is what makes the sync merge idempotent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderKey {
    /// Marketplace the order came from.
    pub market: MarketType,
    /// Vendor-assigned order number, unique within that marketplace.
    pub vendor_order_no: String,
}

/// A single line item within an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Product name as listed on the marketplace.
    pub product_name: String,
    /// Vendor's product/SKU identifier.
    pub product_id: String,
    /// Option text (size, color, ...), if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option: Option<String>,
    /// Ordered quantity.
    pub quantity: u32,
    /// Unit price in KRW.
    pub unit_price: i64,
}

/// A marketplace order in canonical form.
///
/// Produced by adapters from vendor payloads; every marketplace-specific
/// field has already been mapped by the time an `Order` exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Stable display/storage id, `"{MARKET}-{vendor_order_no}"`.
    pub id: String,
    /// Marketplace the order came from.
    pub market: MarketType,
    /// Vendor-assigned order number.
    pub vendor_order_no: String,
    /// Canonical lifecycle status.
    pub status: OrderStatus,
    /// Buyer (orderer) name.
    pub orderer_name: String,
    /// Recipient name.
    pub receiver_name: String,
    /// Recipient phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_phone: Option<String>,
    /// Shipping address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_address: Option<String>,
    /// Line items.
    pub items: Vec<OrderItem>,
    /// Total paid amount in KRW.
    pub total_price: i64,
    /// Carrier code, once an invoice has been registered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
    /// Tracking/invoice number, once registered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_no: Option<String>,
    /// When the order was placed, if the vendor reported it.
    #[serde(with = "crate::utils::datetime")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordered_at: Option<chrono::DateTime<chrono::Utc>>,
    /// When this canonical form was produced.
    pub fetched_at: chrono::DateTime<chrono::Utc>,
}

impl Order {
    /// Compose the stable order id from the marketplace and vendor number.
    #[must_use]
    pub fn compose_id(market: MarketType, vendor_order_no: &str) -> String {
        format!("{market}-{vendor_order_no}")
    }

    /// The uniqueness key for this order.
    #[must_use]
    pub fn key(&self) -> OrderKey {
        OrderKey {
            market: self.market,
            vendor_order_no: self.vendor_order_no.clone(),
        }
    }
}

/// Parameters for an order fetch.
///
/// Dates are optional; each adapter computes a vendor-appropriate default
/// window when they are absent (Coupang uses KST calendar dates, Naver a
/// 24-hour lookback).
///
/// # Default
///
/// The default is `New` orders with no explicit window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchParams {
    /// Start of the lookup window (inclusive).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<chrono::DateTime<chrono::Utc>>,
    /// End of the lookup window (inclusive).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until: Option<chrono::DateTime<chrono::Utc>>,
    /// Canonical status to query for. Adapters translate this into the
    /// vendor's native status vocabulary.
    pub status: OrderStatus,
}

impl Default for FetchParams {
    fn default() -> Self {
        Self {
            since: None,
            until: None,
            status: OrderStatus::New,
        }
    }
}

// ============ Market Metadata Types ============

/// The input type of a credential field (affects UI rendering).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Plain text input.
    Text,
    /// Masked/password input.
    Password,
}

/// Definition of a single credential field required by a marketplace.
///
/// Used to dynamically build credential forms in UIs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketCredentialField {
    /// Machine-readable field key (e.g., `"accessKey"`).
    pub key: String,
    /// Human-readable label (e.g., `"Access Key"`).
    pub label: String,
    /// Input type for UI rendering.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Optional placeholder text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Optional help/description text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
}

/// Marketplace-specific capability flags.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MarketFeatures {
    /// Whether the vendor restricts API calls to allowlisted egress IPs.
    pub ip_allowlist: bool,
    /// Whether invoice (tracking number) registration is supported.
    pub invoice_registration: bool,
}

/// Marketplace-specific API limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketLimits {
    /// Maximum date-window width in days for an order listing call.
    pub max_window_days: u32,
    /// Maximum order ids per detail-lookup batch, if the API is two-step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_detail_batch: Option<u32>,
}

/// Static metadata describing a marketplace adapter.
///
/// Obtain via [`MarketAdapter::metadata()`](crate::MarketAdapter::metadata) or
/// [`get_all_market_metadata()`](crate::get_all_market_metadata).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketMetadata {
    /// Marketplace identifier.
    pub id: MarketType,
    /// Human-readable marketplace name.
    pub name: String,
    /// Short description of the marketplace API.
    pub description: String,
    /// Credential fields required to authenticate with this marketplace.
    pub required_fields: Vec<MarketCredentialField>,
    /// Capability flags for this marketplace.
    pub features: MarketFeatures,
    /// API limits for this marketplace.
    pub limits: MarketLimits,
}

// ============ Credential Types ============

/// Validation error for marketplace credentials.
///
/// Returned when credential fields are missing, empty, or malformed.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CredentialValidationError {
    /// A required credential field is missing entirely.
    MissingField {
        /// Which marketplace the error relates to.
        market: MarketType,
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
    /// A credential field is present but empty after sanitization.
    EmptyField {
        /// Which marketplace the error relates to.
        market: MarketType,
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
    /// A credential field has an invalid format.
    InvalidFormat {
        /// Which marketplace the error relates to.
        market: MarketType,
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
        /// Description of what's wrong with the format.
        reason: String,
    },
}

impl std::fmt::Display for CredentialValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { label, .. } => write!(f, "Missing required field: {label}"),
            Self::EmptyField { label, .. } => write!(f, "Field must not be empty: {label}"),
            Self::InvalidFormat { label, reason, .. } => write!(f, "{label}: {reason}"),
        }
    }
}

impl std::error::Error for CredentialValidationError {}

/// Type-safe credential container for all supported marketplaces.
///
/// Each variant holds the authentication fields required by that
/// marketplace. Pass this to [`create_market()`](crate::create_market) to
/// instantiate an adapter.
///
/// # Serialization
///
/// Serialized as a tagged enum with `"market"` as the tag and
/// `"credentials"` as the content:
///
/// ```json
/// { "market": "COUPANG", "credentials": { "vendor_id": "A00934559", ... } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "market", content = "credentials")]
pub enum MarketCredentials {
    /// Coupang Wing open API keys. Requires feature `coupang`.
    #[cfg(feature = "coupang")]
    #[serde(rename = "COUPANG")]
    Coupang {
        /// Coupang vendor id (e.g., `"A00123456"`).
        vendor_id: String,
        /// HMAC access key.
        access_key: String,
        /// HMAC secret key.
        secret_key: String,
    },

    /// Naver commerce API application keys. Requires feature `naver`.
    #[cfg(feature = "naver")]
    #[serde(rename = "NAVER")]
    Naver {
        /// Application client id.
        client_id: String,
        /// Application client secret.
        client_secret: String,
    },

    /// 11st open API key. Stored but no adapter exists yet.
    #[serde(rename = "11ST")]
    ElevenSt {
        /// 11st open API key.
        api_key: String,
    },

    /// Gmarket seller login. Stored but no adapter exists yet.
    #[serde(rename = "GMARKET")]
    Gmarket {
        /// Seller account id.
        username: String,
        /// Seller account password.
        password: String,
    },

    /// Auction seller login. Stored but no adapter exists yet.
    #[serde(rename = "AUCTION")]
    Auction {
        /// Seller account id.
        username: String,
        /// Seller account password.
        password: String,
    },
}

impl MarketCredentials {
    /// Construct credentials from a `HashMap`, validating required fields.
    ///
    /// Useful for deserializing credentials stored in a flat key-value format.
    /// Fields are sanitized (whitespace, zero-width characters, and quotes
    /// stripped) before validation.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialValidationError`] if a required field is missing
    /// or empty after sanitization.
    pub fn from_map(
        market: MarketType,
        map: &std::collections::HashMap<String, String>,
    ) -> Result<Self, CredentialValidationError> {
        match market {
            #[cfg(feature = "coupang")]
            MarketType::Coupang => Ok(Self::Coupang {
                vendor_id: Self::get_required_field(market, map, "vendorId", "Vendor ID")?,
                access_key: Self::get_required_field(market, map, "accessKey", "Access Key")?,
                secret_key: Self::get_required_field(market, map, "secretKey", "Secret Key")?,
            }),
            #[cfg(feature = "naver")]
            MarketType::Naver => Ok(Self::Naver {
                client_id: Self::get_required_field(market, map, "clientId", "Client ID")?,
                client_secret: Self::get_required_field(
                    market,
                    map,
                    "clientSecret",
                    "Client Secret",
                )?,
            }),
            MarketType::ElevenSt => Ok(Self::ElevenSt {
                api_key: Self::get_required_field(market, map, "apiKey", "API Key")?,
            }),
            MarketType::Gmarket => Ok(Self::Gmarket {
                username: Self::get_required_field(market, map, "username", "Username")?,
                password: Self::get_required_field(market, map, "password", "Password")?,
            }),
            MarketType::Auction => Ok(Self::Auction {
                username: Self::get_required_field(market, map, "username", "Username")?,
                password: Self::get_required_field(market, map, "password", "Password")?,
            }),
        }
    }

    /// Obtain a required field from the map, sanitize it, and verify it is
    /// not empty.
    fn get_required_field(
        market: MarketType,
        map: &std::collections::HashMap<String, String>,
        key: &str,
        label: &str,
    ) -> Result<String, CredentialValidationError> {
        match map.get(key) {
            None => Err(CredentialValidationError::MissingField {
                market,
                field: key.to_string(),
                label: label.to_string(),
            }),
            Some(v) => {
                let cleaned = crate::utils::sanitize::clean_credential_field(v);
                if cleaned.is_empty() {
                    Err(CredentialValidationError::EmptyField {
                        market,
                        field: key.to_string(),
                        label: label.to_string(),
                    })
                } else {
                    Ok(cleaned)
                }
            }
        }
    }

    /// Convert credentials to a `HashMap` for flat key-value storage.
    pub fn to_map(&self) -> std::collections::HashMap<String, String> {
        match self {
            #[cfg(feature = "coupang")]
            Self::Coupang {
                vendor_id,
                access_key,
                secret_key,
            } => [
                ("vendorId".to_string(), vendor_id.clone()),
                ("accessKey".to_string(), access_key.clone()),
                ("secretKey".to_string(), secret_key.clone()),
            ]
            .into(),
            #[cfg(feature = "naver")]
            Self::Naver {
                client_id,
                client_secret,
            } => [
                ("clientId".to_string(), client_id.clone()),
                ("clientSecret".to_string(), client_secret.clone()),
            ]
            .into(),
            Self::ElevenSt { api_key } => [("apiKey".to_string(), api_key.clone())].into(),
            Self::Gmarket { username, password } | Self::Auction { username, password } => [
                ("username".to_string(), username.clone()),
                ("password".to_string(), password.clone()),
            ]
            .into(),
        }
    }

    /// Returns a copy with every field sanitized (whitespace, zero-width
    /// characters, and surrounding quotes stripped).
    ///
    /// Credentials pasted from vendor consoles routinely carry invisible
    /// characters that break HMAC signing.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        use crate::utils::sanitize::clean_credential_field as clean;
        match self {
            #[cfg(feature = "coupang")]
            Self::Coupang {
                vendor_id,
                access_key,
                secret_key,
            } => Self::Coupang {
                vendor_id: clean(vendor_id),
                access_key: clean(access_key),
                secret_key: clean(secret_key),
            },
            #[cfg(feature = "naver")]
            Self::Naver {
                client_id,
                client_secret,
            } => Self::Naver {
                client_id: clean(client_id),
                client_secret: clean(client_secret),
            },
            Self::ElevenSt { api_key } => Self::ElevenSt {
                api_key: clean(api_key),
            },
            Self::Gmarket { username, password } => Self::Gmarket {
                username: clean(username),
                password: clean(password),
            },
            Self::Auction { username, password } => Self::Auction {
                username: clean(username),
                password: clean(password),
            },
        }
    }

    /// Validate that every field is non-empty after sanitization.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialValidationError::EmptyField`] naming the first
    /// offending field.
    pub fn validate(&self) -> Result<(), CredentialValidationError> {
        let market = self.market_type();
        for (key, value) in self.to_map() {
            if crate::utils::sanitize::clean_credential_field(&value).is_empty() {
                return Err(CredentialValidationError::EmptyField {
                    market,
                    field: key.clone(),
                    label: key,
                });
            }
        }
        Ok(())
    }

    /// Returns the [`MarketType`] corresponding to this credential variant.
    pub fn market_type(&self) -> MarketType {
        match self {
            #[cfg(feature = "coupang")]
            Self::Coupang { .. } => MarketType::Coupang,
            #[cfg(feature = "naver")]
            Self::Naver { .. } => MarketType::Naver,
            Self::ElevenSt { .. } => MarketType::ElevenSt,
            Self::Gmarket { .. } => MarketType::Gmarket,
            Self::Auction { .. } => MarketType::Auction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // ============ MarketCredentials Round Trip Test ============

    #[test]
    fn credentials_coupang_roundtrip() {
        let map: HashMap<String, String> = [
            ("vendorId".to_string(), "A00123456".to_string()),
            ("accessKey".to_string(), "ak".to_string()),
            ("secretKey".to_string(), "sk".to_string()),
        ]
        .into();
        let res = MarketCredentials::from_map(MarketType::Coupang, &map);
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(cred) = res else {
            return;
        };
        let back = cred.to_map();
        assert_eq!(back.get("vendorId").map(String::as_str), Some("A00123456"));
        assert_eq!(back.get("accessKey").map(String::as_str), Some("ak"));
        assert_eq!(back.get("secretKey").map(String::as_str), Some("sk"));
        assert_eq!(cred.market_type(), MarketType::Coupang);
    }

    #[test]
    fn credentials_naver_roundtrip() {
        let map: HashMap<String, String> = [
            ("clientId".to_string(), "cid".to_string()),
            ("clientSecret".to_string(), "csecret".to_string()),
        ]
        .into();
        let res = MarketCredentials::from_map(MarketType::Naver, &map);
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(cred) = res else {
            return;
        };
        let back = cred.to_map();
        assert_eq!(back.get("clientId").map(String::as_str), Some("cid"));
        assert_eq!(back.get("clientSecret").map(String::as_str), Some("csecret"));
        assert_eq!(cred.market_type(), MarketType::Naver);
    }

    #[test]
    fn credentials_missing_field() {
        let map: HashMap<String, String> = HashMap::new();
        let res = MarketCredentials::from_map(MarketType::Naver, &map);
        assert!(
            matches!(&res, Err(CredentialValidationError::MissingField { .. })),
            "unexpected result: {res:?}"
        );
    }

    #[test]
    fn credentials_empty_field() {
        let map: HashMap<String, String> = [
            ("clientId".to_string(), "cid".to_string()),
            ("clientSecret".to_string(), "  ".to_string()),
        ]
        .into();
        let res = MarketCredentials::from_map(MarketType::Naver, &map);
        assert!(
            matches!(&res, Err(CredentialValidationError::EmptyField { .. })),
            "unexpected result: {res:?}"
        );
    }

    #[test]
    fn credentials_from_map_sanitizes_fields() {
        let map: HashMap<String, String> = [
            ("vendorId".to_string(), " A00123456 ".to_string()),
            ("accessKey".to_string(), "\u{200B}ak\u{200B}".to_string()),
            ("secretKey".to_string(), "\"sk\"".to_string()),
        ]
        .into();
        let res = MarketCredentials::from_map(MarketType::Coupang, &map);
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(cred) = res else {
            return;
        };
        let back = cred.to_map();
        assert_eq!(back.get("vendorId").map(String::as_str), Some("A00123456"));
        assert_eq!(back.get("accessKey").map(String::as_str), Some("ak"));
        assert_eq!(back.get("secretKey").map(String::as_str), Some("sk"));
    }

    #[test]
    fn credentials_sanitized_strips_invisibles() {
        let cred = MarketCredentials::Naver {
            client_id: " cid\u{FEFF}".to_string(),
            client_secret: "'csecret'".to_string(),
        };
        let clean = cred.sanitized();
        let MarketCredentials::Naver {
            client_id,
            client_secret,
        } = clean
        else {
            panic!("variant changed during sanitization");
        };
        assert_eq!(client_id, "cid");
        assert_eq!(client_secret, "csecret");
    }

    #[test]
    fn credentials_validate_rejects_blank() {
        let cred = MarketCredentials::Coupang {
            vendor_id: "A00123456".to_string(),
            access_key: "ak".to_string(),
            secret_key: "   ".to_string(),
        };
        let res = cred.validate();
        assert!(
            matches!(&res, Err(CredentialValidationError::EmptyField { .. })),
            "unexpected result: {res:?}"
        );
    }

    #[test]
    fn credentials_serde_tagged_by_market() {
        let cred = MarketCredentials::Coupang {
            vendor_id: "A00123456".to_string(),
            access_key: "ak".to_string(),
            secret_key: "sk".to_string(),
        };
        let json_res = serde_json::to_string(&cred);
        assert!(json_res.is_ok(), "serialize failed: {json_res:?}");
        let Ok(json) = json_res else {
            return;
        };
        assert!(json.contains("\"market\":\"COUPANG\""));
        assert!(json.contains("\"credentials\""));

        let back_res: serde_json::Result<MarketCredentials> = serde_json::from_str(&json);
        assert!(back_res.is_ok(), "deserialize failed: {back_res:?}");
        let Ok(back) = back_res else {
            return;
        };
        assert_eq!(back.market_type(), MarketType::Coupang);
    }

    // ============ MarketType test ============

    #[test]
    fn market_type_display_tokens() {
        assert_eq!(MarketType::Coupang.to_string(), "COUPANG");
        assert_eq!(MarketType::Naver.to_string(), "NAVER");
        assert_eq!(MarketType::ElevenSt.to_string(), "11ST");
        assert_eq!(MarketType::Gmarket.to_string(), "GMARKET");
        assert_eq!(MarketType::Auction.to_string(), "AUCTION");
    }

    #[test]
    fn market_type_serde_matches_display() {
        for m in [
            MarketType::Coupang,
            MarketType::Naver,
            MarketType::ElevenSt,
            MarketType::Gmarket,
            MarketType::Auction,
        ] {
            let json_res = serde_json::to_string(&m);
            assert!(json_res.is_ok(), "serialize failed: {json_res:?}");
            let Ok(json) = json_res else {
                return;
            };
            assert_eq!(json, format!("\"{m}\""));
        }
    }

    #[test]
    fn market_type_support_flags() {
        assert!(MarketType::Coupang.is_supported());
        assert!(MarketType::Naver.is_supported());
        assert!(!MarketType::ElevenSt.is_supported());
        assert!(!MarketType::Gmarket.is_supported());
        assert!(!MarketType::Auction.is_supported());
    }

    // ============ Order identity test ============

    #[test]
    fn order_id_composition() {
        assert_eq!(
            Order::compose_id(MarketType::Coupang, "8000012345"),
            "COUPANG-8000012345"
        );
        assert_eq!(
            Order::compose_id(MarketType::ElevenSt, "77"),
            "11ST-77"
        );
    }

    #[test]
    fn order_key_equality() {
        let order = sample_order("8000012345", OrderStatus::New);
        let same = sample_order("8000012345", OrderStatus::Shipping);
        let other = sample_order("8000099999", OrderStatus::New);
        assert_eq!(order.key(), same.key());
        assert_ne!(order.key(), other.key());
    }

    #[test]
    fn order_status_serde_uppercase() {
        let json_res = serde_json::to_string(&OrderStatus::Shipping);
        assert!(json_res.is_ok(), "serialize failed: {json_res:?}");
        let Ok(json) = json_res else {
            return;
        };
        assert_eq!(json, "\"SHIPPING\"");
    }

    #[test]
    fn order_roundtrips_without_ordered_at() {
        // No orderedAt key is emitted for None; deserialization must still
        // accept the document.
        let order = sample_order("8000012345", OrderStatus::New);
        let json_res = serde_json::to_string(&order);
        assert!(json_res.is_ok(), "serialize failed: {json_res:?}");
        let Ok(json) = json_res else {
            return;
        };
        assert!(!json.contains("orderedAt"));

        let back_res: serde_json::Result<Order> = serde_json::from_str(&json);
        assert!(back_res.is_ok(), "round-trip failed: {back_res:?}");
        let Ok(back) = back_res else {
            return;
        };
        assert!(back.ordered_at.is_none());
        assert_eq!(back.key(), order.key());
    }

    #[test]
    fn fetch_params_default_is_open_window_of_new() {
        let p = FetchParams::default();
        assert_eq!(p.status, OrderStatus::New);
        assert!(p.since.is_none());
        assert!(p.until.is_none());
    }

    fn sample_order(no: &str, status: OrderStatus) -> Order {
        Order {
            id: Order::compose_id(MarketType::Coupang, no),
            market: MarketType::Coupang,
            vendor_order_no: no.to_string(),
            status,
            orderer_name: "Kim".to_string(),
            receiver_name: "Kim".to_string(),
            receiver_phone: None,
            receiver_address: None,
            items: vec![],
            total_price: 0,
            carrier: None,
            invoice_no: None,
            ordered_at: None,
            fetched_at: chrono::Utc::now(),
        }
    }
}
