//! Test helpers: mock storage, a scripted adapter, and context factories.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use perfectorder_market::{
    EgressConfig, FetchParams, MarketAdapter, MarketCredentials, MarketError, MarketFeatures,
    MarketLimits, MarketMetadata, MarketType, Order, OrderItem, OrderKey, OrderStatus,
    Result as MarketResult,
};

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::traits::{CredentialStore, InMemoryMarketRegistry, OrderRepository};
use crate::types::Credential;

// ===== MockCredentialStore =====

pub struct MockCredentialStore {
    credentials: RwLock<HashMap<String, Credential>>,
    /// If Some, `save` returns this error (exercises cleanup paths).
    save_error: RwLock<Option<String>>,
}

impl MockCredentialStore {
    pub fn new() -> Self {
        Self {
            credentials: RwLock::new(HashMap::new()),
            save_error: RwLock::new(None),
        }
    }

    pub async fn set_save_error(&self, err: Option<String>) {
        *self.save_error.write().await = err;
    }
}

#[async_trait]
impl CredentialStore for MockCredentialStore {
    async fn list_for_user(&self, user_id: &str) -> CoreResult<Vec<Credential>> {
        Ok(self
            .credentials
            .read()
            .await
            .values()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, credential_id: &str) -> CoreResult<Option<Credential>> {
        Ok(self.credentials.read().await.get(credential_id).cloned())
    }

    async fn save(&self, credential: &Credential) -> CoreResult<()> {
        if let Some(ref msg) = *self.save_error.read().await {
            return Err(CoreError::StorageError(msg.clone()));
        }
        self.credentials
            .write()
            .await
            .insert(credential.id.clone(), credential.clone());
        Ok(())
    }

    async fn remove(&self, credential_id: &str) -> CoreResult<()> {
        self.credentials.write().await.remove(credential_id);
        Ok(())
    }
}

// ===== MockOrderRepository =====

pub struct MockOrderRepository {
    /// user_id -> order_id -> Order
    orders: RwLock<HashMap<String, HashMap<String, Order>>>,
    /// If Some, `insert` returns this error (exercises the fatal path).
    insert_error: RwLock<Option<String>>,
}

impl MockOrderRepository {
    pub fn new() -> Self {
        Self {
            orders: RwLock::new(HashMap::new()),
            insert_error: RwLock::new(None),
        }
    }

    pub async fn set_insert_error(&self, err: Option<String>) {
        *self.insert_error.write().await = err;
    }
}

#[async_trait]
impl OrderRepository for MockOrderRepository {
    async fn existing_keys(&self, user_id: &str) -> CoreResult<HashSet<OrderKey>> {
        Ok(self
            .orders
            .read()
            .await
            .get(user_id)
            .map(|m| m.values().map(Order::key).collect())
            .unwrap_or_default())
    }

    async fn insert(&self, user_id: &str, order: &Order) -> CoreResult<()> {
        if let Some(ref msg) = *self.insert_error.read().await {
            return Err(CoreError::StorageError(msg.clone()));
        }
        self.orders
            .write()
            .await
            .entry(user_id.to_string())
            .or_default()
            .insert(order.id.clone(), order.clone());
        Ok(())
    }

    async fn find(&self, user_id: &str, order_id: &str) -> CoreResult<Option<Order>> {
        Ok(self
            .orders
            .read()
            .await
            .get(user_id)
            .and_then(|m| m.get(order_id))
            .cloned())
    }

    async fn update(&self, user_id: &str, order: &Order) -> CoreResult<()> {
        self.orders
            .write()
            .await
            .entry(user_id.to_string())
            .or_default()
            .insert(order.id.clone(), order.clone());
        Ok(())
    }

    async fn list(&self, user_id: &str) -> CoreResult<Vec<Order>> {
        Ok(self
            .orders
            .read()
            .await
            .get(user_id)
            .map(|m| m.values().cloned().collect())
            .unwrap_or_default())
    }
}

// ===== StubMarket =====

/// Scripted adapter: returns fixed orders or a fixed error.
pub struct StubMarket {
    orders: Vec<Order>,
    error: Option<MarketError>,
    valid: bool,
    fetch_calls: AtomicUsize,
}

impl StubMarket {
    pub fn with_orders(orders: Vec<Order>) -> Self {
        Self {
            orders,
            error: None,
            valid: true,
            fetch_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_error(error: MarketError) -> Self {
        Self {
            orders: Vec::new(),
            error: Some(error),
            valid: true,
            fetch_calls: AtomicUsize::new(0),
        }
    }

    /// `validate_credentials` answers `Ok(false)`.
    pub fn rejected() -> Self {
        Self {
            orders: Vec::new(),
            error: None,
            valid: false,
            fetch_calls: AtomicUsize::new(0),
        }
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MarketAdapter for StubMarket {
    fn id(&self) -> &'static str {
        "COUPANG"
    }

    fn metadata() -> MarketMetadata {
        MarketMetadata {
            id: MarketType::Coupang,
            name: "Stub".to_string(),
            description: "Scripted adapter for tests".to_string(),
            required_fields: vec![],
            features: MarketFeatures::default(),
            limits: MarketLimits {
                max_window_days: 31,
                max_detail_batch: None,
            },
        }
    }

    async fn validate_credentials(&self) -> MarketResult<bool> {
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(self.valid),
        }
    }

    async fn fetch_orders(&self, _params: &FetchParams) -> MarketResult<Vec<Order>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(self.orders.clone()),
        }
    }
}

// ===== Factories =====

/// Build a `ServiceContext` over fresh mocks with direct egress.
pub fn create_test_context() -> (
    Arc<ServiceContext>,
    Arc<MockCredentialStore>,
    Arc<MockOrderRepository>,
    Arc<InMemoryMarketRegistry>,
) {
    let credential_store = Arc::new(MockCredentialStore::new());
    let order_repository = Arc::new(MockOrderRepository::new());
    let market_registry = Arc::new(InMemoryMarketRegistry::new());

    let ctx = Arc::new(ServiceContext::new(
        credential_store.clone(),
        order_repository.clone(),
        market_registry.clone(),
        EgressConfig::direct(),
    ));

    (ctx, credential_store, order_repository, market_registry)
}

/// A stored Coupang credential with a fixed id.
pub fn test_credential(id: &str, user_id: &str, alias: &str) -> Credential {
    Credential {
        id: id.to_string(),
        user_id: user_id.to_string(),
        market: MarketType::Coupang,
        alias: alias.to_string(),
        credentials: MarketCredentials::Coupang {
            vendor_id: "A00123456".to_string(),
            access_key: format!("ak-{id}"),
            secret_key: format!("sk-{id}"),
        },
        active: true,
        created_at: Utc::now(),
    }
}

/// A canonical Coupang order in `New` status.
pub fn test_order(vendor_order_no: &str) -> Order {
    Order {
        id: Order::compose_id(MarketType::Coupang, vendor_order_no),
        market: MarketType::Coupang,
        vendor_order_no: vendor_order_no.to_string(),
        status: OrderStatus::New,
        orderer_name: "홍길동".to_string(),
        receiver_name: "홍길동".to_string(),
        receiver_phone: Some("010-1234-5678".to_string()),
        receiver_address: Some("서울특별시 강남구 테헤란로 1".to_string()),
        items: vec![OrderItem {
            product_name: "반팔 티셔츠".to_string(),
            product_id: "P100".to_string(),
            option: Some("L".to_string()),
            quantity: 1,
            unit_price: 15000,
        }],
        total_price: 15000,
        carrier: None,
        invoice_no: None,
        ordered_at: None,
        fetched_at: Utc::now(),
    }
}
