// ============================================================================
// ORDER QUERIES - caché etiquetado con notificación a subscribers
// ============================================================================
// Query results are cached under a key and tagged; mutations invalidate tags,
// which evicts tagged entries and notifies their subscribers so they refetch.
// The cache knows nothing about HTTP beyond the ApiClient it delegates to.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::models::Order;
use crate::services::api_client::ApiClient;

/// Query key for the pending-orders collection.
pub const PENDING_ORDERS_KEY: &str = "order/pending";

/// Invalidation label. A list result carries `List` plus one `Id` per row,
/// so it can be invalidated either wholesale or per order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OrderTag {
    List,
    Id(u64),
}

/// Handle for dropping a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(usize);

struct CacheEntry {
    orders: Vec<Order>,
    tags: Vec<OrderTag>,
}

struct Subscriber {
    id: usize,
    key: &'static str,
    listener: Rc<dyn Fn()>,
}

struct QueryClientInner {
    api: ApiClient,
    cache: RefCell<HashMap<&'static str, CacheEntry>>,
    subscribers: RefCell<Vec<Subscriber>>,
    next_subscriber: Cell<usize>,
}

/// Shared, cheaply-clonable query client. One instance lives in the app
/// context; every consumer sees the same cache and subscriber registry.
#[derive(Clone)]
pub struct QueryClient {
    inner: Rc<QueryClientInner>,
}

impl PartialEq for QueryClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl QueryClient {
    pub fn new(api: ApiClient) -> Self {
        Self {
            inner: Rc::new(QueryClientInner {
                api,
                cache: RefCell::new(HashMap::new()),
                subscribers: RefCell::new(Vec::new()),
                next_subscriber: Cell::new(0),
            }),
        }
    }

    /// Pending orders, served from cache when the entry is still live.
    /// A fresh result is tagged `List` plus one `Id` per returned order.
    pub async fn pending_orders(&self) -> Result<Vec<Order>, String> {
        if let Some(entry) = self.inner.cache.borrow().get(PENDING_ORDERS_KEY) {
            log::info!("📦 Órdenes pendientes servidas desde caché");
            return Ok(entry.orders.clone());
        }

        let orders = self.inner.api.get_pending_orders().await?;
        log::info!("📦 Órdenes pendientes obtenidas: {}", orders.len());
        self.store(PENDING_ORDERS_KEY, orders.clone());
        Ok(orders)
    }

    /// PUT approve; a success invalidates the order's tag, an error
    /// invalidates nothing.
    pub async fn approve_order(&self, id: u64) -> Result<(), String> {
        self.inner.api.approve_order(id).await?;
        self.invalidate(&OrderTag::Id(id));
        Ok(())
    }

    /// PUT decline; identical invalidation policy.
    pub async fn decline_order(&self, id: u64) -> Result<(), String> {
        self.inner.api.decline_order(id).await?;
        self.invalidate(&OrderTag::Id(id));
        Ok(())
    }

    /// Evict every cached entry carrying `tag` and notify the subscribers of
    /// the evicted keys. Consumers react by refetching; the cache never
    /// patches lists in place.
    pub fn invalidate(&self, tag: &OrderTag) {
        let evicted: Vec<&'static str> = {
            let mut cache = self.inner.cache.borrow_mut();
            let keys: Vec<&'static str> = cache
                .iter()
                .filter(|(_, entry)| entry.tags.contains(tag))
                .map(|(key, _)| *key)
                .collect();
            for key in &keys {
                cache.remove(key);
            }
            keys
        };

        if evicted.is_empty() {
            return;
        }
        log::info!("🔄 Tag invalidado {:?} → {} query(s) evicted", tag, evicted.len());

        // Collect first: a listener may subscribe/unsubscribe re-entrantly.
        let listeners: Vec<Rc<dyn Fn()>> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .filter(|s| evicted.contains(&s.key))
            .map(|s| s.listener.clone())
            .collect();
        for listener in listeners {
            listener();
        }
    }

    /// Register interest in a query key. The listener fires after any
    /// invalidation evicts that key.
    pub fn subscribe(&self, key: &'static str, listener: impl Fn() + 'static) -> Subscription {
        let id = self.inner.next_subscriber.get();
        self.inner.next_subscriber.set(id + 1);
        self.inner.subscribers.borrow_mut().push(Subscriber {
            id,
            key,
            listener: Rc::new(listener),
        });
        Subscription(id)
    }

    pub fn unsubscribe(&self, subscription: Subscription) {
        self.inner
            .subscribers
            .borrow_mut()
            .retain(|s| s.id != subscription.0);
    }

    fn store(&self, key: &'static str, orders: Vec<Order>) {
        let mut tags = vec![OrderTag::List];
        tags.extend(orders.iter().map(|order| OrderTag::Id(order.id)));
        self.inner
            .cache
            .borrow_mut()
            .insert(key, CacheEntry { orders, tags });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn order(id: u64) -> Order {
        serde_json::from_str(&format!(r#"{{"id":{}}}"#, id)).unwrap()
    }

    fn seeded_client(ids: &[u64]) -> QueryClient {
        let client = QueryClient::new(ApiClient::new());
        client.store(PENDING_ORDERS_KEY, ids.iter().copied().map(order).collect());
        client
    }

    #[test]
    fn stored_list_is_tagged_by_collection_and_ids() {
        let client = seeded_client(&[1, 2]);
        let cache = client.inner.cache.borrow();
        let entry = cache.get(PENDING_ORDERS_KEY).unwrap();
        assert!(entry.tags.contains(&OrderTag::List));
        assert!(entry.tags.contains(&OrderTag::Id(1)));
        assert!(entry.tags.contains(&OrderTag::Id(2)));
    }

    #[test]
    fn invalidating_an_id_evicts_and_notifies() {
        let client = seeded_client(&[1, 2]);
        let fired = Rc::new(Cell::new(0));
        let fired_clone = fired.clone();
        client.subscribe(PENDING_ORDERS_KEY, move || {
            fired_clone.set(fired_clone.get() + 1);
        });

        client.invalidate(&OrderTag::Id(2));

        assert_eq!(fired.get(), 1);
        assert!(client.inner.cache.borrow().get(PENDING_ORDERS_KEY).is_none());
    }

    #[test]
    fn invalidating_the_collection_tag_evicts_the_list() {
        let client = seeded_client(&[1]);
        client.invalidate(&OrderTag::List);
        assert!(client.inner.cache.borrow().get(PENDING_ORDERS_KEY).is_none());
    }

    #[test]
    fn unknown_tag_notifies_nobody() {
        let client = seeded_client(&[1, 2]);
        let fired = Rc::new(Cell::new(0));
        let fired_clone = fired.clone();
        client.subscribe(PENDING_ORDERS_KEY, move || {
            fired_clone.set(fired_clone.get() + 1);
        });

        client.invalidate(&OrderTag::Id(99));

        assert_eq!(fired.get(), 0);
        assert!(client.inner.cache.borrow().get(PENDING_ORDERS_KEY).is_some());
    }

    #[test]
    fn unsubscribed_listener_stops_firing() {
        let client = seeded_client(&[1]);
        let fired = Rc::new(Cell::new(0));
        let fired_clone = fired.clone();
        let subscription = client.subscribe(PENDING_ORDERS_KEY, move || {
            fired_clone.set(fired_clone.get() + 1);
        });
        client.unsubscribe(subscription);

        client.invalidate(&OrderTag::Id(1));

        assert_eq!(fired.get(), 0);
    }
}
