#![allow(dead_code, clippy::unwrap_used)]
// In-memory stand-in for the catalog server.
//
// Keeps a flat server-side model and materializes nested payloads the
// way the real server does. Records every call, can fail chosen
// operations, and can delay responses to reorder them.

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use coinly_core::{
    Catalog, Coin, Collection, CoreError, CreateCoinRequest, CreateCollectionRequest,
    CreateGroupRequest, EntityGateway, EntityId, Group, UpdateCoinRequest,
    UpdateCollectionRequest, UpdateGroupRequest,
};

#[derive(Default)]
struct ServerState {
    groups: BTreeMap<String, String>,
    collections: BTreeMap<String, (String, String)>,
    coins: BTreeMap<String, Coin>,
    next_id: u32,
}

#[derive(Default)]
pub struct MockGateway {
    state: Mutex<ServerState>,
    calls: Mutex<Vec<String>>,
    failing: Mutex<HashSet<&'static str>>,
    delays: Mutex<HashMap<&'static str, VecDeque<Duration>>>,
}

impl MockGateway {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Catalog wired to this gateway.
    pub fn catalog(self: &Arc<Self>) -> Catalog {
        Catalog::new(Arc::clone(self) as Arc<dyn EntityGateway>)
    }

    // ── Seeding ──────────────────────────────────────────────────────

    pub fn seed_group(&self, id: &str, name: &str) {
        self.state
            .lock()
            .unwrap()
            .groups
            .insert(id.to_owned(), name.to_owned());
    }

    pub fn seed_collection(&self, id: &str, name: &str, group: &str) {
        self.state
            .lock()
            .unwrap()
            .collections
            .insert(id.to_owned(), (name.to_owned(), group.to_owned()));
    }

    pub fn seed_coin(&self, id: &str, collection: &str, year: i32) {
        self.state
            .lock()
            .unwrap()
            .coins
            .insert(id.to_owned(), coin(id, collection, year));
    }

    /// g1 "Germany" ⊃ c1 "2 Euro" ⊃ k1 (2006).
    pub fn seed_basic_tree(&self) {
        self.seed_group("g1", "Germany");
        self.seed_collection("c1", "2 Euro", "g1");
        self.seed_coin("k1", "c1", 2006);
    }

    // ── Behavior control ─────────────────────────────────────────────

    /// Make every later call to `op` fail.
    pub fn fail(&self, op: &'static str) {
        self.failing.lock().unwrap().insert(op);
    }

    pub fn recover(&self, op: &'static str) {
        self.failing.lock().unwrap().remove(op);
    }

    /// Queue a response delay for the next call to `op`.
    pub fn delay_next(&self, op: &'static str, delay: Duration) {
        self.delays
            .lock()
            .unwrap()
            .entry(op)
            .or_default()
            .push_back(delay);
    }

    // ── Inspection ───────────────────────────────────────────────────

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, op: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c.split(' ').next() == Some(op))
            .collect()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn server_coin(&self, id: &str) -> Option<Coin> {
        self.state.lock().unwrap().coins.get(id).cloned()
    }

    // ── Internals ────────────────────────────────────────────────────

    fn enter(&self, op: &'static str, target: &str) -> Result<Option<Duration>, CoreError> {
        self.calls.lock().unwrap().push(format!("{op} {target}"));
        if self.failing.lock().unwrap().contains(op) {
            return Err(CoreError::Network {
                message: "connection refused".into(),
            });
        }
        Ok(self
            .delays
            .lock()
            .unwrap()
            .get_mut(op)
            .and_then(VecDeque::pop_front))
    }

    async fn pause(delay: Option<Duration>) {
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn not_found(kind: &str, id: &EntityId) -> CoreError {
        CoreError::NotFound {
            entity_type: kind.into(),
            identifier: id.to_string(),
        }
    }

    fn next_id(state: &mut ServerState, prefix: &str) -> String {
        state.next_id += 1;
        format!("{prefix}-new-{}", state.next_id)
    }

    fn nested_collection(state: &ServerState, id: &str) -> Option<Collection> {
        let (name, group) = state.collections.get(id)?;
        Some(Collection {
            id: EntityId::from(id),
            name: name.clone(),
            group_id: Some(EntityId::from(group.as_str())),
            coins: Some(
                state
                    .coins
                    .values()
                    .filter(|c| c.collection_id == Some(EntityId::from(id)))
                    .cloned()
                    .collect(),
            ),
        })
    }

    fn nested_group(state: &ServerState, id: &str) -> Option<Group> {
        let name = state.groups.get(id)?;
        Some(Group {
            id: EntityId::from(id),
            name: name.clone(),
            collections: Some(
                state
                    .collections
                    .iter()
                    .filter(|(_, (_, group))| group == id)
                    .filter_map(|(cid, _)| Self::nested_collection(state, cid))
                    .collect(),
            ),
        })
    }
}

pub fn coin(id: &str, collection: &str, year: i32) -> Coin {
    Coin {
        id: EntityId::from(id),
        value: 200,
        country: "DE".into(),
        year,
        mint: Some("A".into()),
        description: format!("coin {id}"),
        collection_id: Some(EntityId::from(collection)),
    }
}

#[async_trait]
impl EntityGateway for MockGateway {
    async fn list_groups(&self) -> Result<Vec<Group>, CoreError> {
        let delay = self.enter("list_groups", "*")?;
        Self::pause(delay).await;
        let state = self.state.lock().unwrap();
        Ok(state
            .groups
            .keys()
            .filter_map(|id| Self::nested_group(&state, id))
            .collect())
    }

    async fn get_group(&self, id: &EntityId) -> Result<Group, CoreError> {
        let delay = self.enter("get_group", &id.to_string())?;
        Self::pause(delay).await;
        let state = self.state.lock().unwrap();
        Self::nested_group(&state, &id.to_string()).ok_or_else(|| Self::not_found("group", id))
    }

    async fn create_group(&self, req: &CreateGroupRequest) -> Result<Group, CoreError> {
        let delay = self.enter("create_group", &req.name)?;
        Self::pause(delay).await;
        let mut state = self.state.lock().unwrap();
        if state.groups.values().any(|n| n == &req.name) {
            return Err(CoreError::Validation {
                message: "Group already exists".into(),
            });
        }
        let id = Self::next_id(&mut state, "g");
        state.groups.insert(id.clone(), req.name.clone());
        for cid in &req.collections {
            if let Some(entry) = state.collections.get_mut(&cid.to_string()) {
                entry.1.clone_from(&id);
            }
        }
        Ok(Self::nested_group(&state, &id).unwrap())
    }

    async fn update_group(
        &self,
        id: &EntityId,
        req: &UpdateGroupRequest,
    ) -> Result<Group, CoreError> {
        let delay = self.enter("update_group", &id.to_string())?;
        Self::pause(delay).await;
        let mut state = self.state.lock().unwrap();
        let name = state
            .groups
            .get_mut(&id.to_string())
            .ok_or_else(|| Self::not_found("group", id))?;
        name.clone_from(&req.name);
        // Metadata only, like the real server.
        Ok(Group {
            id: id.clone(),
            name: req.name.clone(),
            collections: None,
        })
    }

    async fn delete_group(&self, id: &EntityId) -> Result<(), CoreError> {
        let delay = self.enter("delete_group", &id.to_string())?;
        Self::pause(delay).await;
        let mut state = self.state.lock().unwrap();
        let key = id.to_string();
        state
            .groups
            .remove(&key)
            .ok_or_else(|| Self::not_found("group", id))?;
        let orphaned: Vec<String> = state
            .collections
            .iter()
            .filter(|(_, (_, g))| g == &key)
            .map(|(cid, _)| cid.clone())
            .collect();
        for cid in &orphaned {
            state.collections.remove(cid);
        }
        state.coins.retain(|_, c| {
            c.collection_id
                .as_ref()
                .is_none_or(|cid| !orphaned.contains(&cid.to_string()))
        });
        Ok(())
    }

    async fn get_collection(&self, id: &EntityId) -> Result<Collection, CoreError> {
        let delay = self.enter("get_collection", &id.to_string())?;
        Self::pause(delay).await;
        let state = self.state.lock().unwrap();
        Self::nested_collection(&state, &id.to_string())
            .ok_or_else(|| Self::not_found("collection", id))
    }

    async fn create_collection(
        &self,
        req: &CreateCollectionRequest,
    ) -> Result<Collection, CoreError> {
        let delay = self.enter("create_collection", &req.name)?;
        Self::pause(delay).await;
        let mut state = self.state.lock().unwrap();
        let id = Self::next_id(&mut state, "c");
        state
            .collections
            .insert(id.clone(), (req.name.clone(), req.group_id.to_string()));
        Ok(Self::nested_collection(&state, &id).unwrap())
    }

    async fn update_collection(
        &self,
        id: &EntityId,
        req: &UpdateCollectionRequest,
    ) -> Result<Collection, CoreError> {
        let delay = self.enter("update_collection", &id.to_string())?;
        let key = id.to_string();
        let result = {
            let mut state = self.state.lock().unwrap();
            let entry = state
                .collections
                .get_mut(&key)
                .ok_or_else(|| Self::not_found("collection", id))?;
            if let Some(name) = &req.name {
                entry.0.clone_from(name);
            }
            if let Some(group) = &req.group_id {
                entry.1 = group.to_string();
            }
            Self::nested_collection(&state, &key).unwrap()
        };
        Self::pause(delay).await;
        Ok(result)
    }

    async fn delete_collection(&self, id: &EntityId) -> Result<(), CoreError> {
        let delay = self.enter("delete_collection", &id.to_string())?;
        Self::pause(delay).await;
        let mut state = self.state.lock().unwrap();
        let key = id.to_string();
        state
            .collections
            .remove(&key)
            .ok_or_else(|| Self::not_found("collection", id))?;
        state
            .coins
            .retain(|_, c| c.collection_id != Some(EntityId::from(key.as_str())));
        Ok(())
    }

    async fn get_coin(&self, id: &EntityId) -> Result<Coin, CoreError> {
        let delay = self.enter("get_coin", &id.to_string())?;
        Self::pause(delay).await;
        self.server_coin(&id.to_string())
            .ok_or_else(|| Self::not_found("coin", id))
    }

    async fn create_coin(&self, req: &CreateCoinRequest) -> Result<Coin, CoreError> {
        let delay = self.enter("create_coin", &req.collection_id.to_string())?;
        Self::pause(delay).await;
        let mut state = self.state.lock().unwrap();
        let id = Self::next_id(&mut state, "k");
        let created = Coin {
            id: EntityId::from(id.as_str()),
            value: req.value,
            country: req.country.clone(),
            year: req.year,
            mint: req.mint.clone(),
            description: req.description.clone().unwrap_or_default(),
            collection_id: Some(req.collection_id.clone()),
        };
        state.coins.insert(id, created.clone());
        Ok(created)
    }

    /// Applies the change immediately and delays only the response, so
    /// reordered responses can disagree with the server's final state.
    async fn update_coin(
        &self,
        id: &EntityId,
        req: &UpdateCoinRequest,
    ) -> Result<Coin, CoreError> {
        let delay = self.enter("update_coin", &id.to_string())?;
        let updated = {
            let mut state = self.state.lock().unwrap();
            let coin = state
                .coins
                .get_mut(&id.to_string())
                .ok_or_else(|| Self::not_found("coin", id))?;
            if let Some(year) = req.year {
                coin.year = year;
            }
            if let Some(value) = req.value {
                coin.value = value;
            }
            if let Some(country) = &req.country {
                coin.country.clone_from(country);
            }
            if let Some(collection) = &req.collection_id {
                coin.collection_id = Some(collection.clone());
            }
            if let Some(mint) = &req.mint {
                coin.mint = Some(mint.clone());
            }
            if let Some(description) = &req.description {
                coin.description.clone_from(description);
            }
            coin.clone()
        };
        Self::pause(delay).await;
        Ok(updated)
    }

    async fn delete_coin(&self, id: &EntityId) -> Result<(), CoreError> {
        let delay = self.enter("delete_coin", &id.to_string())?;
        Self::pause(delay).await;
        self.state
            .lock()
            .unwrap()
            .coins
            .remove(&id.to_string())
            .map(|_| ())
            .ok_or_else(|| Self::not_found("coin", id))
    }
}
