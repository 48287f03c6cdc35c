use serde::Serialize;

/// State held by the profile store. No fields are defined yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileState {}

/// Named container for profile state, getters and actions.
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    state: ProfileState,
}

/// Serializable view of a store, used to hydrate the client copy.
#[derive(Debug, Clone, Serialize)]
pub struct StoreSnapshot<S: Serialize> {
    pub id: &'static str,
    pub state: S,
    pub getters: &'static [&'static str],
    pub actions: &'static [&'static str],
}

impl ProfileStore {
    pub const ID: &'static str = "profiles";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> &'static str {
        Self::ID
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    /// Names of the fields in [`ProfileState`].
    pub fn state_fields(&self) -> Vec<String> {
        match serde_json::to_value(&self.state) {
            Ok(serde_json::Value::Object(map)) => map.keys().cloned().collect(),
            _ => Vec::new(),
        }
    }

    pub fn getters(&self) -> &'static [&'static str] {
        &[]
    }

    pub fn actions(&self) -> &'static [&'static str] {
        &[]
    }

    pub fn snapshot(&self) -> StoreSnapshot<ProfileState> {
        StoreSnapshot {
            id: self.id(),
            state: self.state.clone(),
            getters: self.getters(),
            actions: self.actions(),
        }
    }
}
