use soroban_sdk::{Address, Env, Vec};
use crate::types::{DataKey, Node};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;

pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const ENTRY_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const ENTRY_LIFETIME_THRESHOLD: u32 = ENTRY_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_entry(e: &Env, key: &DataKey) {
    e.storage()
        .persistent()
        .extend_ttl(key, ENTRY_LIFETIME_THRESHOLD, ENTRY_BUMP_AMOUNT);
}

// Owner

pub fn get_owner(e: &Env) -> Address {
    e.storage().instance().get(&DataKey::Owner).expect("owner not set")
}

pub fn set_owner(e: &Env, owner: &Address) {
    e.storage().instance().set(&DataKey::Owner, owner);
    bump_instance(e);
}

// Identifiers

/// Hands out the next node id. Ids start at 0 and the stored counter
/// doubles as the total node count.
pub fn next_id(e: &Env) -> u64 {
    let n = node_count(e);
    e.storage().instance().set(&DataKey::NextId, &(n + 1));
    bump_instance(e);
    n
}

pub fn node_count(e: &Env) -> u64 {
    e.storage().instance().get(&DataKey::NextId).unwrap_or(0)
}

// Nodes

pub fn get_node(e: &Env, id: u64) -> Option<Node> {
    let key = DataKey::Node(id);
    let node: Option<Node> = e.storage().persistent().get(&key);
    if node.is_some() {
        bump_entry(e, &key);
    }
    node
}

pub fn put_node(e: &Env, node: &Node) {
    let key = DataKey::Node(node.id);
    e.storage().persistent().set(&key, node);
    bump_entry(e, &key);
}

// Indexes

fn get_index(e: &Env, key: &DataKey) -> Vec<u64> {
    match e.storage().persistent().get::<DataKey, Vec<u64>>(key) {
        Some(ids) => {
            bump_entry(e, key);
            ids
        }
        None => Vec::new(e),
    }
}

fn append_index(e: &Env, key: &DataKey, id: u64) {
    let mut ids = get_index(e, key);
    ids.push_back(id);
    e.storage().persistent().set(key, &ids);
    bump_entry(e, key);
}

pub fn get_children(e: &Env, parent_id: u64) -> Vec<u64> {
    get_index(e, &DataKey::Children(parent_id))
}

pub fn push_child(e: &Env, parent_id: u64, child_id: u64) {
    append_index(e, &DataKey::Children(parent_id), child_id);
}

pub fn get_created_by(e: &Env, creator: &Address) -> Vec<u64> {
    get_index(e, &DataKey::CreatedBy(creator.clone()))
}

pub fn push_created_by(e: &Env, creator: &Address, id: u64) {
    append_index(e, &DataKey::CreatedBy(creator.clone()), id);
}
