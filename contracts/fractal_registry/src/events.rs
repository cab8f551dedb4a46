use soroban_sdk::{symbol_short, Address, Env, Symbol};
use crate::types::Node;

pub(crate) const CREATED: Symbol = symbol_short!("created");
pub(crate) const DEACTIVATED: Symbol = symbol_short!("deactive");
pub(crate) const OWNER: Symbol = symbol_short!("owner");

/// ("created", id) -> (parent_id, creator, data_hash, label, is_root, created_at)
pub fn node_created(e: &Env, node: &Node) {
    e.events().publish(
        (CREATED, node.id),
        (
            node.parent_id,
            node.creator.clone(),
            node.data_hash.clone(),
            node.label.clone(),
            node.is_root,
            node.created_at,
        ),
    );
}

/// ("deactive", id) -> (caller, timestamp)
pub fn node_deactivated(e: &Env, id: u64, caller: &Address, timestamp: u64) {
    e.events().publish((DEACTIVATED, id), (caller.clone(), timestamp));
}

/// ("owner", previous) -> new
pub fn ownership_transferred(e: &Env, previous: &Address, new_owner: &Address) {
    e.events().publish((OWNER, previous.clone()), new_owner.clone());
}
