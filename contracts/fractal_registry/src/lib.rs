#![no_std]
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, Address, BytesN, Env, String, Vec
};

mod error;
mod events;
mod storage;
mod types;


pub use crate::error::Error;
pub use crate::types::Node;

contractmeta!(
    key = "Description",
    val = "Fractal registry: content-hash nodes linked into a forest"
);

/// The all-zero ed25519 account. Never a valid owner.
pub const NULL_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

#[contract]
pub struct FractalRegistry;

#[contractimpl]
impl FractalRegistry {
    /// Records the deploying identity as registry owner.
    pub fn __constructor(e: Env, owner: Address) {
        storage::set_owner(&e, &owner);
    }

    /// Start a new tree. Returns the new node id.
    pub fn create_root_node(
        e: Env,
        creator: Address,
        data_hash: BytesN<32>,
        label: String,
    ) -> Result<u64, Error> {
        creator.require_auth();
        check_hash(&data_hash)?;

        let id = insert_node(&e, creator, None, data_hash, label);
        log!(&e, "root node created", id);
        Ok(id)
    }

    /// Attach a node under an existing, active parent.
    pub fn create_child_node(
        e: Env,
        creator: Address,
        parent_id: u64,
        data_hash: BytesN<32>,
        label: String,
    ) -> Result<u64, Error> {
        creator.require_auth();
        check_hash(&data_hash)?;

        let parent = storage::get_node(&e, parent_id).ok_or(Error::NodeNotFound)?;
        if !parent.is_active {
            return Err(Error::ParentInactive);
        }

        let id = insert_node(&e, creator, Some(parent_id), data_hash, label);
        storage::push_child(&e, parent_id, id);
        log!(&e, "child node created", id, parent_id);
        Ok(id)
    }

    /// One-way switch to inactive. Only the node's creator may call.
    pub fn deactivate_node(e: Env, caller: Address, node_id: u64) -> Result<(), Error> {
        caller.require_auth();

        let mut node = storage::get_node(&e, node_id).ok_or(Error::NodeNotFound)?;
        if node.creator != caller {
            return Err(Error::NotCreator);
        }
        if !node.is_active {
            return Err(Error::AlreadyInactive);
        }

        node.is_active = false;
        storage::put_node(&e, &node);

        events::node_deactivated(&e, node_id, &caller, e.ledger().timestamp());
        log!(&e, "node deactivated", node_id);
        Ok(())
    }

    pub fn get_node(e: Env, node_id: u64) -> Result<Node, Error> {
        storage::get_node(&e, node_id).ok_or(Error::NodeNotFound)
    }

    /// Direct children in creation order. Empty for a leaf; an error for
    /// an id that was never created.
    pub fn get_children(e: Env, node_id: u64) -> Result<Vec<u64>, Error> {
        if storage::get_node(&e, node_id).is_none() {
            return Err(Error::NodeNotFound);
        }
        Ok(storage::get_children(&e, node_id))
    }

    /// Ids created by `creator`, oldest first. Unknown creators get an empty list.
    pub fn get_created_by(e: Env, creator: Address) -> Vec<u64> {
        storage::get_created_by(&e, &creator)
    }

    /// Total nodes ever created, roots and children alike.
    pub fn get_stats(e: Env) -> u64 {
        storage::node_count(&e)
    }

    pub fn owner(e: Env) -> Address {
        storage::get_owner(&e)
    }

    pub fn transfer_ownership(e: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        caller.require_auth();

        let previous = storage::get_owner(&e);
        if caller != previous {
            return Err(Error::NotOwner);
        }
        if is_null_identity(&e, &new_owner) {
            return Err(Error::InvalidAddress);
        }

        storage::set_owner(&e, &new_owner);
        events::ownership_transferred(&e, &previous, &new_owner);
        log!(&e, "ownership transferred", previous, new_owner);
        Ok(())
    }
}

fn check_hash(data_hash: &BytesN<32>) -> Result<(), Error> {
    if data_hash.to_array() == [0u8; 32] {
        return Err(Error::InvalidHash);
    }
    Ok(())
}

// The zero account and the registry itself would both leave ownership
// unrecoverable.
fn is_null_identity(e: &Env, addr: &Address) -> bool {
    *addr == e.current_contract_address()
        || *addr == Address::from_string(&String::from_str(e, NULL_ACCOUNT))
}

fn insert_node(
    e: &Env,
    creator: Address,
    parent_id: Option<u64>,
    data_hash: BytesN<32>,
    label: String,
) -> u64 {
    let id = storage::next_id(e);
    let node = Node {
        id,
        creator: creator.clone(),
        data_hash,
        created_at: e.ledger().timestamp(),
        parent_id,
        is_root: parent_id.is_none(),
        is_active: true,
        label,
    };
    storage::put_node(e, &node);
    storage::push_created_by(e, &creator, id);

    events::node_created(e, &node);
    id
}
