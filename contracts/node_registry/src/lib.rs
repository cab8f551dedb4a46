#![no_std]
use soroban_sdk::{
    contract, contracterror, contractimpl, contractmeta, contracttype, log, symbol_short,
    Address, BytesN, Env, String, Symbol, Vec
};

contractmeta!(
    key = "Description",
    val = "Node registry: content-hash nodes curated by the registry owner"
);

const NULL_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

const DAY_IN_LEDGERS: u32 = 17280;
const BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const LIFETIME_THRESHOLD: u32 = BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NodeNotFound = 1,
    NotOwner = 2,
    InvalidHash = 3,
    InvalidAddress = 4,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Node {
    pub id: u64,
    pub creator: Address,
    pub data_hash: BytesN<32>,
    pub label: String,
    pub created_at: u64,
    pub updated_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Owner,
    Count,
    Node(u64),
    CreatedBy(Address),
}

fn ev_created() -> Symbol { symbol_short!("created") }
fn ev_updated() -> Symbol { symbol_short!("updated") }
fn ev_owner()   -> Symbol { symbol_short!("owner") }

#[contract]
pub struct NodeRegistry;

#[contractimpl]
impl NodeRegistry {
    pub fn __constructor(e: Env, owner: Address) {
        e.storage().instance().set(&DataKey::Owner, &owner);
    }

    /// Register a node. Anyone may create; the node's data is then
    /// curated by the registry owner.
    pub fn create_node(e: Env, creator: Address, data_hash: BytesN<32>, label: String) -> Result<u64, Error> {
        creator.require_auth();
        check_hash(&data_hash)?;

        let id = Self::node_count(e.clone());
        e.storage().instance().set(&DataKey::Count, &(id + 1));
        e.storage().instance().extend_ttl(LIFETIME_THRESHOLD, BUMP_AMOUNT);

        let now = e.ledger().timestamp();
        let node = Node {
            id,
            creator: creator.clone(),
            data_hash: data_hash.clone(),
            label,
            created_at: now,
            updated_at: now,
        };
        put_node(&e, &node);

        let key = DataKey::CreatedBy(creator.clone());
        let mut ids: Vec<u64> = e.storage().persistent().get(&key).unwrap_or(Vec::new(&e));
        ids.push_back(id);
        e.storage().persistent().set(&key, &ids);
        e.storage().persistent().extend_ttl(&key, LIFETIME_THRESHOLD, BUMP_AMOUNT);

        e.events().publish((ev_created(), id), (creator, data_hash));
        log!(&e, "node created", id);
        Ok(id)
    }

    /// Replace a node's data hash. Owner only.
    pub fn update_node(e: Env, caller: Address, node_id: u64, data_hash: BytesN<32>) -> Result<(), Error> {
        caller.require_auth();
        if caller != Self::owner(e.clone()) {
            return Err(Error::NotOwner);
        }

        let mut node = Self::get_node(e.clone(), node_id)?;
        check_hash(&data_hash)?;

        let old = node.data_hash.clone();
        node.data_hash = data_hash.clone();
        node.updated_at = e.ledger().timestamp();
        put_node(&e, &node);

        e.events().publish((ev_updated(), node_id), (old, data_hash));
        log!(&e, "node updated", node_id);
        Ok(())
    }

    pub fn get_node(e: Env, node_id: u64) -> Result<Node, Error> {
        let key = DataKey::Node(node_id);
        let node: Node = e.storage().persistent().get(&key).ok_or(Error::NodeNotFound)?;
        e.storage().persistent().extend_ttl(&key, LIFETIME_THRESHOLD, BUMP_AMOUNT);
        Ok(node)
    }

    pub fn get_created_by(e: Env, creator: Address) -> Vec<u64> {
        let key = DataKey::CreatedBy(creator);
        match e.storage().persistent().get::<DataKey, Vec<u64>>(&key) {
            Some(ids) => {
                e.storage().persistent().extend_ttl(&key, LIFETIME_THRESHOLD, BUMP_AMOUNT);
                ids
            }
            None => Vec::new(&e),
        }
    }

    pub fn node_count(e: Env) -> u64 {
        e.storage().instance().get(&DataKey::Count).unwrap_or(0)
    }

    pub fn owner(e: Env) -> Address {
        e.storage().instance().get(&DataKey::Owner).expect("no-owner")
    }

    pub fn transfer_ownership(e: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        caller.require_auth();
        let previous = Self::owner(e.clone());
        if caller != previous {
            return Err(Error::NotOwner);
        }
        if new_owner == e.current_contract_address()
            || new_owner == Address::from_string(&String::from_str(&e, NULL_ACCOUNT))
        {
            return Err(Error::InvalidAddress);
        }

        e.storage().instance().set(&DataKey::Owner, &new_owner);
        e.storage().instance().extend_ttl(LIFETIME_THRESHOLD, BUMP_AMOUNT);
        e.events().publish((ev_owner(), previous.clone()), new_owner.clone());
        log!(&e, "ownership transferred", previous, new_owner);
        Ok(())
    }
}

fn check_hash(data_hash: &BytesN<32>) -> Result<(), Error> {
    if data_hash.to_array() == [0u8; 32] { return Err(Error::InvalidHash); }
    Ok(())
}

fn put_node(e: &Env, node: &Node) {
    let key = DataKey::Node(node.id);
    e.storage().persistent().set(&key, node);
    e.storage().persistent().extend_ttl(&key, LIFETIME_THRESHOLD, BUMP_AMOUNT);
}
