use soroban_sdk::{contracttype, Address, BytesN, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Node {
    pub id: u64,
    pub creator: Address,
    pub data_hash: BytesN<32>,   // content hash, never all zeros
    pub created_at: u64,         // ledger timestamp, unix seconds
    pub parent_id: Option<u64>,  // None for roots
    pub is_root: bool,
    pub is_active: bool,
    pub label: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Owner,
    NextId,
    Node(u64),
    Children(u64),
    CreatedBy(Address),
}
