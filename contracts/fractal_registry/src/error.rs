use soroban_sdk::contracterror;

/// Rejections surfaced by the registry. Discriminants are part of the
/// contract interface and must stay stable.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NodeNotFound = 1,
    ParentInactive = 2,
    AlreadyInactive = 3,
    NotCreator = 4,
    NotOwner = 5,
    InvalidHash = 6,
    InvalidAddress = 7,
}
