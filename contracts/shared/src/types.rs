use soroban_sdk::{contracttype, Address, Vec};

/// Ownership units, in basis points of `TOTAL_SHARES`
pub type Shares = u32;

/// An asset held by an external registry contract
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetRef {
    pub registry: Address,
    pub asset_id: u64,
}

/// Off-chain dealt VSS material submitted at will creation.
///
/// `trustees`, `secret_shares`, `blinding_shares` and `x_coordinates` are
/// parallel arrays. `commitments` holds one Pedersen commitment per
/// polynomial coefficient and is stored verbatim.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VssDealing {
    pub trustees: Vec<Address>,
    pub secret_shares: Vec<u64>,
    pub blinding_shares: Vec<u64>,
    pub x_coordinates: Vec<u64>,
    pub commitments: Vec<u64>,
    pub threshold: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WillInfo {
    pub id: u64,
    pub creator: Address,
    pub asset: AssetRef,
    pub heirs: Vec<Address>,
    pub percentages: Vec<Shares>,
    /// Trustees in registration order
    pub trustees: Vec<Address>,
    pub threshold: u32,
    pub active: bool,
    /// Terminal: set once by execution
    pub claimed: bool,
    pub revealed_count: u32,
    pub created_at: u64,
}

/// One trustee's share of a will: `secret_share = F(x)`, `blinding_share = G(x)`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TrusteeShare {
    pub secret_share: u64,
    pub blinding_share: u64,
    pub x_coordinate: u64,
    pub committed: bool,
    pub verified: bool,
    pub revealed: bool,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TrusteeStatus {
    pub committed: bool,
    pub verified: bool,
    pub revealed: bool,
}

/// Fractional ownership ledger header for one will. Balances are stored
/// per owner; `owners` lists exactly the identities with a positive balance.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipInfo {
    pub total_shares: Shares,
    pub owners: Vec<Address>,
    pub distributed: bool,
    pub asset_released: bool,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ProtocolParams {
    pub prime: u64,
    pub group_order: u64,
    pub g: u64,
    pub h: u64,
}

/// A revealed share as consumed by Lagrange interpolation
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SharePoint {
    pub x: u64,
    pub y: u64,
}

impl TrusteeShare {
    pub fn status(&self) -> TrusteeStatus {
        TrusteeStatus {
            committed: self.committed,
            verified: self.verified,
            revealed: self.revealed,
        }
    }

    pub fn point(&self) -> SharePoint {
        SharePoint {
            x: self.x_coordinate,
            y: self.secret_share,
        }
    }
}
