pub const PROJECT_SEED: &[u8] = b"gso-project";
pub const PROJECT_V2_SEED: &[u8] = b"gso-project-v2";
pub const GSO_AUTHORITY_SEED: &[u8] = b"gso-authority";
pub const VAULT_SEED: &[u8] = b"gso-vault";
pub const CLAIM_MINT_SEED: &[u8] = b"xgso";

/// Denominator of `lockup_ratio_per_million_lots`.
pub const RATIO_DENOMINATOR: u128 = 1_000_000;

/// A project name is a single PDA seed, so it is capped at the seed limit.
pub const MAX_PROJECT_NAME_LEN: usize = 32;
