// PDA Seeds
pub const SPLIT_VAULT_SEED: &[u8] = b"split_vault";

// Share policy
pub const TOTAL_SHARE_PERCENT: u64 = 100; // member shares must sum to exactly this
