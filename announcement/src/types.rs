multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Announcement Status — lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum AnnouncementStatus {
    /// Deployed but not yet configured by the manufacturer.
    Uninitialized,
    /// Task attributes recorded. Consumers can subscribe while the
    /// roster has room.
    Open,
    /// The validator certified completion and fixed the reward shares.
    Finished,
    /// Rewards paid out. Terminal state, reached exactly once.
    Settled,
}
