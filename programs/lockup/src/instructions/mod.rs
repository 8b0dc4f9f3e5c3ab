pub mod initialize_factory;
pub mod update_factory;
pub mod create_escrow;
pub mod template;
pub mod preconfigure;
pub mod set_vesting_delay;
pub mod set_total;
pub mod setup;
pub mod configure;
pub mod fill;
pub mod set_funding;
pub mod reduce_total;
pub mod abort_funding;
pub mod withdraw;
pub mod close;
pub mod transfer_ownership;
pub mod grant_funder;
pub mod set_delegate;
pub mod participate;
pub mod set_stakeable;
pub mod approve_update;
pub mod approve_delete;
pub mod set_version;
pub mod delete_escrow;

// Each module exports a `handler` fn; the glob re-exports collide on it.
// Anchor's #[program] macro requires glob re-exports for generated account types.
#[allow(ambiguous_glob_reexports)]
pub use initialize_factory::*;
pub use update_factory::*;
pub use create_escrow::*;
pub use template::*;
pub use preconfigure::*;
pub use set_vesting_delay::*;
pub use set_total::*;
pub use setup::*;
pub use configure::*;
pub use fill::*;
pub use set_funding::*;
pub use reduce_total::*;
pub use abort_funding::*;
pub use withdraw::*;
pub use close::*;
pub use transfer_ownership::*;
pub use grant_funder::*;
pub use set_delegate::*;
pub use participate::*;
pub use set_stakeable::*;
pub use approve_update::*;
pub use approve_delete::*;
pub use set_version::*;
pub use delete_escrow::*;
