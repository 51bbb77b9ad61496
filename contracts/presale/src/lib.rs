#![no_std]
#![allow(clippy::too_many_arguments)]

mod contract;
mod errors;
mod events;
mod migration;
mod oracle;
mod pricing;
mod storage;
mod types;
mod vesting;


pub use contract::{PresaleContract, PresaleContractClient};
pub use errors::Error;
pub use events::{TokensBoughtEvent, TokensClaimedEvent};
pub use migration::SCHEMA_VERSION;
pub use oracle::{PriceFeedClient, PriceFeedInterface};
pub use pricing::{BASE_MULTIPLIER, PRICE_DECIMALS};
pub use types::{Round, SaleConfig, VestingRecord};
pub use vesting::MONTH;
