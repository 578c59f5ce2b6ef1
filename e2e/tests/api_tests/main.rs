//! Scenarios calling the miners' REST API directly.

mod register_wallet;
