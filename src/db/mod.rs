pub mod calendar;
pub mod event;
pub mod service;
pub mod token_block_list;
pub mod user;
