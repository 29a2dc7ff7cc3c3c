pub mod calendar;
pub mod calendar_events;
pub mod event;
pub mod event_users;
pub mod token_block_list;
pub mod user;

/*
 A user owns calendars and hosts events. Events can be shared: other users
 become members through event_users, and an event can be pinned onto any
 number of calendars through calendar_events. Ownership (event.owner) and
 membership (event_users) are separate things; the owner is not implicitly
 a member row.
 */
