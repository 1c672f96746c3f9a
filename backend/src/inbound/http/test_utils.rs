//! Shared fixtures for handler tests.

use std::sync::Arc;

use actix_web::web;
use chrono::NaiveDate;

use crate::domain::ports::{InMemoryUserRepository, UserRepository};
use crate::domain::{Description, DurationMinutes, Exercise, User, UserId, Username};
use crate::inbound::http::state::HttpState;

/// Empty in-memory state.
pub(crate) fn test_state() -> web::Data<HttpState> {
    web::Data::new(HttpState::new(Arc::new(InMemoryUserRepository::default())))
}

/// State holding "alice" (one exercise: run, 30 minutes, 2023-01-15) and an
/// empty "bob". Returns alice's id for path construction.
pub(crate) async fn seeded_state() -> (web::Data<HttpState>, UserId) {
    let repo = Arc::new(InMemoryUserRepository::default());

    let mut alice = User::register(Username::new("alice").expect("valid username"));
    alice.add_exercise(Exercise::new(
        Description::new("run").expect("valid description"),
        DurationMinutes::new(30).expect("valid duration"),
        NaiveDate::from_ymd_opt(2023, 1, 15).expect("valid date"),
    ));
    let alice_id = *alice.id();
    repo.insert(&alice).await.expect("seed alice");

    let bob = User::register(Username::new("bob").expect("valid username"));
    repo.insert(&bob).await.expect("seed bob");

    (web::Data::new(HttpState::new(repo)), alice_id)
}
