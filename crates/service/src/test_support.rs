#![cfg(test)]
use configs::JwtConfig;
use models::{Authentication, Comment, Item};

use crate::token::IssuerSettings;

pub fn init_tracing() {
    common::utils::logging::init_logging_default();
}

pub fn sample_items() -> Vec<Item> {
    let item = |author: &str, title: &str, description: &str, votes: i32| Item {
        author: author.into(),
        title: title.into(),
        description: description.into(),
        votes,
        ..Default::default()
    };
    vec![
        item("John Doe", "Standing desks", "Worth the money?", 4),
        item("Jane Doe", "Pair programming", "How often do you pair?", 12),
        item("Max Power", "Release trains", "Fixed cadence or on demand?", 0),
        item("Max Power", "Code review SLAs", "What is a fair turnaround?", -2),
        item("Xander Smith", "Monorepos", "Anyone regret the switch?", 7),
    ]
}

pub fn sample_comments() -> Vec<Comment> {
    let comment = |author: &str, parent: &str, value: &str, votes: i32| Comment {
        author_id: author.into(),
        parent_id: parent.into(),
        value: value.into(),
        votes,
        ..Default::default()
    };
    vec![
        comment("jane", "item-1", "Every single day.", 3),
        comment("john", "item-1", "Only on tricky bugs.", 1),
        comment("jane", "item-2", "On demand, always.", 7),
        comment("max", "item-3", "We never regretted it.", -1),
    ]
}

pub fn neo_auth() -> Authentication {
    Authentication {
        primary_id: "123".into(),
        primary_group_id: "rebels".into(),
        role_id: "admin".into(),
        alias: "Neo".into(),
        email: "neo@zion.org".into(),
        hidden: false,
    }
}

pub fn jwt_config() -> JwtConfig {
    JwtConfig {
        issuer: "focusboard-test".into(),
        audience: "focusboard-clients".into(),
        secret: "test-secret-0123456789".into(),
        algorithm: "HS256".into(),
        valid_for_secs: 600,
        leeway_secs: 0,
    }
}

pub fn settings() -> IssuerSettings {
    IssuerSettings::from(&jwt_config())
}
