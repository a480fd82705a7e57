use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use configs::JwtConfig;
use models::{ActorLogin, Authentication};
use service::token::repository::memory::InMemoryCredentialStore;
use service::token::TokenService;

fn bench_token_issue(c: &mut Criterion) {
    let store = Arc::new(InMemoryCredentialStore::default());
    let cfg = JwtConfig {
        issuer: "focusboard-bench".into(),
        audience: "focusboard-clients".into(),
        secret: "bench-secret".into(),
        ..Default::default()
    };
    let svc = TokenService::from_config(store.clone(), &cfg).unwrap();
    let auth = Authentication {
        primary_id: "bench-1".into(),
        email: "bench@example.com".into(),
        alias: "Bench".into(),
        ..Default::default()
    };

    // register outside of the measured loop
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(store.register("bench@example.com", "Benchmark1", auth)).unwrap();
    let login = ActorLogin::new("bench@example.com", "Benchmark1");

    c.bench_function("token_get_claims_identity", |b| {
        b.iter(|| {
            let token = rt.block_on(svc.get_claims_identity(&login)).unwrap();
            assert!(token.is_some());
        });
    });

    let claims = rt
        .block_on(svc.get_claims_identity(&login))
        .unwrap()
        .and_then(|t| svc.read_claims(&t.token))
        .unwrap();
    c.bench_function("token_renew_claims_identity", |b| {
        b.iter(|| svc.renew_claims_identity(&claims).unwrap());
    });
}

criterion_group!(benches, bench_token_issue);
criterion_main!(benches);
