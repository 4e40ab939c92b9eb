use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use service::auth::AuthService;
use service::auth::domain::{SignInRequest, SignUpRequest};
use service::auth::password::Argon2PasswordEncoder;
use service::auth::repository::mock::MemoryCredentialStore;
use service::auth::token::JwtTokenIssuer;

fn bench_sign_in(c: &mut Criterion) {
    let svc = AuthService::new(
        Arc::new(MemoryCredentialStore::default()),
        Arc::new(Argon2PasswordEncoder::new()),
        Arc::new(JwtTokenIssuer::new("secret", 3600)),
    );

    // pre-create user outside of the benchmark using a tokio runtime
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(svc.sign_up(SignUpRequest {
        username: "bench".into(),
        email: "bench@example.com".into(),
        password: "Benchmark1".into(),
        role: 1,
        first_name: "Bench".into(),
        last_name: String::new(),
        phone_number: String::new(),
        address: String::new(),
    }))
    .unwrap();

    c.bench_function("auth_sign_in_verify", |b| {
        b.iter(|| {
            let req = SignInRequest { username: Some("bench".into()), email: None, password: "Benchmark1".into() };
            rt.block_on(svc.sign_in(req)).unwrap();
        });
    });
}

criterion_group!(benches, bench_sign_in);
criterion_main!(benches);
