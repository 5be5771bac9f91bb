use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use common::types::user::{CreateUserRequest, LoginRequest};
use service::auth::{Argon2Hasher, TokenIssuer};
use service::users::{repository::mock::MockUserRepository, UserService};

fn bench_login(c: &mut Criterion) {
    let svc = UserService::new(Arc::new(MockUserRepository::default()), Arc::new(Argon2Hasher), TokenIssuer::new("secret", 12));

    // pre-create user outside of the benchmark using a tokio runtime
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(svc.create(CreateUserRequest {
        username: "bench".into(),
        email: "bench@example.com".into(),
        password: "Benchmark1".into(),
        first_name: "Bench".into(),
        last_name: "User".into(),
        phone: None,
        avatar_url: None,
    }))
    .unwrap();

    c.bench_function("user_login_verify", |b| {
        b.iter(|| {
            let req = LoginRequest { username: Some("bench".into()), email: None, password: "Benchmark1".into() };
            rt.block_on(svc.login(req)).unwrap();
        });
    });
}

criterion_group!(benches, bench_login);
criterion_main!(benches);
