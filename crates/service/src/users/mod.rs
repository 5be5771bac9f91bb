//! User accounts: domain inputs, repository abstraction and the service that
//! ties hashing, persistence and token issuing together.

pub mod domain;
pub mod repo;
pub mod repository;
pub mod service;

pub use repo::seaorm::SeaOrmUserRepository;
pub use repository::UserRepository;
pub use service::UserService;
