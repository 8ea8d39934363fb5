mod hero_details_repository;
mod hero_keys_repository;

pub use hero_details_repository::PostgresHeroDetailsRepository;
pub use hero_keys_repository::PostgresHeroKeysRepository;
