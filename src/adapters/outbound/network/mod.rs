/// Network adapters for registry access over HTTP
mod npm_registry_client;

pub use npm_registry_client::{
    NpmRegistryClient, DEFAULT_MAX_RETRIES, DEFAULT_REGISTRY_URL, DEFAULT_TIMEOUT,
};
