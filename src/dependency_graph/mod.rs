/// Domain layer for dependency graph collection
///
/// Pure models and services: the collector talks to the outside world only
/// through the `RegistryLookup` and `ProgressReporter` ports.
pub mod domain;
pub mod policies;
pub mod services;
