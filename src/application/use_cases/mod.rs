/// Use cases module containing application business logic orchestration
mod visualize_dependencies;

pub use visualize_dependencies::VisualizeDependenciesUseCase;
