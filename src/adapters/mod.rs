/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: HTTP and `npm` registry
/// access, manifest and diagram files, the Mermaid CLI, and the console.
pub mod outbound;
