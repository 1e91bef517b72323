/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports describe everything the collector and the use case need
/// from the outside world: the registry, the manifest source, the diagram
/// file, the renderer binary and the console.
pub mod outbound;
