/// Outbound ports (Driven ports) - Infrastructure interfaces
pub mod diagram_renderer;
pub mod diagram_writer;
pub mod manifest_reader;
pub mod progress_reporter;
pub mod registry_lookup;

pub use diagram_renderer::DiagramRenderer;
pub use diagram_writer::DiagramWriter;
pub use manifest_reader::{ManifestReader, ManifestSource};
pub use progress_reporter::ProgressReporter;
pub use registry_lookup::{dependencies_from_document, parse_object_response, RegistryLookup};
