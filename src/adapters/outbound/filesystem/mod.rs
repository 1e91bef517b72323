/// Filesystem adapters for manifest input and diagram output
mod file_writer;
mod manifest_reader;

pub use file_writer::FileSystemWriter;
pub use manifest_reader::FileSystemManifestReader;
