/// Process adapters wrapping external command-line tools
mod mermaid_cli;
mod npm_cli_lookup;

pub use mermaid_cli::{MermaidCli, DEFAULT_RENDER_TIMEOUT};
pub use npm_cli_lookup::{NpmCliLookup, DEFAULT_NPM_TIMEOUT};
