//! Configuration sections of `folio.toml`.

mod content;
mod pagination;
mod render;
mod toc;

pub use content::ContentConfig;
pub use pagination::PaginationConfig;
pub use render::RenderConfig;
pub use toc::TocConfig;
