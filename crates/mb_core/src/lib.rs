pub mod config;
pub mod error;
pub mod logging;
pub mod navigation;
pub mod source;
pub mod types;

pub use config::SiteConfig;
pub use error::{Error, Result};
pub use navigation::{detail_href, NavigationContext, ViewMode};
pub use source::ArticleSource;
pub use types::Article;
