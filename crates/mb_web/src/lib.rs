pub mod date;
pub mod image;
pub mod markup;
pub mod page;
pub mod presenter;
pub mod views;

pub use date::format_date;
pub use image::{FallbackImage, Placeholder};
pub use page::{Mount, RenderedPage};
pub use presenter::Presenter;
pub use views::{ArticleCard, ArticleDetail, DetailView, ListView, RelatedLink};

pub mod prelude {
    pub use mb_core::{Article, ArticleSource, Error, NavigationContext, Result, SiteConfig};
    pub use crate::{DetailView, ListView, Presenter, RenderedPage};
}
