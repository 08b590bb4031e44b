// webpify/src/processors/mod.rs
mod batch;
mod discover;
mod encoder;
mod loader;
mod orient;
mod resizer;

pub use batch::BatchRunner;
pub use discover::Discoverer;
pub use encoder::WebpEncoder;
pub use loader::Loader;
pub use orient::Orienter;
pub use resizer::Resizer;

pub mod prelude {
    pub use super::{BatchRunner, Discoverer, Loader, Orienter, Resizer, WebpEncoder};
}
