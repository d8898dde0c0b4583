pub mod error;
pub use error::Result;
pub use error::Error;

pub mod config;
pub use config::Config;
pub use config::SnapshotOptions;
pub use config::ResolveOptions;

pub mod record;
pub use record::PackageRecord;

pub mod table;

pub mod snapshot;
pub use snapshot::SnapshotGraph;
pub use snapshot::PackageVariant;

pub mod resolver;
pub use resolver::Resolver;
pub use resolver::available;
pub use resolver::installable;

pub mod history;
