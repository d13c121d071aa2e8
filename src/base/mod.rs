mod aggregate;
pub mod barchart;
pub mod category;
mod categoryfeed;
mod cents;
mod charset;
mod code;
mod config;
pub mod date;
pub mod export;
mod filter;
pub mod fs;
pub mod interval;
mod period;
mod price;
mod sale;
mod stats;
mod summary;
mod table;
pub mod upload;
pub mod util;

pub use aggregate::Aggregate;
pub use category::Bucket;
pub use category::CategoryToken;
pub use category::RecordCategory;
pub use categoryfeed::Categoryfeed;
pub use cents::Cents;
pub use charset::Charset;
pub use code::Codelist;
pub use code::UploadedCode;
pub use config::Config;
pub use date::Date;
pub use filter::Criteria;
pub use filter::Filterable;
pub use filter::RawCriteria;
pub use fs::Fs;
pub use interval::Interval;
pub use period::Period;
pub use price::Pricelist;
pub use sale::Sale;
pub use sale::Salelist;
pub use stats::CodeStats;
pub use stats::SaleStats;
pub use summary::Summary;
pub use table::Table;
