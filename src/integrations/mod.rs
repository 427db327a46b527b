// External collaborators: the public quote API and the display device.
pub mod cryptocompare;
pub mod lametric;

pub use cryptocompare::CryptoCompareClient;
pub use lametric::LaMetricClient;
