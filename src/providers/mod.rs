pub mod bazaar;

pub use bazaar::BazaarProvider;
