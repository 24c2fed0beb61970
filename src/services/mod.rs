pub mod passes;

pub use self::passes::service as passes;
