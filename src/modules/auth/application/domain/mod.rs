mod keys;

pub use keys::AuthKeys;
