//! Built-in config modules

pub mod commitlint;
pub mod depcruise;
pub mod eslint;
pub mod prettier;
pub mod tsconfig;

pub use commitlint::commitlint_module;
pub use depcruise::depcruise_module;
pub use eslint::eslint_module;
pub use prettier::prettier_module;
pub use tsconfig::tsconfig_module;
