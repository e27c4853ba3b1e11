//! dependency-cruiser configuration (`.dependency-cruiser.cjs`)

use kit_depcruise::{DepCruiseConfig, DepCruiseInput};

use crate::error::Result;
use crate::module::{ConfigModule, Dependency};

fn render(config: &DepCruiseConfig) -> Result<String> {
    Ok(kit_depcruise::render(config)?)
}

pub fn depcruise_module() -> ConfigModule<DepCruiseInput, DepCruiseConfig> {
    ConfigModule::new(
        "dependency-cruiser",
        kit_depcruise::config::FILENAME,
        vec![Dependency::dev("dependency-cruiser")],
        kit_depcruise::define,
    )
    .with_template(render)
}
