//! Hand-off of an assembled configuration to the host build tool's plugin

use crate::collect::PathMatcher;
use crate::config::FederationOptions;
use crate::error::Result;
use crate::federation::{assemble_config, FederationConfig};

/// Constructs the host build tool's federation plugin from a configuration.
///
/// Closures taking a [`FederationConfig`] implement this directly.
pub trait PluginFactory {
    /// Whatever the host uses to represent the plugin
    type Plugin;

    fn construct(&self, config: FederationConfig) -> Self::Plugin;
}

impl<F, P> PluginFactory for F
where
    F: Fn(FederationConfig) -> P,
{
    type Plugin = P;

    fn construct(&self, config: FederationConfig) -> P {
        self(config)
    }
}

/// Assemble the configuration for `options` and construct the plugin from it.
///
/// The factory's result is returned as-is. If assembly fails the factory is
/// never called.
pub fn build_plugin<M, F>(options: &FederationOptions, matcher: &M, factory: &F) -> Result<F::Plugin>
where
    M: PathMatcher + ?Sized,
    F: PluginFactory + ?Sized,
{
    let config = assemble_config(options, matcher)?;
    Ok(factory.construct(config))
}
