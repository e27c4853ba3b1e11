//! dependency-cruiser's recommended forbidden rules

use serde_json::json;

use crate::factory::{RuleDefaults, RuleFactory};
use crate::rule::{RuleZone, Severity};

const TEST_FILE_PATTERN: &str = "[.](?:spec|test)[.](?:js|mjs|cjs|jsx|ts|mts|cts|tsx)$";

const DEPRECATED_CORE_MODULES: &[&str] = &[
    "^v8/tools/codemap$",
    "^v8/tools/consarray$",
    "^v8/tools/csvparser$",
    "^v8/tools/logreader$",
    "^v8/tools/profile_view$",
    "^v8/tools/profile$",
    "^v8/tools/SourceMap$",
    "^v8/tools/splaytree$",
    "^v8/tools/tickprocessor-driver$",
    "^v8/tools/tickprocessor$",
    "^node-inspect/lib/_inspect$",
    "^node-inspect/lib/internal/inspect_client$",
    "^node-inspect/lib/internal/inspect_repl$",
    "^async_hooks$",
    "^punycode$",
    "^domain$",
    "^constants$",
    "^sys$",
    "^_linklist$",
    "^_stream_wrap$",
];

/// Known rules in resolution order.
pub(crate) fn recommended_rules() -> Vec<RuleFactory> {
    vec![
        RuleFactory::new(
            "no-circular",
            "This dependency is part of a circular relationship. You might want to revise \
             your solution (i.e. use dependency inversion, make sure the modules have a \
             single responsibility)",
            RuleDefaults::new(Severity::Error).with_to(RuleZone::new().with("circular", true)),
        ),
        RuleFactory::new(
            "no-orphans",
            "This is an orphan module - it's likely not used (anymore?). Either use it or \
             remove it. If it's logical this module is an orphan (i.e. it's a config file), \
             add an exception for it in your dependency-cruiser configuration.",
            RuleDefaults::new(Severity::Warn)
                .with_from(
                    RuleZone::new()
                        .with("orphan", true)
                        .with_path_not([
                            "(^|/)[.][^/]+[.](?:js|cjs|mjs|ts|cts|mts|json)$",
                            "[.]d[.]ts$",
                            "(^|/)tsconfig[.]json$",
                            "(^|/)(?:babel|webpack)[.]config[.](?:js|cjs|mjs|ts|cts|mts|json)$",
                        ]),
                ),
        ),
        RuleFactory::new(
            "no-deprecated-core",
            "A module depends on a node core module that has been deprecated. Find an \
             alternative - these are bound to exist - node doesn't deprecate lightly.",
            RuleDefaults::new(Severity::Warn).with_to(
                RuleZone::new()
                    .with("dependencyTypes", json!(["core"]))
                    .with_path(DEPRECATED_CORE_MODULES.iter().copied()),
            ),
        ),
        RuleFactory::new(
            "not-to-deprecated",
            "This module uses a (version of an) npm module that has been deprecated. Either \
             upgrade to a later version of that module, or find an alternative.",
            RuleDefaults::new(Severity::Warn)
                .with_to(RuleZone::new().with("dependencyTypes", json!(["deprecated"]))),
        ),
        RuleFactory::new(
            "no-non-package-json",
            "This module depends on an npm package that isn't in the 'dependencies' section \
             of your package.json. That's problematic as the package either (1) won't be \
             available on live (2 - worse) will be available on live with an non-guaranteed \
             version. Fix it by adding the package to the dependencies in your package.json.",
            RuleDefaults::new(Severity::Error).with_to(
                RuleZone::new().with("dependencyTypes", json!(["npm-no-pkg", "npm-unknown"])),
            ),
        ),
        RuleFactory::new(
            "not-to-unresolvable",
            "This module depends on a module that cannot be found ('resolved to disk'). If \
             it's an npm module: add it to your package.json. In all other cases you likely \
             already know what to do.",
            RuleDefaults::new(Severity::Error)
                .with_to(RuleZone::new().with("couldNotResolve", true)),
        ),
        RuleFactory::new(
            "no-duplicate-dep-types",
            "Likely this module depends on an external ('npm') package that occurs more than \
             once in your package.json i.e. both as a devDependencies and in dependencies. \
             This will cause maintenance problems later on.",
            RuleDefaults::new(Severity::Warn).with_to(
                RuleZone::new()
                    .with("moreThanOneDependencyType", true)
                    .with("dependencyTypesNot", json!(["type-only"])),
            ),
        ),
        RuleFactory::new(
            "not-to-spec",
            "This module depends on a spec (test) file. The sole responsibility of a spec \
             file is to test code. If there's something in a spec that's of use to other \
             modules, it doesn't have that single responsibility anymore. Factor it out \
             into (e.g.) a separate utility/ helper or a mock.",
            RuleDefaults::new(Severity::Error)
                .with_to(RuleZone::new().with_path([TEST_FILE_PATTERN])),
        ),
        RuleFactory::new(
            "not-to-dev-dep",
            "This module depends on an npm package from the 'devDependencies' section of \
             your package.json. It looks like something that ships to production, though. \
             To prevent problems with npm packages that aren't there on production declare \
             it (only!) in the 'dependencies' section of your package.json.",
            RuleDefaults::new(Severity::Error)
                .with_from(
                    RuleZone::new()
                        .with_path(["^(src)"])
                        .with_path_not([TEST_FILE_PATTERN]),
                )
                .with_to(
                    RuleZone::new()
                        .with("dependencyTypes", json!(["npm-dev"]))
                        .with("dependencyTypesNot", json!(["type-only"]))
                        .with_path_not(["node_modules/@types/"]),
                ),
        ),
        RuleFactory::new(
            "optional-deps-used",
            "This module depends on an npm package that is declared as an optional \
             dependency in your package.json. As this makes sense in limited situations \
             only, it's flagged here.",
            RuleDefaults::new(Severity::Info)
                .with_to(RuleZone::new().with("dependencyTypes", json!(["npm-optional"]))),
        ),
        RuleFactory::new(
            "peer-deps-used",
            "This module depends on an npm package that is declared as a peer dependency \
             in your package.json. This makes sense if your package is e.g. a plugin, but \
             in other cases - maybe not so much.",
            RuleDefaults::new(Severity::Warn)
                .with_to(RuleZone::new().with("dependencyTypes", json!(["npm-peer"]))),
        ),
    ]
}
