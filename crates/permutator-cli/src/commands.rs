// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Subcommand implementations. Each one writes its user-facing output to the
//! supplied writer; diagnostics go through `tracing`.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{anyhow, bail, Context, Result};
use permutator_app_core::config::ConfigService;
use permutator_app_core::prefs::{MergeToolPrefs, PermutatorPrefs, PREFS_KEY};
use permutator_config_fs::FsConfigStore;
use permutator_core::{
    distinct_permutations, for_each_permutation, CharacterStrategy, MergeTool, ProcessMerger,
    StopSignal, StrategyRegistry, Visit,
};
use tracing::{debug, info, warn};

use crate::cli::{ConfigCommand, MergeToolArgs, RunArgs};

/// Saved settings plus the store they came from.
pub struct Settings {
    service: ConfigService<FsConfigStore>,
    prefs: PermutatorPrefs,
}

impl Settings {
    /// Load settings from `dir`, or from the platform config dir when `None`.
    pub fn load(dir: Option<&Path>) -> Result<Self> {
        let store = match dir {
            Some(dir) => FsConfigStore::at(dir),
            None => FsConfigStore::new(),
        }
        .context("opening config store")?;
        let service = ConfigService::new(store);
        debug!(dir = %service.store().base().display(), "loading settings");
        let prefs = service
            .load_or_default(PREFS_KEY)
            .context("reading saved settings")?;
        Ok(Self { service, prefs })
    }

    fn save(&self) -> Result<()> {
        self.service
            .save(PREFS_KEY, &self.prefs)
            .context("saving settings")
    }
}

fn registry(tool: MergeTool) -> StrategyRegistry {
    StrategyRegistry::with_defaults(Arc::new(ProcessMerger::new(tool)))
}

fn merge_tool(prefs: &MergeToolPrefs) -> MergeTool {
    MergeTool {
        program: PathBuf::from(&prefs.program),
        leading_args: prefs.leading_args.clone(),
        extension: prefs.extension.clone(),
        output_suffix: prefs.output_suffix.clone(),
    }
}

/// Fold command-line overrides into `prefs`.
fn apply_overrides(prefs: &mut MergeToolPrefs, args: MergeToolArgs) {
    if let Some(program) = args.merge_tool {
        prefs.program = program;
    }
    if !args.merge_args.is_empty() {
        prefs.leading_args = args.merge_args;
    }
    if let Some(extension) = args.extension {
        prefs.extension = extension;
    }
    if args.no_output_suffix {
        prefs.output_suffix = None;
    } else if let Some(suffix) = args.output_suffix {
        prefs.output_suffix = Some(suffix);
    }
}

/// `permutator list`
pub fn list(settings: &Settings, out: &mut dyn Write) -> Result<()> {
    for strategy in registry(merge_tool(&settings.prefs.merge_tool)).iter() {
        writeln!(out, "{}\n    {}", strategy.name(), strategy.prompt())?;
    }
    Ok(())
}

fn render_count(count: Option<u128>) -> String {
    count.map_or_else(|| "more than 2^128".to_owned(), |n| n.to_string())
}

/// `permutator count`
pub fn count(
    settings: &Settings,
    strategy: &str,
    inputs: &[String],
    out: &mut dyn Write,
) -> Result<()> {
    let registry = registry(merge_tool(&settings.prefs.merge_tool));
    if registry.get(strategy).is_none() {
        bail!("strategy not registered: {strategy}");
    }
    if strategy == CharacterStrategy::NAME {
        for input in inputs {
            let chars: Vec<char> = input.chars().collect();
            writeln!(out, "{input}\t{}", render_count(distinct_permutations(&chars)))?;
        }
    } else {
        writeln!(out, "{}", render_count(distinct_permutations(inputs)))?;
    }
    Ok(())
}

/// `permutator print`
pub fn print(chars: bool, inputs: &[String], out: &mut dyn Write) -> Result<()> {
    if chars {
        let mut line = String::new();
        for input in inputs {
            let mut tokens: Vec<char> = input.chars().collect();
            tokens.sort_unstable();
            for_each_permutation(&mut tokens, |perm| -> std::io::Result<Visit> {
                line.clear();
                line.extend(perm);
                writeln!(out, "{line}")?;
                Ok(Visit::Continue)
            })?;
        }
    } else {
        let mut tokens = inputs.to_vec();
        tokens.sort_unstable();
        for_each_permutation(&mut tokens, |perm| -> std::io::Result<Visit> {
            writeln!(out, "{}", perm.join(" "))?;
            Ok(Visit::Continue)
        })?;
    }
    Ok(())
}

/// `permutator run`
pub fn run(settings: &mut Settings, args: RunArgs, out: &mut dyn Write) -> Result<()> {
    let dest = args
        .dest
        .or_else(|| settings.prefs.last_destination.clone())
        .ok_or_else(|| anyhow!("no destination given and none remembered; pass --dest"))?;

    let mut tool = settings.prefs.merge_tool.clone();
    apply_overrides(&mut tool, args.merge);
    let registry = registry(merge_tool(&tool));
    let stop = args.limit.map_or_else(StopSignal::new, StopSignal::with_limit);

    let report = registry
        .run_until(&args.strategy, &args.inputs, &dest, &stop)
        .with_context(|| format!("{} run into {} failed", args.strategy, dest.display()))?;

    info!(
        artifacts = report.artifacts.len(),
        permutations = report.permutations,
        "run complete"
    );
    for artifact in &report.artifacts {
        writeln!(out, "{}", artifact.display())?;
    }
    if report.stopped {
        writeln!(out, "stopped after {} permutations", report.permutations)?;
    }

    if settings.prefs.last_destination.as_deref() != Some(dest.as_path()) {
        settings.prefs.last_destination = Some(dest);
        if let Err(err) = settings.save() {
            warn!("could not remember destination: {err:#}");
        }
    }
    Ok(())
}

/// `permutator config ...`
pub fn config(settings: &mut Settings, cmd: ConfigCommand, out: &mut dyn Write) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            serde_json::to_writer_pretty(&mut *out, &settings.prefs)?;
            writeln!(out)?;
        }
        ConfigCommand::SetMergeTool(args) => {
            apply_overrides(&mut settings.prefs.merge_tool, args);
            settings.save()?;
            info!(program = %settings.prefs.merge_tool.program, "merge tool saved");
        }
    }
    Ok(())
}
